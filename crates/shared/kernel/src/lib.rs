//! Kernel utilities shared by the feature crates and the server.
//!
//! * [`config::load_config`] layers the site config file with `FOLIO__` environment overrides.
//! * `server` (feature `server`) holds the request-wide [`server::SiteState`] and the
//!   system routes (`/health`).

pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use folio_domain as domain;
