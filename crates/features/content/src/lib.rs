//! Content feature: where page content comes from.
//!
//! [`ContentClient`] queries the headless store, [`fallback`] holds the bundled copy of
//! every document, and [`PageLoader`] combines the two behind the [`MountGate`] so a page
//! always ends up with one complete set of content.

mod client;
mod error;
pub mod fallback;
pub mod gate;
pub mod loader;
mod query;
mod sanity;
mod source;

pub use crate::client::ContentClient;
pub use crate::error::{ContentError, ContentErrorExt};
pub use crate::gate::MountGate;
pub use crate::loader::{LoadState, Origin, PageLoader, Resolved};
pub use crate::query::ContentQuery;
pub use crate::sanity::SanityClient;
pub use crate::source::{ContentSource, OfflineSource};
