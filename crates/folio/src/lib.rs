//! Facade crate for the Folio features and shared modules.
//! Re-exports domain/kernel primitives and wires each feature's service into the site state.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `folio` with the `server` feature.
//! - Call `folio::init` to get a [`kernel::server::SiteStateBuilder`] with every feature
//!   service registered; register replacements before `build()` to swap one out.

pub use folio_domain as domain;
pub use folio_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use folio_kernel::server::router::system_router;
    }
}

/// Feature crates, re-exported under one roof.
pub mod features {
    pub use folio_contact as contact;
    pub use folio_content as content;
    pub use folio_render as render;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "content",
        "render",
        "contact",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Registers every feature service for the given configuration.
///
/// * [`features::content::ContentClient`]: live store when `[content]` is active, offline otherwise.
/// * [`features::render::SanityImageUrls`]: image CDN URLs.
/// * [`features::contact::ContactService`]: Formspree-style delivery.
#[cfg(feature = "server")]
pub fn init(config: &domain::config::SiteConfig) -> kernel::server::SiteStateBuilder {
    use features::{contact::ContactService, content::ContentClient, render::SanityImageUrls};

    let state = kernel::server::SiteState::builder()
        .config(config.clone())
        .slice(ContentClient::from_config(&config.content))
        .slice(SanityImageUrls::from_config(&config.assets, &config.content))
        .slice(ContactService::formspree(config.contact.clone()));

    tracing::info!(features = ?features::ENABLED, "Feature services registered");
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_features_are_always_enabled() {
        assert!(features::is_enabled("content"));
        assert!(features::is_enabled("contact"));
        assert!(!features::is_enabled("payments"));
    }

    #[cfg(feature = "server")]
    #[test]
    fn init_registers_every_service() {
        let state = init(&domain::config::SiteConfig::default()).build().unwrap();
        assert!(state.get_slice::<features::content::ContentClient>().is_some());
        assert!(state.get_slice::<features::render::SanityImageUrls>().is_some());
        assert!(state.get_slice::<features::contact::ContactService>().is_some());
    }
}
