mod health;
pub mod router;
pub mod state;

pub use health::HealthResponse;
pub use router::system_router;
pub use state::{SiteState, SiteStateBuilder, SiteStateError};

/// `OpenAPI` tag for infrastructure endpoints.
pub const SYSTEM_TAG: &str = "system";
