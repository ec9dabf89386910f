use super::SYSTEM_TAG;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use folio_derive::{api_handler, content_model};
use std::sync::LazyLock;
use std::time::Instant;

/// Liveness report.
#[content_model]
pub struct HealthResponse {
    /// Always `up` while the process serves requests
    pub status: String,
    /// Crate version
    pub version: String,
    /// Seconds since the first health probe
    pub uptime: u64,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: START_TIME.elapsed().as_secs(),
    };

    ([(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"), (header::PRAGMA, "no-cache")], Json(body))
}
