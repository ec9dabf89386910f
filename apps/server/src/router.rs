use crate::api::{self, CONTACT_TAG, CONTENT_TAG};
use crate::pages;
use axum::Router;
use folio::kernel::server::SiteState;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "Folio", description = "Resolved portfolio content and the contact form"),
    tags(
        (name = CONTENT_TAG, description = "Page content, from the store or the bundled copy"),
        (name = CONTACT_TAG, description = "Contact form delivery"),
    )
)]
struct ApiDoc;

/// Builds the whole application: JSON API (docs at `/api`), pages, then static files.
pub fn init(state: SiteState) -> Router {
    let static_dir = state.config.storage.static_dir.clone();

    // Separate the OpenAPI routes and the API documentation object
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(folio::server::router::system_router())
        .merge(api::router())
        .with_state(state.clone())
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new()
        .merge(api_routes)
        .merge(scalar_routes)
        .merge(pages::router().with_state(state))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
