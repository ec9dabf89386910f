use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use folio::kernel::server::SiteStateError;
use std::borrow::Cow;
use tracing::error;

/// Failures that reach a handler boundary. Content problems never do: those fall back.
#[folio_derive::folio_error]
pub enum ServerError {
    #[error("Site state error{}: {source}", format_context(.context))]
    State { source: SiteStateError, context: Option<Cow<'static, str>> },

    #[error("Internal server error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html("<h1>Something went wrong</h1>")).into_response()
    }
}
