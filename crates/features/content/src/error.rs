use std::borrow::Cow;

/// Why a content query produced no usable answer.
///
/// Pages never show these; the loader logs them and substitutes bundled content.
#[folio_derive::folio_error]
pub enum ContentError {
    /// The request never completed (DNS, connect, TLS, timeout).
    #[error("Content store transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The store answered with a non-success status.
    #[error("Content store answered {status}{}: {body}", format_context(.context))]
    Status { status: u16, body: String, context: Option<Cow<'static, str>> },

    /// The body was not the JSON we expected.
    #[error("Content decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid content store endpoint{}: {source}", format_context(.context))]
    Endpoint { source: url::ParseError, context: Option<Cow<'static, str>> },

    /// The store is switched off in configuration.
    #[error("Content store unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal content error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
