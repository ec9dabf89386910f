use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum ContactError {
    #[error("Form endpoint unreachable{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The endpoint answered with a non-success status.
    #[error("Form endpoint rejected the submission ({status}){}: {message}", format_context(.context))]
    Rejected { status: u16, message: String, context: Option<Cow<'static, str>> },

    #[error("Invalid form endpoint{}: {source}", format_context(.context))]
    Endpoint { source: url::ParseError, context: Option<Cow<'static, str>> },

    /// Neither configuration nor content names a form endpoint.
    #[error("Contact form is not configured{}", format_context(.context))]
    NotConfigured { context: Option<Cow<'static, str>> },

    #[error("Internal contact error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
