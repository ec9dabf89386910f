use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Not found{}: {slug}", format_context(.context))]
    NotFound { slug: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, DemoError> {
    std::fs::read_to_string("/definitely/missing").context("Reading fixture")
}

fn lookup(slug: &str) -> Result<(), DemoError> {
    Err(DemoError::NotFound { slug: slug.to_owned(), context: None }).context("Looking up project")
}

fn main() {
    let err = read().unwrap_err();
    assert!(err.to_string().starts_with("IO error (Reading fixture)"));

    let err = lookup("ghost").unwrap_err();
    assert_eq!(err.to_string(), "Not found (Looking up project): ghost");

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");
}
