use std::borrow::Cow;

/// Why an image reference could not be turned into a URL.
#[folio_derive::folio_error]
pub enum AssetUrlError {
    #[error("Image has no asset{}", format_context(.context))]
    MissingAsset { context: Option<Cow<'static, str>> },

    /// The asset id does not follow `image-<hash>-<w>x<h>-<ext>`.
    #[error("Malformed asset id '{id}'{}", format_context(.context))]
    MalformedId { id: String, context: Option<Cow<'static, str>> },

    #[error("Asset URLs need a project id{}", format_context(.context))]
    MissingProject { context: Option<Cow<'static, str>> },

    #[error("Internal asset URL error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
