#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Folio workspace:
//!
//! * [`macro@main`] boots the tuned Tokio runtime from `folio-runtime`.
//! * [`macro@content_model`] stamps serde/OpenAPI policy onto content documents and DTOs.
//! * [`macro@api_handler`] attaches `utoipa` path metadata to Axum handlers.
//! * [`macro@folio_error`] turns an enum into a context-aware `thiserror` error.
//!
//! The examples below are `ignore`d because they need the consuming crates in scope.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime.
///
/// Transforms an `async fn main` returning a `Result` into a plain `fn main` that
/// builds a runtime from a [`folio_runtime::RuntimeConfig`] preset and blocks on the body.
///
/// # Arguments
///
/// * `server` - Multi-threaded preset for the site server.
/// * `compact` - Fewer workers and smaller stacks (tools, tests, small hosts).
/// * `default` - Worker threads auto-detected from available parallelism.
/// * `with = path::to::hook` - Optional `fn(RuntimeConfig) -> Result<RuntimeConfig>` applied
///   to the preset before the runtime is built (e.g. overrides read from the config file).
///
/// # Examples
///
/// ```rust,ignore
/// fn tune(preset: folio_runtime::RuntimeConfig) -> anyhow::Result<folio_runtime::RuntimeConfig> {
///     Ok(preset.with_worker_threads(2))
/// }
///
/// #[folio_runtime::main(server, with = tune)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for content documents and API payloads.
///
/// * **Derives**: adds `Debug`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: adds `utoipa::ToSchema` when the consuming crate's `server` feature is on.
/// * **Serde policy**: `rename_all = "camelCase"` unless overridden. Unknown fields are
///   tolerated by default because the content store decorates documents with system
///   fields (`_type`, `_rev`, ...); pass `deny_unknown_fields = true` for strict DTOs.
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::content_model;
///
/// #[content_model]
/// pub struct Interest {
///     pub name: String,
///     pub icon: String,
/// }
///
/// #[content_model(deny_unknown_fields = true)]
/// pub struct ContactRequest {
///     pub email: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn content_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_content_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts standard `utoipa::path` arguments (`get`, `post`, `path = "..."`,
/// `responses(...)`, `tag = "..."`) and only emits them when the `server` feature of the
/// consuming crate is enabled.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)), tag = "system")]
/// pub async fn health_handler() -> Json<HealthResponse> { todo!() }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for crate error enums.
///
/// # Features
///
/// * Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * Generates a companion `<Name>Ext` trait adding `.context(...)` to `Result<T, Name>` and
///   to `Result<T, Source>` for every variant with a source field.
/// * Implements `From<Source>` for those variants so `?` works on upstream errors.
/// * Implements `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * Emits a private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Applied to an enum with named-field variants only.
/// 2. A `context` field, when present, is `Option<Cow<'static, str>>`.
/// 3. A variant with a `source` field (or `#[source]`/`#[from]`) must also carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[folio_derive::folio_error]
/// pub enum ContentError {
///     #[error("Transport error{}: {source}", format_context(.context))]
///     Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal content error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// async fn about(client: &reqwest::Client) -> Result<String, ContentError> {
///     let body = client.get("...").send().await.context("Querying about document")?;
///     body.text().await.context("Reading about document")
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
