use fxhash::FxHashSet;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::{Attribute, Expr, ItemFn, ItemStruct, Lit, LitStr, Meta, MetaNameValue};

use super::error::derived_names;

/// Expands `#[content_model]`.
///
/// Unknown fields are tolerated unless `deny_unknown_fields = true` is passed, since
/// documents coming out of the content store carry system fields we never model.
pub fn expand_content_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match content_model_tokens(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn content_model_tokens(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let ModelArgs { rename_all, deny_unknown_fields } = ModelArgs::parse(args)?;
    let derives = derived_names(&input.attrs);
    let serde = SerdeAttrs::collect(&input.attrs)?;

    let derive_attr = derive_attr(&derives);
    let schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let rename = rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename_attr = match &serde.rename_all {
        Some(existing) if existing.value() != rename.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "Conflicting serde rename_all; remove it or pass content_model(rename_all = \"...\")",
            ));
        }
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #rename)] },
    };

    let deny_attr = match (deny_unknown_fields.unwrap_or(false), serde.deny_unknown_fields) {
        (true, false) => quote! { #[serde(deny_unknown_fields)] },
        (false, true) if deny_unknown_fields.is_some() => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        }
        _ => quote! {},
    };

    Ok(quote! {
        #derive_attr
        #schema_attr
        #rename_attr
        #deny_attr
        #input
    })
}

/// Expands `#[api_handler]`: forwards the arguments to `utoipa::path` on server builds.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

impl ModelArgs {
    fn parse(args: TokenStream) -> syn::Result<Self> {
        let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
        let mut parsed = Self::default();

        for meta in parser.parse2(args)? {
            let Meta::NameValue(pair) = meta else {
                return Err(syn::Error::new_spanned(
                    meta,
                    "Expected name-value arguments like `rename_all = \"...\"`",
                ));
            };

            if pair.path.is_ident("rename_all") {
                let Lit::Str(value) = literal(&pair, "rename_all must be a string literal")? else {
                    return Err(syn::Error::new_spanned(&pair.value, "rename_all must be a string literal"));
                };
                set_once(&mut parsed.rename_all, &pair, value)?;
            } else if pair.path.is_ident("deny_unknown_fields") {
                let Lit::Bool(value) = literal(&pair, "deny_unknown_fields must be a boolean literal")? else {
                    return Err(syn::Error::new_spanned(
                        &pair.value,
                        "deny_unknown_fields must be a boolean literal",
                    ));
                };
                set_once(&mut parsed.deny_unknown_fields, &pair, value.value)?;
            } else {
                return Err(syn::Error::new_spanned(
                    pair.path,
                    "Unsupported argument; expected rename_all or deny_unknown_fields",
                ));
            }
        }

        Ok(parsed)
    }
}

fn literal(pair: &MetaNameValue, message: &str) -> syn::Result<Lit> {
    match &pair.value {
        Expr::Lit(expr) => Ok(expr.lit.clone()),
        other => Err(syn::Error::new_spanned(other, message)),
    }
}

fn set_once<T>(slot: &mut Option<T>, pair: &MetaNameValue, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(pair, "Duplicate argument"));
    }
    *slot = Some(value);
    Ok(())
}

struct SerdeAttrs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

impl SerdeAttrs {
    fn collect(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut found = Self { rename_all: None, deny_unknown_fields: false };

        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    found.rename_all = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("deny_unknown_fields") {
                    found.deny_unknown_fields = true;
                } else if meta.input.peek(syn::Token![=]) {
                    // skip the value of attributes we don't care about (e.g. `default = "..."`)
                    let _: Expr = meta.value()?.parse()?;
                }
                Ok(())
            })?;
        }

        Ok(found)
    }
}

fn derive_attr(derives: &FxHashSet<String>) -> TokenStream {
    let mut tokens = Vec::new();
    if !derives.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !derives.contains("Serialize") {
        tokens.push(quote! { ::serde::Serialize });
    }
    if !derives.contains("Deserialize") {
        tokens.push(quote! { ::serde::Deserialize });
    }

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}
