use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Error, Expr, ItemFn, Meta, ReturnType, Token, Type};

/// Expands `#[folio_runtime::main]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.ident,
            "#[folio_runtime::main] can only be used on async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "#[folio_runtime::main] requires a Result return type",
        )
        .to_compile_error();
    }

    let MainArgs { preset, with } = match MainArgs::parse(args) {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let configure = with.map(|hook| quote! { let config = #hook(config)?; });

    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #preset;
            #configure
            let rt = ::folio_runtime::build_runtime_with_config(&config)?;
            rt.block_on(async #block)
        }
    }
}

struct MainArgs {
    preset: TokenStream,
    with: Option<syn::Path>,
}

impl MainArgs {
    /// Accepts `[preset][, with = path::to::hook]`.
    fn parse(args: TokenStream) -> Result<Self, TokenStream> {
        let parser = Punctuated::<Meta, Token![,]>::parse_terminated;
        let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

        let mut preset = None;
        let mut with = None;
        for meta in metas {
            match meta {
                Meta::Path(path) if preset.is_none() => preset = Some(preset_call(&path)?),
                Meta::NameValue(pair) if pair.path.is_ident("with") && with.is_none() => {
                    let Expr::Path(hook) = pair.value else {
                        return Err(Error::new_spanned(pair.value, "`with` expects a function path")
                            .to_compile_error());
                    };
                    with = Some(hook.path);
                }
                other => {
                    return Err(Error::new_spanned(
                        other,
                        "Expected an optional preset followed by an optional `with = hook`",
                    )
                    .to_compile_error());
                }
            }
        }

        Ok(Self {
            preset: preset.unwrap_or_else(|| quote! { ::folio_runtime::RuntimeConfig::default() }),
            with,
        })
    }
}

fn preset_call(path: &syn::Path) -> Result<TokenStream, TokenStream> {
    let Some(ident) = path.get_ident() else {
        return Err(Error::new_spanned(path, "Runtime preset must be a bare identifier").to_compile_error());
    };
    match ident.to_string().as_str() {
        "server" => Ok(quote! { ::folio_runtime::RuntimeConfig::server() }),
        "compact" => Ok(quote! { ::folio_runtime::RuntimeConfig::compact() }),
        "default" => Ok(quote! { ::folio_runtime::RuntimeConfig::default() }),
        _ => Err(Error::new_spanned(ident, "Unknown runtime preset. Use: server, compact, or default")
            .to_compile_error()),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
