//! `#[derive(RawEvent)]`.
//!
//! Field attributes:
//! - `#[raw_event(code)]` - the field is a code field, looked up by its own name
//! - `#[raw_event(code, rename = "keyCode")]` - looked up by the given name
//! - `#[raw_event(prevent_default)]` - a `bool` set when a pipe suppresses the default

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Fields, Ident, LitStr, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments of one `#[raw_event(...)]` field attribute.
#[derive(Default)]
struct FieldArgs {
    code: bool,
    rename: Option<LitStr>,
    prevent_default: bool,
}

impl Parse for FieldArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = FieldArgs::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            match ident.to_string().as_str() {
                "code" => args.code = true,
                "prevent_default" => args.prevent_default = true,
                "rename" => {
                    input.parse::<Token![=]>()?;
                    args.rename = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown raw_event attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        if args.rename.is_some() && !args.code {
            return Err(input.error("`rename` only applies to `code` fields"));
        }

        Ok(args)
    }
}

/// Implementation of `#[derive(RawEvent)]`.
pub fn derive_raw_event_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &data.fields,
                    "RawEvent can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "RawEvent can only be derived for structs",
            ));
        }
    };

    let mut names: Vec<String> = Vec::new();
    let mut code_arms = Vec::new();
    let mut prevent_field: Option<&Ident> = None;

    for field in fields {
        let Some(ident) = &field.ident else { continue };

        for attr in field.attrs.iter().filter(|a| a.path().is_ident("raw_event")) {
            let args: FieldArgs = attr.parse_args()?;

            if args.code {
                let lookup = args
                    .rename
                    .as_ref()
                    .map(LitStr::value)
                    .unwrap_or_else(|| ident.unraw().to_string());
                if names.contains(&lookup) {
                    return Err(syn::Error::new_spanned(
                        attr,
                        format!("duplicate code field name: {}", lookup),
                    ));
                }
                code_arms.push(quote! {
                    #lookup => ::keytrig::IntoCode::into_code(&self.#ident),
                });
                names.push(lookup);
            }

            if args.prevent_default {
                if prevent_field.is_some() {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "only one field may be marked `prevent_default`",
                    ));
                }
                prevent_field = Some(ident);
            }
        }
    }

    let prevent_impl = prevent_field.map(|ident| {
        quote! {
            fn prevent_default(&mut self) -> bool {
                self.#ident = true;
                true
            }
        }
    });

    Ok(quote! {
        impl #impl_generics ::keytrig::RawEvent for #name #ty_generics #where_clause {
            fn code(&self, field: &str) -> ::core::option::Option<::keytrig::Label> {
                match field {
                    #(#code_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            #prevent_impl
        }
    })
}
