//! Derive macros for the Statecraft reducer architecture
//!
//! This crate provides procedural macros to reduce boilerplate when declaring
//! action families.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `statecraft_core::action::ActionType`
//!
//! # Example
//!
//! ```ignore
//! use statecraft_core::action::ActionType;
//! use statecraft_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum FilterAction {
//!     ShowAll,
//!     ShowComplete,
//!     #[action(rename = "SHOW_OPEN")]
//!     ShowIncomplete,
//! }
//!
//! assert_eq!(FilterAction::ShowAll.action_type(), "SHOW_ALL");
//! assert_eq!(FilterAction::ShowIncomplete.action_type(), "SHOW_OPEN");
//! assert!(FilterAction::recognizes("SHOW_COMPLETE"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive macro for action enums
///
/// Implements `ActionType` for the enum:
/// - `ACTION_TYPES` - every tag, in declaration order
/// - `action_type()` - the tag of the current variant
///
/// Tags default to the variant name in `SCREAMING_SNAKE_CASE`, the same
/// spelling serde produces for `#[serde(rename_all = "SCREAMING_SNAKE_CASE")]`,
/// so tags and wire names line up.
///
/// # Attributes
///
/// - `#[action(rename = "TAG")]` - Override the tag of a variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant carries a malformed `#[action(...)]` attribute
/// - Two variants end up with the same tag
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut tags: Vec<String> = Vec::with_capacity(data_enum.variants.len());
    let mut arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let tag = match rename_attribute(&variant.attrs) {
            Ok(Some(tag)) => tag,
            Ok(None) => screaming_snake_case(&variant_name.to_string()),
            Err(error) => return error.to_compile_error().into(),
        };

        if tags.contains(&tag) {
            return syn::Error::new_spanned(variant, format!("duplicate action tag `{tag}`"))
                .to_compile_error()
                .into();
        }

        arms.push(match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #tag, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #tag, },
            Fields::Unit => quote! { Self::#variant_name => #tag, },
        });
        tags.push(tag);
    }

    // Empty enums have no values, so the match needs no arms.
    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! { match self { #(#arms)* } }
    };

    let expanded = quote! {
        impl #impl_generics statecraft_core::action::ActionType for #name #ty_generics #where_clause {
            const ACTION_TYPES: &'static [&'static str] = &[#(#tags),*];

            fn action_type(&self) -> &'static str {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(rename = "...")]` from a variant, if present
fn rename_attribute(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut rename = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                rename = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"`"))
            }
        })?;
    }

    Ok(rename)
}

/// `ShowIncomplete` -> `SHOW_INCOMPLETE`
fn screaming_snake_case(ident: &str) -> String {
    let mut tag = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.char_indices() {
        if ch.is_uppercase() && i > 0 {
            tag.push('_');
        }
        tag.push(ch.to_ascii_uppercase());
    }
    tag
}
