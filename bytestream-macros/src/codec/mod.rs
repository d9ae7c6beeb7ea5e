//! Derive macros for bytestream.

mod decode;
mod encode;

pub use decode::derive_decode;
pub use encode::derive_encode;

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

/// Check if a field has `#[bytestream(skip)]`.
pub fn has_skip_attr(field: &syn::Field) -> bool {
    field.attrs.iter().any(|attr| {
        if !attr.path().is_ident("bytestream") {
            return false;
        }
        let mut found = false;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                found = true;
            }
            Ok(())
        });
        found
    })
}

/// Fields of a struct, or an error for enums and unions.
///
/// Enums are refused because an in-place decode cannot switch variants
/// without constructing the new variant's fields from nothing.
pub fn struct_fields<'a>(input: &'a DeriveInput, derive: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data) => Ok(&data.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            input,
            format!("{derive} derive is not supported for enums."),
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            format!("{derive} derive is not supported for unions."),
        )),
    }
}

/// Require `bound` on every type parameter.
pub fn with_bound(generics: &syn::Generics, bound: syn::Path) -> syn::Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::TypeParamBound::Trait(syn::TraitBound {
            paren_token: None,
            modifier: syn::TraitBoundModifier::None,
            lifetimes: None,
            path: bound.clone(),
        }));
    }
    generics
}

/// `self.name` / `self.0` accessors for every field not marked skip.
pub fn field_accessors(fields: &Fields) -> Vec<TokenStream2> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter(|f| !has_skip_attr(f))
            .map(|f| {
                let name = &f.ident;
                quote! { #name }
            })
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .filter(|(_, f)| !has_skip_attr(f))
            .map(|(i, _)| {
                let index = syn::Index::from(i);
                quote! { #index }
            })
            .collect(),
        Fields::Unit => Vec::new(),
    }
}
