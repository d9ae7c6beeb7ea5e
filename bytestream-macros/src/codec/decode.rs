//! Decode derive macro implementation.

use super::{field_accessors, struct_fields, with_bound};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input, parse_quote};

/// Derive the `Decode` trait for a struct.
///
/// Skipped fields keep whatever value `out` already held.
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = with_bound(&input.generics, parse_quote!(bytestream::Decode));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = struct_fields(input, "Decode")?;
    let reads: Vec<_> = field_accessors(fields)
        .into_iter()
        .map(|field| {
            quote! {
                bytestream::Decode::decode(stream, &mut out.#field);
            }
        })
        .collect();

    Ok(quote! {
        impl #impl_generics bytestream::Decode for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn decode(stream: &mut bytestream::ByteStream, out: &mut Self) {
                #(#reads)*
            }
        }
    })
}
