//! Encode derive macro implementation.

use super::{field_accessors, struct_fields, with_bound};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input, parse_quote};

/// Derive the `Encode` trait for a struct.
pub fn derive_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = with_bound(&input.generics, parse_quote!(bytestream::Encode));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = struct_fields(input, "Encode")?;
    let writes: Vec<_> = field_accessors(fields)
        .into_iter()
        .map(|field| {
            quote! {
                bytestream::Encode::encode(&self.#field, stream);
            }
        })
        .collect();

    Ok(quote! {
        impl #impl_generics bytestream::Encode for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn encode(&self, stream: &mut bytestream::ByteStream) {
                #(#writes)*
            }
        }
    })
}
