//! Derive macros for bytestream.

use proc_macro::TokenStream;
mod codec;

/// Derive `Encode`: write every field in declaration order.
#[proc_macro_derive(Encode, attributes(bytestream))]
pub fn derive_encode(input: TokenStream) -> TokenStream {
    codec::derive_encode(input)
}

/// Derive `Decode`: read every field in declaration order, in place.
#[proc_macro_derive(Decode, attributes(bytestream))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    codec::derive_decode(input)
}
