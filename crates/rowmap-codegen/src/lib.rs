//! Implementation of the `#[derive(Record)]` macro. Kept out of the
//! proc-macro crate so it can be unit tested as ordinary library code.

mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands the derive input into `Record` and `Bind` impls for the
/// annotated struct.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    schema::Record::parse(input).map(|record| expand::record(&record))
}
