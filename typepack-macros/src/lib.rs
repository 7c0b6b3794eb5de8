extern crate proc_macro;

#[macro_use]
mod error;
mod derive;
mod parse;

use syn::parse_macro_input;

/// Derive `typepack::Token` for a type.
///
/// Bases are declared with one or more `#[token(base = Path)]` attributes:
///
/// ```ignore
/// #[derive(Token)]
/// #[token(base = Animal)]
/// struct Dog;
/// ```
#[proc_macro_derive(Token, attributes(token))]
pub fn derive_token(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = parse_macro_input!(input as syn::DeriveInput);
    derive::expand(&ast)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
