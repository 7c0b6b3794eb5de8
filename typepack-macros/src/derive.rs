use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::parse::TokenOptions;

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let options = TokenOptions::from_input(input)?;
    let name = &input.ident;
    let bases = &options.bases;
    if bases.is_empty() {
        return Ok(quote! {
            impl ::typepack::Token for #name {}
        });
    }
    Ok(quote! {
        impl ::typepack::Token for #name {
            fn bases() -> ::std::vec::Vec<::typepack::TypeToken> {
                ::std::vec![#(::typepack::TypeToken::of::<#bases>()),*]
            }
        }
    })
}
