use syn::{spanned::Spanned, DeriveInput, Result, Type};

#[derive(Debug)]
pub(crate) struct TokenOptions {
    pub(crate) bases: Vec<Type>,
}

impl TokenOptions {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if !input.generics.params.is_empty() {
            bail_spanned!(
                input.generics.span() => "Token can only be derived for types without generic parameters"
            );
        }
        let mut bases = Vec::new();
        for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("token")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("base") {
                    bases.push(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("Expected `base = Type`"))
                }
            })?;
        }
        Ok(Self { bases })
    }
}
