use std::fmt;

use crate::{Token, TypeToken};

/// A single token wrapped so it can take part in concatenation.
///
/// A bare [`TypeToken`] is not a concatenation operand; wrap it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Just(TypeToken);

impl Just {
    pub fn new(token: TypeToken) -> Self {
        Self(token)
    }

    pub fn of<T: Token>() -> Self {
        Self(TypeToken::of::<T>())
    }

    pub fn token(&self) -> TypeToken {
        self.0
    }
}

impl fmt::Display for Just {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "just<{}>", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Just {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just() {
        let just = Just::of::<u8>();
        assert_eq!(just.token(), TypeToken::of::<u8>());
        assert_eq!(just, Just::new(TypeToken::of::<u8>()));
        assert_ne!(just, Just::of::<i8>());
        insta::assert_snapshot!(just, @"just<u8>");
    }
}
