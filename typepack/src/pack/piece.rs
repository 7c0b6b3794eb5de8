use std::ops::Add;

use crate::error;

use super::{just::Just, pack_core::TypePack};

/// An operand of concatenation or equality: a type pack or a singleton.
///
/// There is intentionally no conversion from a bare [`crate::TypeToken`],
/// and no `==`: use [`is_equal`], which compares a singleton with a pack.
#[derive(Debug, Clone)]
pub enum Piece {
    Pack(TypePack),
    Just(Just),
}

impl Piece {
    fn into_tokens(self, tokens: &mut Vec<crate::TypeToken>) {
        match self {
            Piece::Pack(pack) => tokens.extend(pack.iter()),
            Piece::Just(just) => tokens.push(just.token()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Piece::Pack(pack) => pack.len(),
            Piece::Just(_) => 1,
        }
    }
}

impl From<TypePack> for Piece {
    fn from(pack: TypePack) -> Self {
        Piece::Pack(pack)
    }
}

impl From<&TypePack> for Piece {
    fn from(pack: &TypePack) -> Self {
        Piece::Pack(pack.clone())
    }
}

impl From<Just> for Piece {
    fn from(just: Just) -> Self {
        Piece::Just(just)
    }
}

/// Concatenate two operands into a new type pack.
pub fn concat(left: impl Into<Piece>, right: impl Into<Piece>) -> TypePack {
    let (left, right) = (left.into(), right.into());
    // reuse the existing allocation when one side is empty
    match (left, right) {
        (Piece::Pack(empty), Piece::Pack(pack)) | (Piece::Pack(pack), Piece::Pack(empty))
            if empty.is_empty() =>
        {
            pack
        }
        (left, right) => {
            let mut tokens = Vec::with_capacity(left.len() + right.len());
            left.into_tokens(&mut tokens);
            right.into_tokens(&mut tokens);
            TypePack::new(tokens)
        }
    }
}

/// Concatenate any number of operands, associating to the right.
///
/// No operands gives the empty type pack.
pub fn concatenate<I>(pieces: I) -> TypePack
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    I::Item: Into<Piece>,
{
    pieces
        .into_iter()
        .rev()
        .fold(TypePack::empty(), |acc, piece| concat(piece, acc))
}

/// Compare two operands for token-wise identity.
///
/// A singleton is only comparable with a singleton or a pack of at most one
/// token; comparing it with a longer pack is an error rather than `false`.
pub fn is_equal(left: impl Into<Piece>, right: impl Into<Piece>) -> error::Result<bool> {
    match (left.into(), right.into()) {
        (Piece::Pack(a), Piece::Pack(b)) => Ok(a == b),
        (Piece::Just(a), Piece::Just(b)) => Ok(a == b),
        (Piece::Just(just), Piece::Pack(pack)) | (Piece::Pack(pack), Piece::Just(just)) => {
            match pack.len() {
                0 => Ok(false),
                1 => Ok(pack.get(0) == Some(just.token())),
                size => {
                    tracing::debug!(size, "singleton compared with a longer type pack");
                    Err(error::Error::SingletonMismatch { size })
                }
            }
        }
    }
}

pub fn is_not_equal(left: impl Into<Piece>, right: impl Into<Piece>) -> error::Result<bool> {
    Ok(!is_equal(left, right)?)
}

impl<R: Into<Piece>> Add<R> for TypePack {
    type Output = TypePack;

    fn add(self, rhs: R) -> TypePack {
        concat(self, rhs)
    }
}

impl<R: Into<Piece>> Add<R> for Just {
    type Output = TypePack;

    fn add(self, rhs: R) -> TypePack {
        concat(self, rhs)
    }
}
