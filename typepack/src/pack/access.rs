use crate::compare::Predicate;
use crate::error::{Error, Result};
use crate::TypeToken;

use super::pack_core::TypePack;

impl TypePack {
    /// The first token.
    pub fn head(&self) -> Result<TypeToken> {
        self.as_slice().first().copied().ok_or_else(|| {
            tracing::debug!("head of an empty type pack");
            Error::EmptyPack { operation: "head" }
        })
    }

    /// Everything but the first token.
    pub fn tail(&self) -> Result<TypePack> {
        match self.as_slice() {
            [] => {
                tracing::debug!("tail of an empty type pack");
                Err(Error::EmptyPack { operation: "tail" })
            }
            [_, rest @ ..] => Ok(rest.into()),
        }
    }

    /// The token at a zero-based index.
    pub fn at(&self, index: usize) -> Result<TypeToken> {
        self.get(index).ok_or_else(|| {
            tracing::debug!(index, size = self.len(), "type pack index out of range");
            Error::OutOfRange {
                index,
                size: self.len(),
            }
        })
    }

    /// The half-open slice `[begin, end)`.
    pub fn copy(&self, begin: usize, end: usize) -> Result<TypePack> {
        let size = self.len();
        if begin > end || end > size {
            tracing::debug!(begin, end, size, "invalid type pack slice");
            return Err(Error::InvalidSlice { begin, end, size });
        }
        if begin == 0 && end == size {
            return Ok(self.clone());
        }
        Ok(self.as_slice()[begin..end].into())
    }

    /// The tokens satisfying a predicate, in order.
    pub fn copy_if(&self, predicate: impl Predicate) -> TypePack {
        self.iter().filter(|token| predicate.test(token)).collect()
    }
}
