use crate::compare::Predicate;
use crate::error::{Error, Result};
use crate::TypeToken;

use super::pack_core::TypePack;

impl TypePack {
    /// The index of the first occurrence of `token`, or `len()` if absent.
    pub fn find(&self, token: TypeToken) -> usize {
        self.position(0, |t| *t == token)
    }

    /// Like [`TypePack::find`], but starts looking at index `from`.
    ///
    /// `from` may be equal to the length, in which case the result is the
    /// length.
    pub fn find_from(&self, token: TypeToken, from: usize) -> Result<usize> {
        self.check_from(from)?;
        Ok(self.position(from, |t| *t == token))
    }

    /// The index of the first token satisfying the predicate, or `len()`.
    pub fn find_if(&self, predicate: impl Predicate) -> usize {
        self.position(0, |t| predicate.test(t))
    }

    pub fn find_if_from(&self, predicate: impl Predicate, from: usize) -> Result<usize> {
        self.check_from(from)?;
        Ok(self.position(from, |t| predicate.test(t)))
    }

    pub fn contains(&self, token: TypeToken) -> bool {
        self.find(token) != self.len()
    }

    /// How many times `token` occurs.
    pub fn count(&self, token: TypeToken) -> usize {
        self.iter().filter(|t| *t == token).count()
    }

    pub fn count_if(&self, predicate: impl Predicate) -> usize {
        self.iter().filter(|t| predicate.test(t)).count()
    }

    /// True if every token satisfies the predicate; true when empty.
    pub fn all_of(&self, predicate: impl Predicate) -> bool {
        self.iter().all(|t| predicate.test(&t))
    }

    /// True if some token satisfies the predicate; false when empty.
    pub fn any_of(&self, predicate: impl Predicate) -> bool {
        self.iter().any(|t| predicate.test(&t))
    }

    /// True if no token satisfies the predicate; true when empty.
    pub fn none_of(&self, predicate: impl Predicate) -> bool {
        !self.any_of(predicate)
    }

    fn position(&self, from: usize, matches: impl Fn(&TypeToken) -> bool) -> usize {
        self.as_slice()[from..]
            .iter()
            .position(matches)
            .map_or(self.len(), |i| i + from)
    }

    fn check_from(&self, from: usize) -> Result<()> {
        let size = self.len();
        if from > size {
            tracing::debug!(from, size, "search start beyond type pack end");
            return Err(Error::InvalidSlice {
                begin: from,
                end: size,
                size,
            });
        }
        Ok(())
    }
}
