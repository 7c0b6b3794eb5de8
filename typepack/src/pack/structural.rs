use ahash::{HashSet, HashSetExt};

use crate::compare::{Mapper, Predicate};
use crate::error::{Error, Result};
use crate::partial::same_as;
use crate::TypeToken;

use super::pack_core::TypePack;

/// The largest type pack `generate` is willing to build.
pub const MAXIMUM_GENERATE_SIZE: usize = 2_usize.pow(20);

impl TypePack {
    pub fn push_front(&self, token: TypeToken) -> TypePack {
        let mut tokens = Vec::with_capacity(self.len() + 1);
        tokens.push(token);
        tokens.extend(self.iter());
        TypePack::new(tokens)
    }

    pub fn push_back(&self, token: TypeToken) -> TypePack {
        let mut tokens = Vec::with_capacity(self.len() + 1);
        tokens.extend(self.iter());
        tokens.push(token);
        TypePack::new(tokens)
    }

    /// Drop the first token. Unlike [`TypePack::tail`], popping the empty
    /// pack gives the empty pack.
    pub fn pop_front(&self) -> TypePack {
        self.tail().unwrap_or_default()
    }

    /// Drop the last token.
    pub fn pop_back(&self) -> Result<TypePack> {
        match self.as_slice() {
            [] => {
                tracing::debug!("pop_back of an empty type pack");
                Err(Error::EmptyPack {
                    operation: "pop_back",
                })
            }
            [init @ .., _] => Ok(init.into()),
        }
    }

    /// A pack of `n` copies of `token`.
    pub fn generate(n: usize, token: TypeToken) -> Result<TypePack> {
        if n > MAXIMUM_GENERATE_SIZE {
            tracing::debug!(n, "generate request over the limit");
            return Err(Error::GenerateLimit {
                requested: n,
                limit: MAXIMUM_GENERATE_SIZE,
            });
        }
        tracing::trace!(n, %token, "generate");
        Ok(TypePack::new(vec![token; n]))
    }

    /// Apply a mapper to every token, keeping order and length.
    pub fn transform(&self, mapper: impl Mapper) -> TypePack {
        self.iter().map(|token| mapper.map(&token)).collect()
    }

    /// Replace every occurrence of `old` by `new`.
    pub fn replace(&self, old: TypeToken, new: TypeToken) -> TypePack {
        self.transform(|token: &TypeToken| if *token == old { new } else { *token })
    }

    /// Remove the first occurrence of `token`, if any.
    pub fn remove(&self, token: TypeToken) -> TypePack {
        self.remove_if(same_as(token))
    }

    /// Remove the first token satisfying the predicate, if any.
    pub fn remove_if(&self, predicate: impl Predicate) -> TypePack {
        let index = self.find_if(predicate);
        if index == self.len() {
            return self.clone();
        }
        let tokens = self.as_slice();
        let mut result = Vec::with_capacity(tokens.len() - 1);
        result.extend_from_slice(&tokens[..index]);
        result.extend_from_slice(&tokens[index + 1..]);
        TypePack::new(result)
    }

    /// Remove every occurrence of `token`.
    pub fn remove_all(&self, token: TypeToken) -> TypePack {
        self.remove_all_if(same_as(token))
    }

    pub fn remove_all_if(&self, predicate: impl Predicate) -> TypePack {
        let tokens: Vec<_> = self.iter().filter(|token| !predicate.test(token)).collect();
        if tokens.len() == self.len() {
            return self.clone();
        }
        TypePack::new(tokens)
    }

    /// Keep only the first occurrence of every token.
    ///
    /// Later duplicates are dropped wherever they are, not only when they are
    /// adjacent.
    pub fn unique(&self) -> TypePack {
        let mut seen = HashSet::with_capacity(self.len());
        let tokens: Vec<_> = self.iter().filter(|token| seen.insert(*token)).collect();
        if tokens.len() == self.len() {
            return self.clone();
        }
        TypePack::new(tokens)
    }
}
