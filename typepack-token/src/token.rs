use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::size_of;

use ahash::{HashSet, HashSetExt};

/// A type that can be named in a type pack.
///
/// The only thing a type has to say about itself is which types it derives
/// from. Rust has no inheritance, so this relation is declared: either by
/// implementing this trait by hand or with `#[derive(Token)]` and
/// `#[token(base = ...)]`.
pub trait Token: 'static {
    /// The direct bases of this type.
    fn bases() -> Vec<TypeToken> {
        Vec::new()
    }
}

/// An opaque identifier for a single type.
///
/// Two tokens are equal if and only if they denote the identical type. A
/// token also carries the weight of the type (its storage size) and the
/// types it is declared to derive from.
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
    weight: usize,
    bases: fn() -> Vec<TypeToken>,
}

impl TypeToken {
    /// The token for `T`, including its declared bases.
    pub fn of<T: Token>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            weight: size_of::<T>(),
            bases: T::bases,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The full path of the type as reported by the compiler.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The storage size of the type in bytes.
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// The direct bases of this type.
    pub fn bases(&self) -> Vec<TypeToken> {
        (self.bases)()
    }

    /// Check whether this type derives from `other`.
    ///
    /// This is reflexive: every type derives from itself. Bases are followed
    /// transitively; a declaration graph with diamonds or cycles terminates.
    pub fn derives_from(&self, other: TypeToken) -> bool {
        if *self == other {
            return true;
        }
        let mut seen = HashSet::new();
        let mut pending = self.bases();
        while let Some(base) = pending.pop() {
            if base == other {
                return true;
            }
            if seen.insert(base.id) {
                pending.extend(base.bases());
            }
        }
        false
    }

    /// Check whether `other` derives from this type.
    pub fn is_base_of(&self, other: TypeToken) -> bool {
        other.derives_from(*self)
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

macro_rules! impl_token {
    ($($t:ty),* $(,)?) => {
        $(impl Token for $t {})*
    };
}

impl_token!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String, &'static str,
);

impl<T: 'static> Token for Vec<T> {}
impl<T: 'static> Token for Option<T> {}
impl<T: 'static> Token for Box<T> {}
