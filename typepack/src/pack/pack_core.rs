use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::TypeToken;

// tokens are passed around by value everywhere
static_assertions::assert_impl_all!(TypeToken: Copy, Send, Sync);

/// An immutable, ordered list of type tokens.
///
/// Every operation that changes a type pack returns a new one; the original
/// stays valid and unchanged. Packs of one token don't allocate, and cloning
/// a larger pack only bumps a reference count.
#[derive(Clone, Default)]
pub struct TypePack {
    tokens: Tokens,
}

// `Many` always holds at least two tokens
#[derive(Clone, Default)]
enum Tokens {
    #[default]
    Empty,
    One(TypeToken),
    Many(Rc<[TypeToken]>),
}

impl TypePack {
    pub fn new(tokens: Vec<TypeToken>) -> Self {
        let tokens = match tokens.len() {
            0 => Tokens::Empty,
            1 => Tokens::One(tokens[0]),
            _ => Tokens::Many(tokens.into()),
        };
        Self { tokens }
    }

    /// Construct the empty type pack
    pub fn empty() -> Self {
        Self::default()
    }

    /// The number of tokens in the pack
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Check whether the pack contains no tokens
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[TypeToken] {
        match &self.tokens {
            Tokens::Empty => &[],
            Tokens::One(token) => std::slice::from_ref(token),
            Tokens::Many(tokens) => &tokens[..],
        }
    }

    /// Get the token at the index, if it exists.
    ///
    /// See [`TypePack::at`] for the checked variant.
    pub fn get(&self, index: usize) -> Option<TypeToken> {
        self.as_slice().get(index).copied()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, TypeToken>> {
        self.as_slice().iter().copied()
    }

    pub fn to_vec(&self) -> Vec<TypeToken> {
        self.as_slice().to_vec()
    }
}

impl From<Vec<TypeToken>> for TypePack {
    fn from(tokens: Vec<TypeToken>) -> Self {
        Self::new(tokens)
    }
}

impl From<&[TypeToken]> for TypePack {
    fn from(tokens: &[TypeToken]) -> Self {
        Self::new(tokens.to_vec())
    }
}

impl FromIterator<TypeToken> for TypePack {
    fn from_iter<I: IntoIterator<Item = TypeToken>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TypePack {
    type Item = TypeToken;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, TypeToken>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// equality is element-wise token identity
impl PartialEq for TypePack {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for TypePack {}

impl Hash for TypePack {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl fmt::Debug for TypePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for TypePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", token)?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypePack {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> Vec<TypeToken> {
        vec![
            TypeToken::of::<f32>(),
            TypeToken::of::<i32>(),
            TypeToken::of::<char>(),
        ]
    }

    #[test]
    fn test_empty() {
        let pack = TypePack::empty();
        assert_eq!(pack.len(), 0);
        assert!(pack.is_empty());
        assert_eq!(pack, TypePack::default());
    }

    fn is_normalized(pack: &TypePack) -> bool {
        match &pack.tokens {
            Tokens::Empty => true,
            Tokens::One(_) => true,
            Tokens::Many(tokens) => tokens.len() >= 2,
        }
    }

    #[test]
    fn test_new_normalizes() {
        assert!(matches!(TypePack::new(vec![]).tokens, Tokens::Empty));
        assert!(matches!(
            TypePack::new(vec![TypeToken::of::<i32>()]).tokens,
            Tokens::One(_)
        ));
        assert!(matches!(TypePack::new(tokens()).tokens, Tokens::Many(_)));
    }

    #[test]
    fn test_every_constructor_normalizes() {
        let three = TypePack::new(tokens());
        let built = [
            TypePack::from(&tokens()[..1]),
            TypePack::from(&tokens()[..0]),
            TypePack::from(vec![TypeToken::of::<u8>()]),
            tokens().into_iter().take(1).collect(),
            Vec::<TypeToken>::new().into_iter().collect(),
            three.tail().unwrap().tail().unwrap(),
            three.copy(1, 2).unwrap(),
            three.pop_back().unwrap().pop_back().unwrap(),
            three.remove_all_if(|_: &TypeToken| true),
            three.copy_if(|t: &TypeToken| *t == TypeToken::of::<char>()),
        ];
        for pack in &built {
            assert!(is_normalized(pack), "{:?} is not normalized", pack);
        }
    }

    #[test]
    fn test_len_and_get() {
        let pack = TypePack::new(tokens());
        assert_eq!(pack.len(), 3);
        assert!(!pack.is_empty());
        assert_eq!(pack.get(1), Some(TypeToken::of::<i32>()));
        assert_eq!(pack.get(3), None);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = TypePack::new(tokens());
        let mut reversed = tokens();
        reversed.reverse();
        let b = TypePack::new(reversed);
        assert_ne!(a, b);
        assert_eq!(a, tokens().into_iter().collect::<TypePack>());
    }

    #[test]
    fn test_display() {
        insta::assert_snapshot!(TypePack::new(tokens()), @"[f32, i32, char]");
        insta::assert_snapshot!(TypePack::empty(), @"[]");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", TypePack::new(tokens())), "[f32, i32, char]");
    }
}
