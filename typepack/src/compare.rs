//! Comparators, predicates and mappers over type tokens.
//!
//! Any closure of the right shape can be used, but the named comparators
//! here cover the relations a token knows about by itself: its weight, its
//! name and its declared inheritance.

use crate::TypeToken;

/// A binary relation over tokens, used as "less than".
///
/// Sorting and the other ordering algorithms expect a strict weak ordering.
/// This is not checked; a relation that isn't one gives unspecified (but
/// memory safe) results.
pub trait Comparator {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool;
}

impl<F> Comparator for F
where
    F: Fn(&TypeToken, &TypeToken) -> bool,
{
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        self(a, b)
    }
}

/// A unary condition over tokens.
pub trait Predicate {
    fn test(&self, token: &TypeToken) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&TypeToken) -> bool,
{
    fn test(&self, token: &TypeToken) -> bool {
        self(token)
    }
}

/// A token to token mapping, used by transform.
pub trait Mapper {
    fn map(&self, token: &TypeToken) -> TypeToken;
}

impl<F> Mapper for F
where
    F: Fn(&TypeToken) -> TypeToken,
{
    fn map(&self, token: &TypeToken) -> TypeToken {
        self(token)
    }
}

/// Orders tokens by ascending weight.
#[derive(Debug, Default, Clone, Copy)]
pub struct SizeOrderLess;

impl Comparator for SizeOrderLess {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        a.weight() < b.weight()
    }
}

/// Orders tokens by descending weight.
#[derive(Debug, Default, Clone, Copy)]
pub struct SizeOrderMore;

impl Comparator for SizeOrderMore {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        a.weight() > b.weight()
    }
}

/// Orders tokens alphabetically by their full type name.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameOrderLess;

impl Comparator for NameOrderLess {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        a.name() < b.name()
    }
}

/// Token identity as a relation.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsSame;

impl Comparator for IsSame {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        a == b
    }
}

/// `a` is a base of `b`, or the same type.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsBaseOf;

impl Comparator for IsBaseOf {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        a.is_base_of(*b)
    }
}

/// Both operands hold.
#[derive(Debug, Default, Clone, Copy)]
pub struct And<A, B>(pub A, pub B);

/// Either operand holds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Or<A, B>(pub A, pub B);

/// The operand does not hold.
#[derive(Debug, Default, Clone, Copy)]
pub struct Not<A>(pub A);

impl<A: Comparator, B: Comparator> Comparator for And<A, B> {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        self.0.less(a, b) && self.1.less(a, b)
    }
}

impl<A: Comparator, B: Comparator> Comparator for Or<A, B> {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        self.0.less(a, b) || self.1.less(a, b)
    }
}

impl<A: Comparator> Comparator for Not<A> {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        !self.0.less(a, b)
    }
}

impl<A: Predicate, B: Predicate> Predicate for And<A, B> {
    fn test(&self, token: &TypeToken) -> bool {
        self.0.test(token) && self.1.test(token)
    }
}

impl<A: Predicate, B: Predicate> Predicate for Or<A, B> {
    fn test(&self, token: &TypeToken) -> bool {
        self.0.test(token) || self.1.test(token)
    }
}

impl<A: Predicate> Predicate for Not<A> {
    fn test(&self, token: &TypeToken) -> bool {
        !self.0.test(token)
    }
}

/// `a` is a strict base of `b`.
///
/// Unrelated tokens compare false in both directions, so this is only a
/// partial order; expect many ties when sorting with it.
pub type BaseIsLess = And<IsBaseOf, Not<IsSame>>;

/// `a` strictly derives from `b`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DerivedIsLess;

impl Comparator for DerivedIsLess {
    fn less(&self, a: &TypeToken, b: &TypeToken) -> bool {
        BaseIsLess::default().less(b, a)
    }
}
