use crate::compare::{Comparator, IsSame, Predicate};
use crate::TypeToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    First,
    Last,
}

/// A comparator with one operand fixed, usable as a predicate.
#[derive(Debug, Clone, Copy)]
pub struct PartCaller<C> {
    comparator: C,
    fixed: TypeToken,
    position: Position,
}

impl<C: Comparator> Predicate for PartCaller<C> {
    fn test(&self, token: &TypeToken) -> bool {
        match self.position {
            Position::First => self.comparator.less(&self.fixed, token),
            Position::Last => self.comparator.less(token, &self.fixed),
        }
    }
}

/// Bind the first operand of a comparator.
///
/// `partial_apply(SizeOrderLess, i8)` tests whether a token is heavier than
/// `i8`.
pub fn partial_apply<C: Comparator>(comparator: C, fixed: TypeToken) -> PartCaller<C> {
    PartCaller {
        comparator,
        fixed,
        position: Position::First,
    }
}

/// Bind the second operand of a comparator.
///
/// `partial_apply_last(SizeOrderLess, i64)` tests whether a token is lighter
/// than `i64`.
pub fn partial_apply_last<C: Comparator>(comparator: C, fixed: TypeToken) -> PartCaller<C> {
    PartCaller {
        comparator,
        fixed,
        position: Position::Last,
    }
}

/// A predicate matching exactly one token.
pub fn same_as(token: TypeToken) -> PartCaller<IsSame> {
    partial_apply(IsSame, token)
}
