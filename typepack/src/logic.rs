/// Something with a boolean value.
///
/// Closures are only called when their value is needed, which makes the
/// short-circuiting of [`conjunction`] and [`disjunction`] observable.
pub trait Condition {
    fn value(&self) -> bool;
}

impl Condition for bool {
    fn value(&self) -> bool {
        *self
    }
}

impl<F> Condition for F
where
    F: Fn() -> bool,
{
    fn value(&self) -> bool {
        self()
    }
}

/// True unless an operand is false; stops at the first false operand.
///
/// With no operands this is true.
pub fn conjunction<I>(operands: I) -> bool
where
    I: IntoIterator,
    I::Item: Condition,
{
    operands.into_iter().all(|operand| operand.value())
}

/// False unless an operand is true; stops at the first true operand.
///
/// With no operands this is false.
pub fn disjunction<I>(operands: I) -> bool
where
    I: IntoIterator,
    I::Item: Condition,
{
    operands.into_iter().any(|operand| operand.value())
}

pub fn negation(operand: impl Condition) -> bool {
    !operand.value()
}
