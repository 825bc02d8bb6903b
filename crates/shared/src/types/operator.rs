//! Unary transforms over amounts.

use super::money::Money;
use crate::error::MonetaryResult;

/// A transform from one amount to another, e.g. rounding or conversion.
///
/// Implemented for every `Fn(Money) -> MonetaryResult<Money>`, so closures
/// can be passed to [`Money::with`] directly.
pub trait MonetaryOperator {
    /// Applies the transform.
    fn apply(&self, amount: Money) -> MonetaryResult<Money>;
}

impl<F> MonetaryOperator for F
where
    F: Fn(Money) -> MonetaryResult<Money>,
{
    fn apply(&self, amount: Money) -> MonetaryResult<Money> {
        self(amount)
    }
}
