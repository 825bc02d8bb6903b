//! Operator composition and sample operators.

use rust_decimal::Decimal;

use coinage_shared::{MonetaryError, MonetaryResult};
use coinage_shared::types::{MonetaryAmount, MonetaryOperator, Money};

/// Two operators applied one after the other.
#[derive(Debug, Clone, Copy)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: MonetaryOperator, B: MonetaryOperator> MonetaryOperator for Chain<A, B> {
    fn apply(&self, amount: Money) -> MonetaryResult<Money> {
        self.second.apply(self.first.apply(amount)?)
    }
}

/// Composition helpers for every [`MonetaryOperator`].
pub trait MonetaryOperatorExt: MonetaryOperator + Sized {
    /// Applies `self`, then `next`.
    fn and_then<B: MonetaryOperator>(self, next: B) -> Chain<Self, B> {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<T: MonetaryOperator> MonetaryOperatorExt for T {}

/// Multiplies by an exact percentage, keeping the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percent(Decimal);

impl Percent {
    /// `percent` of the amount, e.g. `Percent::of(Decimal::TEN)` for ten percent.
    #[must_use]
    pub const fn of(percent: Decimal) -> Self {
        Self(percent)
    }
}

impl MonetaryOperator for Percent {
    fn apply(&self, amount: Money) -> MonetaryResult<Money> {
        amount.multiply(self.0)?.divide(Decimal::ONE_HUNDRED)
    }
}

/// Ten percent of an amount: its exact number times `0.1`.
pub fn ten_percent(amount: Money) -> MonetaryResult<Money> {
    let base = amount.number_value();
    let tenth = base
        .checked_mul(Decimal::new(1, 1))
        .ok_or_else(|| MonetaryError::Arithmetic(format!("10% of {amount} overflows")))?;
    Money::of(tenth, amount.currency())
}
