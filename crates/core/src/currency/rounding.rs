//! Currency roundings.
//!
//! Default strategy is banker's rounding (round half to even), which keeps
//! cumulative rounding error unbiased across many amounts.

use rust_decimal::RoundingStrategy;

use coinage_shared::MonetaryResult;
use coinage_shared::types::{CurrencyUnit, MonetaryAmount, MonetaryOperator, Money};

/// Rounds amounts to a number of fraction digits.
///
/// The scale is either fixed or taken from each amount's own currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyRounding {
    scale: Option<u32>,
    strategy: RoundingStrategy,
}

impl CurrencyRounding {
    /// Rounds to `currency`'s default fraction digits.
    #[must_use]
    pub const fn for_currency(currency: CurrencyUnit) -> Self {
        Self::of_scale(currency.default_fraction_digits())
    }

    /// Rounds each amount to its own currency's default fraction digits.
    #[must_use]
    pub const fn per_currency() -> Self {
        Self {
            scale: None,
            strategy: RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Rounds to a fixed number of fraction digits.
    #[must_use]
    pub const fn of_scale(scale: u32) -> Self {
        Self {
            scale: Some(scale),
            strategy: RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Replaces the rounding strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: RoundingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fraction digits used for `currency`.
    #[must_use]
    pub const fn scale_for(&self, currency: CurrencyUnit) -> u32 {
        match self.scale {
            Some(scale) => scale,
            None => currency.default_fraction_digits(),
        }
    }

    /// Strategy used at midpoints and for discarded digits.
    #[must_use]
    pub const fn strategy(&self) -> RoundingStrategy {
        self.strategy
    }
}

impl MonetaryOperator for CurrencyRounding {
    fn apply(&self, amount: Money) -> MonetaryResult<Money> {
        let scale = self.scale_for(amount.currency());
        let rounded = amount
            .number_value()
            .round_dp_with_strategy(scale, self.strategy);
        Ok(Money::new(rounded, amount.currency()))
    }
}
