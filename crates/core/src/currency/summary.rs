//! Per-currency summary statistics.

use coinage_shared::MonetaryResult;
use coinage_shared::types::{CurrencyUnit, MonetaryAmount, Money};

/// Count, sum, min, max and average of amounts in one currency.
///
/// The average divides with `Decimal`'s full 28 significant digits, so
/// non-terminating quotients such as 67 / 3 carry that many digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonetarySummaryStatistics {
    currency: CurrencyUnit,
    count: u64,
    sum: Money,
    min: Option<Money>,
    max: Option<Money>,
}

impl MonetarySummaryStatistics {
    /// Creates empty statistics for `currency`.
    #[must_use]
    pub fn new(currency: CurrencyUnit) -> Self {
        Self {
            currency,
            count: 0,
            sum: Money::zero(currency),
            min: None,
            max: None,
        }
    }

    /// Records one amount; fails if its currency differs.
    pub fn accept(&mut self, amount: Money) -> MonetaryResult<()> {
        self.sum = self.sum.add(&amount)?;
        self.count += 1;
        if self
            .min
            .is_none_or(|min| amount.number_value() < min.number_value())
        {
            self.min = Some(amount);
        }
        if self
            .max
            .is_none_or(|max| amount.number_value() > max.number_value())
        {
            self.max = Some(amount);
        }
        Ok(())
    }

    /// Merges statistics gathered separately for the same currency.
    pub fn combine(&mut self, other: &Self) -> MonetaryResult<()> {
        self.sum = self.sum.add(&other.sum)?;
        self.count += other.count;
        if let Some(candidate) = other.min {
            if self
                .min
                .is_none_or(|min| candidate.number_value() < min.number_value())
            {
                self.min = Some(candidate);
            }
        }
        if let Some(candidate) = other.max {
            if self
                .max
                .is_none_or(|max| candidate.number_value() > max.number_value())
            {
                self.max = Some(candidate);
            }
        }
        Ok(())
    }

    /// The currency summarized.
    #[must_use]
    pub const fn currency(&self) -> CurrencyUnit {
        self.currency
    }

    /// Number of amounts recorded.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all amounts; zero when empty.
    #[must_use]
    pub const fn sum(&self) -> Money {
        self.sum
    }

    /// Smallest amount, if any.
    #[must_use]
    pub const fn min(&self) -> Option<Money> {
        self.min
    }

    /// Largest amount, if any.
    #[must_use]
    pub const fn max(&self) -> Option<Money> {
        self.max
    }

    /// Sum divided by count; zero when empty.
    pub fn average(&self) -> MonetaryResult<Money> {
        if self.count == 0 {
            return Ok(Money::zero(self.currency));
        }
        self.sum.divide(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinage_shared::MonetaryError;
    use rust_decimal_macros::dec;

    fn usd(value: rust_decimal::Decimal) -> Money {
        Money::new(value, CurrencyUnit::USD)
    }

    #[test]
    fn test_dollar_summary() {
        let mut stats = MonetarySummaryStatistics::new(CurrencyUnit::USD);
        for value in [dec!(42), dec!(7), dec!(18)] {
            stats.accept(usd(value)).unwrap();
        }
        assert_eq!(stats.count(), 3);
        assert_eq!(stats.sum(), usd(dec!(67)));
        assert_eq!(stats.min(), Some(usd(dec!(7))));
        assert_eq!(stats.max(), Some(usd(dec!(42))));
        assert!(
            stats
                .average()
                .unwrap()
                .to_string()
                .starts_with("USD 22.333333333333333333")
        );
    }

    #[test]
    fn test_empty_summary() {
        let stats = MonetarySummaryStatistics::new(CurrencyUnit::EUR);
        assert_eq!(stats.count(), 0);
        assert!(stats.sum().is_zero());
        assert_eq!(stats.min(), None);
        assert_eq!(stats.average().unwrap(), Money::zero(CurrencyUnit::EUR));
    }

    #[test]
    fn test_accept_rejects_other_currency() {
        let mut stats = MonetarySummaryStatistics::new(CurrencyUnit::USD);
        let err = stats.accept(Money::new(dec!(1), CurrencyUnit::EUR)).unwrap_err();
        assert_eq!(err, MonetaryError::mismatch("USD", "EUR"));
        assert_eq!(stats.count(), 0);
    }

    #[test]
    fn test_combine() {
        let mut left = MonetarySummaryStatistics::new(CurrencyUnit::USD);
        left.accept(usd(dec!(5))).unwrap();
        let mut right = MonetarySummaryStatistics::new(CurrencyUnit::USD);
        right.accept(usd(dec!(1))).unwrap();
        right.accept(usd(dec!(9))).unwrap();

        left.combine(&right).unwrap();
        assert_eq!(left.count(), 3);
        assert_eq!(left.sum(), usd(dec!(15)));
        assert_eq!(left.min(), Some(usd(dec!(1))));
        assert_eq!(left.max(), Some(usd(dec!(9))));
        assert_eq!(left.average().unwrap(), usd(dec!(5)));
    }
}
