//! Fixed-scale money backed by an integer.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::amount::{AmountFamily, AmountNumber, IntoCurrency, MonetaryAmount};
use super::currency::CurrencyUnit;
use super::money::Money;
use super::number::NumberValue;
use super::operator::MonetaryOperator;
use crate::error::{MonetaryError, MonetaryResult};

/// Monetary amount with exactly five fraction digits stored as `i64` units.
///
/// Cheaper than [`Money`] but bounded: values needing more than five fraction
/// digits cannot be created, and results outside the `i64` range fail.
/// Multiplication and division round half-even back to five digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FastMoney {
    units: i64,
    currency: CurrencyUnit,
}

impl FastMoney {
    /// Fraction digits carried by every value.
    pub const SCALE: u32 = 5;

    /// Creates an amount; fails if `number` needs more than five fraction digits.
    pub fn of(number: impl AmountNumber, currency: impl IntoCurrency) -> MonetaryResult<Self> {
        let number = number.to_decimal()?;
        let currency = currency.into_currency()?;
        if number.round_dp(Self::SCALE) != number {
            return Err(MonetaryError::Arithmetic(format!(
                "{number} can not be represented by FastMoney, scale > {}",
                Self::SCALE
            )));
        }
        Self::from_decimal(number, currency)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: CurrencyUnit) -> Self {
        Self { units: 0, currency }
    }

    fn from_decimal(number: Decimal, currency: CurrencyUnit) -> MonetaryResult<Self> {
        let units = number
            .checked_mul(Decimal::from(10i64.pow(Self::SCALE)))
            .and_then(|scaled| scaled.to_i64())
            .ok_or_else(|| {
                MonetaryError::Arithmetic(format!("{number} exceeds the FastMoney range"))
            })?;
        Ok(Self { units, currency })
    }

    fn rounded(number: Decimal, currency: CurrencyUnit) -> MonetaryResult<Self> {
        Self::from_decimal(
            number.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointNearestEven),
            currency,
        )
    }

    fn decimal(&self) -> Decimal {
        Decimal::new(self.units, Self::SCALE)
    }

    fn other_units(&self, other: &dyn MonetaryAmount) -> MonetaryResult<i64> {
        self.check_currency(other)?;
        Self::of(other.number(), self.currency).map(|fast| fast.units)
    }

    /// Adds an amount of the same currency, of any family.
    pub fn add(&self, other: &dyn MonetaryAmount) -> MonetaryResult<Self> {
        let units = self
            .units
            .checked_add(self.other_units(other)?)
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{self} + {other} overflows")))?;
        Ok(Self { units, ..*self })
    }

    /// Subtracts an amount of the same currency, of any family.
    pub fn subtract(&self, other: &dyn MonetaryAmount) -> MonetaryResult<Self> {
        let units = self
            .units
            .checked_sub(self.other_units(other)?)
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{self} - {other} overflows")))?;
        Ok(Self { units, ..*self })
    }

    /// Multiplies by a scalar, rounding to five fraction digits.
    pub fn multiply(&self, factor: impl AmountNumber) -> MonetaryResult<Self> {
        let factor = factor.to_decimal()?;
        let product = self
            .decimal()
            .checked_mul(factor)
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{self} * {factor} overflows")))?;
        Self::rounded(product, self.currency)
    }

    /// Divides by a scalar, rounding to five fraction digits.
    pub fn divide(&self, divisor: impl AmountNumber) -> MonetaryResult<Self> {
        let divisor = divisor.to_decimal()?;
        if divisor.is_zero() {
            return Err(MonetaryError::Arithmetic(format!("{self} / 0")));
        }
        let quotient = self
            .decimal()
            .checked_div(divisor)
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{self} / {divisor} overflows")))?;
        Self::rounded(quotient, self.currency)
    }

    /// The same amount with the opposite sign.
    pub fn negate(&self) -> MonetaryResult<Self> {
        let units = self
            .units
            .checked_neg()
            .ok_or_else(|| MonetaryError::Arithmetic(format!("-({self}) overflows")))?;
        Ok(Self { units, ..*self })
    }

    /// Converts to the arbitrary-scale family.
    #[must_use]
    pub fn to_money(&self) -> Money {
        Money::new(self.decimal(), self.currency)
    }

    /// Applies an operator, rounding its result back to five fraction digits.
    pub fn with<O: MonetaryOperator + ?Sized>(&self, operator: &O) -> MonetaryResult<Self> {
        let result = operator.apply(self.to_money())?;
        Self::rounded(result.number_value(), result.currency())
    }
}

impl MonetaryAmount for FastMoney {
    fn currency(&self) -> CurrencyUnit {
        self.currency
    }

    fn number(&self) -> NumberValue {
        NumberValue::new(self.decimal())
    }

    fn family(&self) -> AmountFamily {
        AmountFamily::FastMoney
    }

    fn from_parts(number: Decimal, currency: CurrencyUnit) -> MonetaryResult<Self> {
        Self::of(number, currency)
    }
}

impl fmt::Display for FastMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_keeps_fixed_scale() {
        let seven = FastMoney::of(7, "EUR").unwrap();
        assert_eq!(seven.to_string(), "EUR 7.00000");
    }

    #[test]
    fn test_scale_limit() {
        assert!(FastMoney::of(dec!(1.23456), "USD").is_ok());
        assert!(matches!(
            FastMoney::of(dec!(1.234567), "USD"),
            Err(MonetaryError::Arithmetic(_))
        ));
    }

    #[test]
    fn test_range_limit() {
        assert!(FastMoney::of(dec!(100000000000000), "USD").is_err());
    }

    #[test]
    fn test_subtract_money() {
        let seven = FastMoney::of(7, "EUR").unwrap();
        let five = Money::of(5, "EUR").unwrap();
        let two = seven.subtract(&five).unwrap();
        assert_eq!(two, FastMoney::of(2, "EUR").unwrap());
        assert_eq!(two.to_money(), Money::of(2, "EUR").unwrap());
    }

    #[test]
    fn test_mismatch() {
        let seven = FastMoney::of(7, "EUR").unwrap();
        let ten = Money::of(10, "USD").unwrap();
        assert_eq!(
            seven.add(&ten).unwrap_err(),
            MonetaryError::mismatch("EUR", "USD")
        );
    }

    #[test]
    fn test_multiply_and_divide_round() {
        let one = FastMoney::of(1, "USD").unwrap();
        assert_eq!(
            one.divide(3).unwrap().number().number_value(),
            dec!(0.33333)
        );
        assert_eq!(
            one.multiply(dec!(0.123456)).unwrap().number().number_value(),
            dec!(0.12346)
        );
    }

    #[rstest]
    #[case(dec!(0.123456), dec!(0.12346))]
    #[case(dec!(0.000025), dec!(0.00002))]
    #[case(dec!(0.000035), dec!(0.00004))]
    #[case(dec!(-0.1234549), dec!(-0.12345))]
    fn test_operator_result_rounds_to_scale(#[case] factor: Decimal, #[case] expected: Decimal) {
        let one = FastMoney::of(1, "USD").unwrap();
        let scaled = one.with(&|amount: Money| amount.multiply(factor)).unwrap();
        assert_eq!(scaled.number().number_value(), expected);
        assert_eq!(scaled.currency(), CurrencyUnit::USD);
    }

    #[test]
    fn test_negate() {
        let five = FastMoney::of(5, "EUR").unwrap();
        assert!(five.negate().unwrap().is_negative());
    }

    #[test]
    fn test_family() {
        assert_eq!(FastMoney::zero(CurrencyUnit::EUR).family(), AmountFamily::FastMoney);
    }
}
