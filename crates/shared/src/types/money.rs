//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::{AmountFamily, AmountNumber, IntoCurrency, MonetaryAmount};
use super::currency::CurrencyUnit;
use super::number::NumberValue;
use super::operator::MonetaryOperator;
use crate::error::{MonetaryError, MonetaryResult};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
/// Trailing fraction zeros are dropped, so `7.50` is stored as `7.5`.
/// Division keeps the 28 significant digits `Decimal` can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    number: Decimal,
    currency: CurrencyUnit,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub fn new(number: Decimal, currency: CurrencyUnit) -> Self {
        Self {
            number: number.normalize(),
            currency,
        }
    }

    /// Creates an amount from any supported number and currency form.
    ///
    /// ```
    /// use coinage_shared::types::Money;
    ///
    /// let five = Money::of(5, "EUR").unwrap();
    /// assert_eq!(five.to_string(), "EUR 5");
    /// ```
    pub fn of(number: impl AmountNumber, currency: impl IntoCurrency) -> MonetaryResult<Self> {
        Ok(Self::new(number.to_decimal()?, currency.into_currency()?))
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: CurrencyUnit) -> Self {
        Self {
            number: Decimal::ZERO,
            currency,
        }
    }

    /// The exact decimal number.
    #[must_use]
    pub const fn number_value(&self) -> Decimal {
        self.number
    }

    /// Adds an amount of the same currency, of any family.
    pub fn add(&self, other: &dyn MonetaryAmount) -> MonetaryResult<Self> {
        self.check_currency(other)?;
        let sum = self
            .number
            .checked_add(other.number().number_value())
            .ok_or_else(|| overflow("add", self, other))?;
        Ok(Self::new(sum, self.currency))
    }

    /// Subtracts an amount of the same currency, of any family.
    pub fn subtract(&self, other: &dyn MonetaryAmount) -> MonetaryResult<Self> {
        self.check_currency(other)?;
        let difference = self
            .number
            .checked_sub(other.number().number_value())
            .ok_or_else(|| overflow("subtract", self, other))?;
        Ok(Self::new(difference, self.currency))
    }

    /// Multiplies by a scalar.
    pub fn multiply(&self, factor: impl AmountNumber) -> MonetaryResult<Self> {
        let factor = factor.to_decimal()?;
        let product = self
            .number
            .checked_mul(factor)
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{self} * {factor} overflows")))?;
        Ok(Self::new(product, self.currency))
    }

    /// Divides by a scalar.
    pub fn divide(&self, divisor: impl AmountNumber) -> MonetaryResult<Self> {
        let divisor = divisor.to_decimal()?;
        if divisor.is_zero() {
            return Err(MonetaryError::Arithmetic(format!("{self} / 0")));
        }
        let quotient = self
            .number
            .checked_div(divisor)
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{self} / {divisor} overflows")))?;
        Ok(Self::new(quotient, self.currency))
    }

    /// The same amount with the opposite sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-self.number, self.currency)
    }

    /// The same amount without sign.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.number.abs(), self.currency)
    }

    /// Applies an operator such as a rounding or a conversion.
    pub fn with<O: MonetaryOperator + ?Sized>(&self, operator: &O) -> MonetaryResult<Self> {
        operator.apply(*self)
    }
}

fn overflow(op: &str, left: &dyn MonetaryAmount, right: &dyn MonetaryAmount) -> MonetaryError {
    MonetaryError::Arithmetic(format!("{op} overflows: {left}, {right}"))
}

impl MonetaryAmount for Money {
    fn currency(&self) -> CurrencyUnit {
        self.currency
    }

    fn number(&self) -> NumberValue {
        NumberValue::new(self.number)
    }

    fn family(&self) -> AmountFamily {
        AmountFamily::Money
    }

    fn from_parts(number: Decimal, currency: CurrencyUnit) -> MonetaryResult<Self> {
        Ok(Self::new(number, currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.number)
    }
}
