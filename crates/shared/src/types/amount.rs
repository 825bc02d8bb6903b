//! The behaviour shared by every monetary amount representation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::currency::CurrencyUnit;
use super::number::NumberValue;
use crate::error::{MonetaryError, MonetaryResult};

/// Which representation an amount uses.
///
/// Amounts of different families never compare equal through
/// [`MonetaryAmount::same_as`], even for the same logical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountFamily {
    /// Arbitrary scale, backed by `Decimal`.
    Money,
    /// Fixed scale of five digits, backed by `i64`.
    FastMoney,
}

impl fmt::Display for AmountFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Money => write!(f, "Money"),
            Self::FastMoney => write!(f, "FastMoney"),
        }
    }
}

/// A number paired with exactly one currency.
pub trait MonetaryAmount: fmt::Display {
    /// The currency of this amount.
    fn currency(&self) -> CurrencyUnit;

    /// The numeric part of this amount.
    fn number(&self) -> NumberValue;

    /// The representation family.
    fn family(&self) -> AmountFamily;

    /// Builds an amount of this family from its parts.
    fn from_parts(number: Decimal, currency: CurrencyUnit) -> MonetaryResult<Self>
    where
        Self: Sized;

    /// Fails with [`MonetaryError::CurrencyMismatch`] unless both currencies agree.
    fn check_currency(&self, other: &dyn MonetaryAmount) -> MonetaryResult<()> {
        if self.currency() == other.currency() {
            Ok(())
        } else {
            tracing::warn!(
                base = %self.currency(),
                other = %other.currency(),
                "Currency mismatch"
            );
            Err(MonetaryError::mismatch(
                self.currency().code(),
                other.currency().code(),
            ))
        }
    }

    /// -1, 0 or 1 depending on the sign of the number.
    fn signum(&self) -> i32 {
        let value = self.number().number_value();
        if value.is_zero() {
            0
        } else if value.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns true if the number is zero.
    fn is_zero(&self) -> bool {
        self.signum() == 0
    }

    /// Returns true if the number is greater than zero.
    fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Returns true if the number is zero or greater.
    fn is_positive_or_zero(&self) -> bool {
        self.signum() >= 0
    }

    /// Returns true if the number is less than zero.
    fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Compares numbers after checking both currencies agree.
    fn compare(&self, other: &dyn MonetaryAmount) -> MonetaryResult<Ordering> {
        self.check_currency(other)?;
        Ok(self
            .number()
            .number_value()
            .cmp(&other.number().number_value()))
    }

    /// Same currency and numerically equal, regardless of family or scale.
    fn is_equal_to(&self, other: &dyn MonetaryAmount) -> bool {
        self.currency() == other.currency()
            && self.number().number_value() == other.number().number_value()
    }

    /// Value-object equality: same family, currency and number.
    fn same_as(&self, other: &dyn MonetaryAmount) -> bool {
        self.family() == other.family() && self.is_equal_to(other)
    }

    /// Strictly greater than `other`, which must share the currency.
    fn is_greater_than(&self, other: &dyn MonetaryAmount) -> MonetaryResult<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Greater than or equal to `other`, which must share the currency.
    fn is_greater_than_or_equal_to(&self, other: &dyn MonetaryAmount) -> MonetaryResult<bool> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    /// Strictly less than `other`, which must share the currency.
    fn is_less_than(&self, other: &dyn MonetaryAmount) -> MonetaryResult<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    /// Less than or equal to `other`, which must share the currency.
    fn is_less_than_or_equal_to(&self, other: &dyn MonetaryAmount) -> MonetaryResult<bool> {
        Ok(self.compare(other)? != Ordering::Greater)
    }
}

/// Values accepted wherever an amount's number is expected.
pub trait AmountNumber {
    /// Converts to an exact decimal.
    fn to_decimal(self) -> MonetaryResult<Decimal>;
}

impl AmountNumber for Decimal {
    fn to_decimal(self) -> MonetaryResult<Decimal> {
        Ok(self)
    }
}

impl AmountNumber for NumberValue {
    fn to_decimal(self) -> MonetaryResult<Decimal> {
        Ok(self.number_value())
    }
}

macro_rules! integer_amount_number {
    ($($ty:ty),*) => {
        $(
            impl AmountNumber for $ty {
                fn to_decimal(self) -> MonetaryResult<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

integer_amount_number!(i8, i16, i32, i64, u8, u16, u32, u64);

impl AmountNumber for f64 {
    /// Uses the shortest decimal text that round-trips, so `123.45`
    /// becomes exactly `123.45` rather than its binary expansion.
    fn to_decimal(self) -> MonetaryResult<Decimal> {
        if !self.is_finite() {
            return Err(MonetaryError::Arithmetic(format!(
                "{self} is not a finite number"
            )));
        }
        Decimal::from_str(&self.to_string())
            .map_err(|e| MonetaryError::Arithmetic(format!("{self}: {e}")))
    }
}

/// Values accepted wherever a currency is expected.
pub trait IntoCurrency {
    /// Resolves to a currency unit.
    fn into_currency(self) -> MonetaryResult<CurrencyUnit>;
}

impl IntoCurrency for CurrencyUnit {
    fn into_currency(self) -> MonetaryResult<CurrencyUnit> {
        Ok(self)
    }
}

impl IntoCurrency for &str {
    fn into_currency(self) -> MonetaryResult<CurrencyUnit> {
        CurrencyUnit::of(self)
    }
}
