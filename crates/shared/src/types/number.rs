//! Numeric projection of a monetary amount.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{MonetaryError, MonetaryResult};

/// The number part of an amount, with lossless and lossy views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NumberValue(Decimal);

impl NumberValue {
    /// Wraps an exact decimal.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// The exact decimal value.
    #[must_use]
    pub const fn number_value(&self) -> Decimal {
        self.0
    }

    /// Integer part, truncated toward zero.
    pub fn int_value(&self) -> MonetaryResult<i64> {
        self.0
            .trunc()
            .to_i64()
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{} does not fit in i64", self.0)))
    }

    /// Nearest `f64`; may lose precision.
    pub fn double_value(&self) -> MonetaryResult<f64> {
        self.0
            .to_f64()
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{} has no f64 value", self.0)))
    }

    /// Digits after the decimal point.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Count of significant digits in the unscaled value, at least 1.
    #[must_use]
    pub fn precision(&self) -> u32 {
        let mut unscaled = self.0.mantissa().unsigned_abs();
        let mut digits = 1;
        while unscaled >= 10 {
            unscaled /= 10;
            digits += 1;
        }
        digits
    }

    /// `10^scale`: the denominator the fractional part is expressed over.
    #[must_use]
    pub fn amount_fraction_denominator(&self) -> i128 {
        10i128.pow(self.0.scale())
    }

    /// The fractional part as an integer over [`Self::amount_fraction_denominator`].
    ///
    /// Carries the sign of the value: `-1.25` yields `-25`.
    #[must_use]
    pub fn amount_fraction_numerator(&self) -> i128 {
        self.0.mantissa() % self.amount_fraction_denominator()
    }
}

impl From<Decimal> for NumberValue {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decomposition_of_123_45() {
        let number = NumberValue::new(dec!(123.45));
        assert_eq!(number.int_value().unwrap(), 123);
        assert_eq!(number.double_value().unwrap().to_string(), "123.45");
        assert_eq!(number.amount_fraction_denominator(), 100);
        assert_eq!(number.amount_fraction_numerator(), 45);
        assert_eq!(number.precision(), 5);
        assert_eq!(number.scale(), 2);
    }

    #[test]
    fn test_negative_fraction_keeps_sign() {
        let number = NumberValue::new(dec!(-1.25));
        assert_eq!(number.int_value().unwrap(), -1);
        assert_eq!(number.amount_fraction_numerator(), -25);
        assert_eq!(number.amount_fraction_denominator(), 100);
    }

    #[test]
    fn test_whole_number() {
        let number = NumberValue::new(dec!(5));
        assert_eq!(number.amount_fraction_denominator(), 1);
        assert_eq!(number.amount_fraction_numerator(), 0);
        assert_eq!(number.precision(), 1);
    }

    #[test]
    fn test_zero_has_precision_one() {
        assert_eq!(NumberValue::new(Decimal::ZERO).precision(), 1);
    }

    #[test]
    fn test_int_value_out_of_range() {
        let huge = NumberValue::new(Decimal::MAX);
        assert!(matches!(huge.int_value(), Err(MonetaryError::Arithmetic(_))));
    }

    #[test]
    fn test_double_value_at_extremes_is_finite() {
        for value in [Decimal::MAX, Decimal::MIN, dec!(0.0000000000000000000000000001)] {
            let double = NumberValue::new(value).double_value().unwrap();
            assert!(double.is_finite());
        }
    }
}
