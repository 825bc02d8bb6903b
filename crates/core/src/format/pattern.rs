//! Decimal patterns such as `#,##0.00 ¤`.
//!
//! Pattern characters:
//! - `0` a digit that is always shown
//! - `#` a digit shown only when significant
//! - `,` grouping separator; the group size is the digit count after the last one
//! - `.` decimal separator
//! - `¤` the currency, in prefix or suffix
//!
//! Everything before the first and after the last digit character is a
//! literal prefix or suffix.

use rust_decimal::{Decimal, RoundingStrategy};

use coinage_shared::{MonetaryError, MonetaryResult};

/// Marks where the currency goes in a pattern.
pub const CURRENCY_SIGN: char = '¤';

fn is_number_char(c: char) -> bool {
    matches!(c, '0' | '#' | ',' | '.')
}

/// A parsed decimal pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalPattern {
    prefix: String,
    suffix: String,
    min_integer_digits: usize,
    grouping_size: Option<usize>,
    min_fraction_digits: u32,
    max_fraction_digits: u32,
}

impl DecimalPattern {
    /// Parses `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`MonetaryError::InvalidPattern`] when the pattern has no
    /// digits, more than one decimal separator, a grouping separator in the
    /// fraction, a trailing grouping separator, or digits after the suffix
    /// starts.
    pub fn parse(pattern: &str) -> MonetaryResult<Self> {
        let invalid = |reason: &str| MonetaryError::InvalidPattern(format!("{pattern:?}: {reason}"));

        let start = pattern
            .find(|c: char| c == '0' || c == '#')
            .ok_or_else(|| invalid("no digits"))?;
        // Grouping or decimal characters directly before the first digit belong to the number.
        let start = pattern[..start]
            .char_indices()
            .rev()
            .take_while(|(_, c)| *c == ',' || *c == '.')
            .last()
            .map_or(start, |(i, _)| i);
        let end = pattern[start..]
            .find(|c: char| !is_number_char(c))
            .map_or(pattern.len(), |offset| start + offset);

        let (prefix, number, suffix) = (&pattern[..start], &pattern[start..end], &pattern[end..]);
        if suffix.contains(['0', '#']) {
            return Err(invalid("digits after the suffix"));
        }

        let mut parts = number.split('.');
        let integer = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(invalid("more than one decimal separator"));
        }
        if fraction.contains(',') {
            return Err(invalid("grouping separator in fraction"));
        }

        let grouping_size = match integer.rfind(',') {
            Some(index) => {
                let size = integer.len() - index - 1;
                if size == 0 {
                    return Err(invalid("empty digit group"));
                }
                Some(size)
            }
            None => None,
        };

        let min_integer_digits = integer.chars().filter(|c| *c == '0').count();
        let min_fraction_digits = count_u32(fraction.chars().filter(|c| *c == '0').count());
        let max_fraction_digits = count_u32(fraction.len());

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            min_integer_digits,
            grouping_size,
            min_fraction_digits,
            max_fraction_digits,
        })
    }

    /// The same pattern showing exactly `digits` fraction digits.
    #[must_use]
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.min_fraction_digits = digits;
        self.max_fraction_digits = digits;
        self
    }

    /// Literal text before the number.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Literal text after the number.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Integer digits always shown, zero padded.
    #[must_use]
    pub const fn min_integer_digits(&self) -> usize {
        self.min_integer_digits
    }

    /// Digits per group, if grouping is used.
    #[must_use]
    pub const fn grouping_size(&self) -> Option<usize> {
        self.grouping_size
    }

    /// Fraction digits always shown.
    #[must_use]
    pub const fn min_fraction_digits(&self) -> u32 {
        self.min_fraction_digits
    }

    /// Fraction digits shown at most; the number is rounded half-even to this.
    #[must_use]
    pub const fn max_fraction_digits(&self) -> u32 {
        self.max_fraction_digits
    }

    /// Renders the absolute value of `number` with the given separators.
    ///
    /// Prefix, suffix and sign are left to the caller.
    #[must_use]
    pub fn format_number(&self, number: Decimal, decimal_separator: char, grouping_separator: char) -> String {
        let rounded = number
            .abs()
            .round_dp_with_strategy(self.max_fraction_digits, RoundingStrategy::MidpointNearestEven);
        let text = rounded.to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut fraction = fraction.to_string();
        let min_fraction = self.min_fraction_digits as usize;
        while fraction.len() > min_fraction && fraction.ends_with('0') {
            fraction.pop();
        }
        while fraction.len() < min_fraction {
            fraction.push('0');
        }

        let integer = if integer == "0" && self.min_integer_digits == 0 {
            String::new()
        } else {
            format!("{integer:0>width$}", width = self.min_integer_digits)
        };
        let mut out = match self.grouping_size {
            Some(size) => group_digits(&integer, size, grouping_separator),
            None => integer,
        };

        if !fraction.is_empty() {
            out.push(decimal_separator);
            out.push_str(&fraction);
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn group_digits(digits: &str, size: usize, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / size);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_locale_pattern() {
        let pattern = DecimalPattern::parse("#,##0.00 ¤").unwrap();
        assert_eq!(pattern.prefix(), "");
        assert_eq!(pattern.suffix(), " ¤");
        assert_eq!(pattern.min_integer_digits(), 1);
        assert_eq!(pattern.grouping_size(), Some(3));
        assert_eq!(pattern.min_fraction_digits(), 2);
        assert_eq!(pattern.max_fraction_digits(), 2);
    }

    #[test]
    fn test_parse_custom_pattern() {
        let pattern = DecimalPattern::parse("00,00,00,00.00 ¤").unwrap();
        assert_eq!(pattern.min_integer_digits(), 8);
        assert_eq!(pattern.grouping_size(), Some(2));
        assert_eq!(
            pattern.format_number(dec!(12345.67), '.', ','),
            "00,01,23,45.67"
        );
    }

    #[test]
    fn test_parse_prefix_pattern() {
        let pattern = DecimalPattern::parse("¤ #,##0.0#").unwrap();
        assert_eq!(pattern.prefix(), "¤ ");
        assert_eq!(pattern.min_fraction_digits(), 1);
        assert_eq!(pattern.max_fraction_digits(), 2);
    }

    #[rstest]
    #[case("¤")]
    #[case("#,##0.00.0")]
    #[case("#,##0.0,0")]
    #[case("#,##0,.00")]
    #[case("0.00 ¤ 0")]
    fn test_invalid_patterns(#[case] pattern: &str) {
        assert!(matches!(
            DecimalPattern::parse(pattern),
            Err(MonetaryError::InvalidPattern(_))
        ));
    }

    #[rstest]
    #[case(dec!(12345.67), "12.345,67")]
    #[case(dec!(0.5), "0,50")]
    #[case(dec!(1234567), "1.234.567,00")]
    #[case(dec!(2.345), "2,34")]
    #[case(dec!(-7), "7,00")]
    fn test_format_number(#[case] number: Decimal, #[case] expected: &str) {
        let pattern = DecimalPattern::parse("#,##0.00").unwrap();
        assert_eq!(pattern.format_number(number, ',', '.'), expected);
    }

    #[test]
    fn test_optional_digits() {
        let pattern = DecimalPattern::parse("#,##0.##").unwrap();
        assert_eq!(pattern.format_number(dec!(12), '.', ','), "12");
        assert_eq!(pattern.format_number(dec!(12.5), '.', ','), "12.5");

        let bare = DecimalPattern::parse("#.##").unwrap();
        assert_eq!(bare.format_number(dec!(0.25), '.', ','), ".25");
        assert_eq!(bare.format_number(dec!(0), '.', ','), "0");
    }

    #[test]
    fn test_with_fraction_digits() {
        let yen = DecimalPattern::parse("¤#,##0.00").unwrap().with_fraction_digits(0);
        assert_eq!(yen.format_number(dec!(1234.5), '.', ','), "1,234");
    }
}
