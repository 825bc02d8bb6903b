//! Locale-aware formatting and parsing of amounts.

use std::str::FromStr;

use rust_decimal::Decimal;

use coinage_shared::types::{CurrencyUnit, Locale, MonetaryAmount, Money};
use coinage_shared::{MonetaryError, MonetaryResult};

use super::pattern::{CURRENCY_SIGN, DecimalPattern};
use super::query::AmountFormatQuery;

/// Formats amounts to text and parses them back, per locale and pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonetaryAmountFormat {
    query: AmountFormatQuery,
    pattern: DecimalPattern,
    currency_digits: bool,
}

impl MonetaryAmountFormat {
    /// Builds the format described by `query`.
    ///
    /// Without a custom pattern the locale's pattern is used and fraction
    /// digits follow each amount's currency (none for JPY).
    ///
    /// # Errors
    ///
    /// Returns [`MonetaryError::InvalidPattern`] for a malformed custom pattern.
    pub fn new(query: AmountFormatQuery) -> MonetaryResult<Self> {
        let (pattern, currency_digits) = match query.pattern() {
            Some(custom) => (DecimalPattern::parse(custom)?, false),
            None => (DecimalPattern::parse(query.locale().currency_pattern())?, true),
        };
        Ok(Self {
            query,
            pattern,
            currency_digits,
        })
    }

    /// The query this format was built from.
    #[must_use]
    pub const fn query(&self) -> &AmountFormatQuery {
        &self.query
    }

    /// Shortcut for the query's locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.query.locale()
    }

    /// Renders `amount`, e.g. `"12.345,67 USD"` for Germany.
    #[must_use]
    pub fn format(&self, amount: &dyn MonetaryAmount) -> String {
        let locale = self.locale();
        let currency = amount.currency();
        let pattern = if self.currency_digits {
            self.pattern
                .clone()
                .with_fraction_digits(currency.default_fraction_digits())
        } else {
            self.pattern.clone()
        };

        let number = amount.number().number_value();
        let digits = pattern.format_number(
            number,
            locale.decimal_separator(),
            locale.grouping_separator(),
        );
        let shows_nonzero = digits.chars().any(|c| c.is_ascii_digit() && c != '0');

        let symbol = self.query.currency_style().render(currency, locale);
        let mut out = String::new();
        if number.is_sign_negative() && shows_nonzero {
            out.push('-');
        }
        out.push_str(&pattern.prefix().replace(CURRENCY_SIGN, symbol));
        out.push_str(&digits);
        out.push_str(&pattern.suffix().replace(CURRENCY_SIGN, symbol));
        out
    }

    /// Parses text such as `"12,4 USD"` or `"US$1,234.50"`.
    ///
    /// Grouping separators are optional; whitespace grouping also accepts
    /// plain and narrow no-break spaces. The currency may be given by code,
    /// by its symbol in this locale, or by name. Text without a currency
    /// uses the query's default currency.
    ///
    /// # Errors
    ///
    /// Returns [`MonetaryError::Parse`] when no number or no known currency
    /// can be found.
    pub fn parse(&self, text: &str) -> MonetaryResult<Money> {
        let locale = self.locale();
        let decimal = locale.decimal_separator();
        let grouping = locale.grouping_separator();
        let is_grouping = |c: char| {
            c == grouping || (is_space(grouping) && is_space(c))
        };

        let start = text
            .char_indices()
            .find(|&(i, c)| {
                c.is_ascii_digit()
                    || (c == decimal
                        && text[i + c.len_utf8()..].starts_with(|d: char| d.is_ascii_digit()))
            })
            .map(|(i, _)| i)
            .ok_or_else(|| MonetaryError::Parse(format!("no number in {text:?}")))?;

        // Grouping is only allowed in the integer part; the run ends at the
        // first separator that cannot continue it.
        let mut in_fraction = false;
        let run_len = text[start..]
            .char_indices()
            .find(|&(_, c)| {
                if c.is_ascii_digit() || (is_grouping(c) && !in_fraction) {
                    false
                } else if c == decimal && !in_fraction {
                    in_fraction = true;
                    false
                } else {
                    true
                }
            })
            .map_or(text.len() - start, |(i, _)| i);
        let run = text[start..start + run_len].trim_end_matches(|c: char| !c.is_ascii_digit());
        let end = start + run.len();

        let mut normalized: String = run
            .chars()
            .filter(|c| !is_grouping(*c))
            .map(|c| if c == decimal { '.' } else { c })
            .collect();
        if normalized.starts_with('.') {
            normalized.insert(0, '0');
        }
        let mut number = Decimal::from_str(&normalized)
            .map_err(|e| MonetaryError::Parse(format!("invalid number in {text:?}: {e}")))?;

        let rest = format!("{} {}", &text[..start], &text[end..]);
        if rest.contains('-') {
            number = -number;
        }
        let currency_text = rest.replace('-', " ");
        let currency_text = currency_text.trim();

        let currency = if currency_text.is_empty() {
            self.query
                .default_currency()
                .ok_or_else(|| MonetaryError::Parse(format!("no currency in {text:?}")))?
        } else {
            CurrencyUnit::find_by_text(currency_text, locale).ok_or_else(|| {
                MonetaryError::Parse(format!("unknown currency {currency_text:?} in {text:?}"))
            })?
        };

        tracing::debug!(text, %currency, %number, "Parsed amount");
        Ok(Money::new(number, currency))
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\u{a0}' | '\u{202f}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CurrencyStyle;
    use coinage_shared::types::FastMoney;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn format_for(locale: Locale) -> MonetaryAmountFormat {
        MonetaryAmountFormat::new(AmountFormatQuery::of(locale)).unwrap()
    }

    #[rstest]
    #[case(Locale::CANADA, "USD12,345.67")]
    #[case(Locale::GERMANY, "12.345,67 USD")]
    #[case(Locale::FRANCE, "12\u{a0}345,67 USD")]
    #[case(Locale::JAPAN, "USD12,345.67")]
    fn test_locale_formats(#[case] locale: Locale, #[case] expected: &str) {
        let amount = Money::of(dec!(12345.67), "USD").unwrap();
        assert_eq!(format_for(locale).format(&amount), expected);
    }

    #[test]
    fn test_currency_digits_follow_currency() {
        let yen = Money::of(dec!(1234.5), "JPY").unwrap();
        assert_eq!(format_for(Locale::US).format(&yen), "JPY1,234");

        let fast = FastMoney::of(dec!(7), "EUR").unwrap();
        assert_eq!(format_for(Locale::GERMANY).format(&fast), "7,00 EUR");
    }

    #[test]
    fn test_custom_pattern_with_name_style() {
        let query = AmountFormatQuery::builder(Locale::US)
            .currency_style(CurrencyStyle::Name)
            .pattern("00,00,00,00.00 ¤")
            .build();
        let format = MonetaryAmountFormat::new(query).unwrap();
        let amount = Money::of(dec!(12345.67), "USD").unwrap();
        assert_eq!(format.format(&amount), "00,01,23,45.67 US Dollar");
    }

    #[test]
    fn test_symbol_style_and_sign() {
        let query = AmountFormatQuery::builder(Locale::US)
            .currency_style(CurrencyStyle::Symbol)
            .build();
        let format = MonetaryAmountFormat::new(query).unwrap();
        let debt = Money::of(dec!(-1234.5), "USD").unwrap();
        assert_eq!(format.format(&debt), "-$1,234.50");
        let tiny = Money::of(dec!(-0.001), "USD").unwrap();
        assert_eq!(format.format(&tiny), "$0.00");
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let query = AmountFormatQuery::builder(Locale::US).pattern("¤").build();
        assert!(matches!(
            MonetaryAmountFormat::new(query),
            Err(MonetaryError::InvalidPattern(_))
        ));
    }

    #[rstest]
    #[case(Locale::GERMANY, "12,4 USD", dec!(12.4), CurrencyUnit::USD)]
    #[case(Locale::GERMANY, "1.234,56 EUR", dec!(1234.56), CurrencyUnit::EUR)]
    #[case(Locale::GERMANY, "-3,5 €", dec!(-3.5), CurrencyUnit::EUR)]
    #[case(Locale::US, "$1,234.50", dec!(1234.5), CurrencyUnit::USD)]
    #[case(Locale::CANADA, "US$99", dec!(99), CurrencyUnit::USD)]
    #[case(Locale::FRANCE, "12 345,67 euro", dec!(12345.67), CurrencyUnit::EUR)]
    #[case(Locale::US, "JPY1,234", dec!(1234), CurrencyUnit::JPY)]
    #[case(Locale::US, ".5 USD", dec!(0.5), CurrencyUnit::USD)]
    #[case(Locale::GERMANY, ",75 EUR", dec!(0.75), CurrencyUnit::EUR)]
    #[case(Locale::FRANCE, "-,5 EUR", dec!(-0.5), CurrencyUnit::EUR)]
    fn test_parse(
        #[case] locale: Locale,
        #[case] text: &str,
        #[case] number: Decimal,
        #[case] currency: CurrencyUnit,
    ) {
        let parsed = format_for(locale).parse(text).unwrap();
        assert_eq!(parsed, Money::new(number, currency));
    }

    #[test]
    fn test_parsed_german_amount_displays() {
        let parsed = format_for(Locale::GERMANY).parse("12,4 USD").unwrap();
        assert_eq!(parsed.to_string(), "USD 12.4");
    }

    #[test]
    fn test_parse_default_currency() {
        let query = AmountFormatQuery::builder(Locale::GERMANY)
            .default_currency(CurrencyUnit::CHF)
            .build();
        let format = MonetaryAmountFormat::new(query).unwrap();
        assert_eq!(
            format.parse("12,50").unwrap(),
            Money::of(dec!(12.5), "CHF").unwrap()
        );
        assert!(matches!(
            format_for(Locale::GERMANY).parse("12,50"),
            Err(MonetaryError::Parse(_))
        ));
    }

    #[rstest]
    #[case(Locale::GERMANY, "USD")]
    #[case(Locale::GERMANY, "12,4 Taler")]
    #[case(Locale::GERMANY, "1,234.56 EUR")]
    #[case(Locale::GERMANY, "1,5,0 EUR")]
    #[case(Locale::US, "1.234,56 USD")]
    #[case(Locale::US, "1,234.5,6 USD")]
    #[case(Locale::US, "1.2.3 USD")]
    fn test_parse_failures(#[case] locale: Locale, #[case] text: &str) {
        assert!(matches!(
            format_for(locale).parse(text),
            Err(MonetaryError::Parse(_))
        ));
    }
}
