//! Property-based tests for amount formats.
//!
//! - Parsing a formatted amount gives the amount back
//! - Formatting never loses the currency

use proptest::prelude::*;
use rust_decimal::Decimal;

use coinage_shared::types::{CurrencyUnit, Locale, MonetaryAmount, Money};

use super::{AmountFormatQuery, CurrencyStyle, MonetaryFormats};

/// Strategy to pick any supported locale.
fn locale() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::ALL.to_vec())
}

/// Strategy to pick any catalog currency.
fn currency() -> impl Strategy<Value = CurrencyUnit> {
    prop::sample::select(CurrencyUnit::all().to_vec())
}

/// Strategy to generate amounts already at their currency's scale.
fn amount() -> impl Strategy<Value = Money> {
    (-1_000_000_000i64..1_000_000_000i64, currency()).prop_map(|(units, unit)| {
        Money::new(Decimal::new(units, unit.default_fraction_digits()), unit)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// parse(format(a)) == a for every locale's default format.
    #[test]
    fn prop_parse_inverts_format(a in amount(), locale in locale()) {
        let format = MonetaryFormats::amount_format(locale).unwrap();
        let text = format.format(&a);
        let parsed = format.parse(&text).unwrap();
        prop_assert_eq!(parsed, a);
    }

    /// The name style always spells out the currency name.
    #[test]
    fn prop_name_style_mentions_currency(a in amount(), locale in locale()) {
        let query = AmountFormatQuery::builder(locale)
            .currency_style(CurrencyStyle::Name)
            .build();
        let format = MonetaryFormats::amount_format_with(query).unwrap();
        let text = format.format(&a);
        prop_assert!(text.contains(a.currency().display_name()));
        prop_assert_eq!(format.parse(&text).unwrap().currency(), a.currency());
    }
}
