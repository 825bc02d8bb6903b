//! Property-based tests for rounding, reduction and conversion.
//!
//! - Rounding is idempotent and bounded by half a unit
//! - Reductions bracket every element
//! - Grouping partitions without loss
//! - Summaries agree with their groups
//! - Conversion multiplies by the quoted factor

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use coinage_shared::types::{CurrencyUnit, MonetaryAmount, MonetaryOperator, Money};

use super::exchange::RateType;
use super::functions::{group_by_currency, group_by_summarizing, max_of, min_of, sum_all};
use super::provider::{ExchangeRateProvider, RateTable, TableRateProvider};
use super::{CurrencyConversion, CurrencyRounding};

/// Strategy to generate numbers from -1,000,000.000000 to 1,000,000.000000.
fn number() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|units| Decimal::new(units, 6))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick any catalog currency.
fn currency() -> impl Strategy<Value = CurrencyUnit> {
    prop::sample::select(CurrencyUnit::all().to_vec())
}

/// Strategy to generate a non-empty list of amounts in one currency.
fn same_currency_amounts() -> impl Strategy<Value = Vec<Money>> {
    (currency(), prop::collection::vec(number(), 1..20)).prop_map(|(unit, numbers)| {
        numbers
            .into_iter()
            .map(|n| Money::new(n, unit))
            .collect()
    })
}

/// Strategy to generate amounts in mixed currencies.
fn mixed_amounts() -> impl Strategy<Value = Vec<Money>> {
    prop::collection::vec((number(), currency()), 0..30)
        .prop_map(|pairs| pairs.into_iter().map(|(n, c)| Money::new(n, c)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Rounding twice equals rounding once.
    #[test]
    fn prop_rounding_is_idempotent(n in number(), unit in currency()) {
        let rounding = CurrencyRounding::for_currency(unit);
        let once = rounding.apply(Money::new(n, unit)).unwrap();
        let twice = rounding.apply(once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// The rounded number stays within half a unit of the last kept digit.
    #[test]
    fn prop_rounding_error_is_bounded(n in number(), unit in currency()) {
        let scale = unit.default_fraction_digits();
        let rounded = CurrencyRounding::for_currency(unit)
            .apply(Money::new(n, unit))
            .unwrap();
        let half_unit = Decimal::new(5, scale + 1);
        prop_assert!((rounded.number_value() - n).abs() <= half_unit);
        prop_assert!(rounded.number_value().scale() <= scale);
    }

    /// min <= every element <= max, and sum matches a plain fold.
    #[test]
    fn prop_reductions_bracket_elements(amounts in same_currency_amounts()) {
        let min = min_of(amounts.clone()).unwrap().unwrap();
        let max = max_of(amounts.clone()).unwrap().unwrap();
        for amount in &amounts {
            prop_assert!(min.number_value() <= amount.number_value());
            prop_assert!(amount.number_value() <= max.number_value());
        }

        let expected: Decimal = amounts.iter().map(Money::number_value).sum();
        let sum = sum_all(amounts).unwrap().unwrap();
        prop_assert_eq!(sum.number_value(), expected);
    }

    /// Grouping keeps every amount exactly once, under its own currency.
    #[test]
    fn prop_grouping_partitions(amounts in mixed_amounts()) {
        let groups = group_by_currency(amounts.clone());
        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, amounts.len());
        for (unit, members) in &groups {
            prop_assert!(!members.is_empty());
            prop_assert!(members.iter().all(|m| m.currency() == *unit));
        }
    }

    /// Per currency: average = sum / count and min <= every element <= max.
    #[test]
    fn prop_summary_matches_group(amounts in mixed_amounts()) {
        let groups = group_by_currency(amounts.clone());
        let summaries = group_by_summarizing(amounts).unwrap();
        prop_assert_eq!(summaries.len(), groups.len());

        for (unit, members) in &groups {
            let summary = &summaries[unit];
            prop_assert_eq!(summary.count(), members.len() as u64);
            prop_assert_eq!(summary.sum(), sum_all(members.clone()).unwrap().unwrap());
            prop_assert_eq!(
                summary.average().unwrap(),
                summary.sum().divide(summary.count()).unwrap()
            );
            let min = summary.min().unwrap().number_value();
            let max = summary.max().unwrap().number_value();
            prop_assert!(members.iter().all(|m| min <= m.number_value() && m.number_value() <= max));
        }
    }

    /// Converting yields the term currency and number * factor.
    #[test]
    fn prop_conversion_multiplies_by_factor(n in number(), rate in positive_rate()) {
        let provider: Arc<dyn ExchangeRateProvider> = Arc::new(TableRateProvider::new(
            "TEST",
            RateTable::new(CurrencyUnit::EUR, [(CurrencyUnit::USD, rate)]),
            RateType::Deferred,
            None,
        ));
        let conversion = CurrencyConversion::new(CurrencyUnit::USD, provider);
        let converted = conversion.apply(Money::new(n, CurrencyUnit::EUR)).unwrap();
        prop_assert_eq!(converted.currency(), CurrencyUnit::USD);
        prop_assert_eq!(converted.number_value(), n * rate);
    }
}
