//! Property-based tests for amount arithmetic.
//!
//! - Same-currency arithmetic laws
//! - Cross-currency operations always fail

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{CurrencyUnit, MonetaryAmount, Money};

/// Strategy to generate amounts from -1,000,000.00000 to 1,000,000.00000.
fn amount_number() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|units| Decimal::new(units, 5))
}

/// Strategy to pick any catalog currency.
fn currency() -> impl Strategy<Value = CurrencyUnit> {
    prop::sample::select(CurrencyUnit::all().to_vec())
}

/// Strategy to pick two different currencies.
fn distinct_currencies() -> impl Strategy<Value = (CurrencyUnit, CurrencyUnit)> {
    (currency(), currency()).prop_filter("currencies must differ", |(a, b)| a != b)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding then subtracting the same amount is the identity.
    #[test]
    fn prop_add_then_subtract_is_identity(
        a in amount_number(),
        b in amount_number(),
        unit in currency(),
    ) {
        let a = Money::new(a, unit);
        let b = Money::new(b, unit);
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        prop_assert_eq!(back, a);
    }

    /// Multiplying by one keeps the amount, by zero keeps only the currency.
    #[test]
    fn prop_multiply_identity_and_zero(a in amount_number(), unit in currency()) {
        let a = Money::new(a, unit);
        prop_assert_eq!(a.multiply(1).unwrap(), a);
        let zero = a.multiply(0).unwrap();
        prop_assert!(zero.is_zero());
        prop_assert_eq!(zero.currency(), unit);
    }

    /// Sign predicates agree with the decimal's sign.
    #[test]
    fn prop_sign_predicates(a in amount_number(), unit in currency()) {
        let money = Money::new(a, unit);
        prop_assert_eq!(money.is_positive(), a > Decimal::ZERO);
        prop_assert_eq!(money.is_negative(), a < Decimal::ZERO);
        prop_assert_eq!(money.is_zero(), a.is_zero());
    }

    /// Binary operations across currencies fail naming both codes.
    #[test]
    fn prop_cross_currency_fails(
        a in amount_number(),
        b in amount_number(),
        (first, second) in distinct_currencies(),
    ) {
        let a = Money::new(a, first);
        let b = Money::new(b, second);
        for err in [a.add(&b).unwrap_err(), a.subtract(&b).unwrap_err()] {
            let message = err.to_string();
            prop_assert!(err.is_domain());
            prop_assert!(message.contains("Currency mismatch"));
            prop_assert!(message.contains(first.code()));
            prop_assert!(message.contains(second.code()));
        }
    }
}
