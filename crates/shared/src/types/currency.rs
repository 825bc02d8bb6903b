//! ISO-4217 currency units.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::locale::Locale;
use crate::error::{MonetaryError, MonetaryResult};

/// Static metadata behind a [`CurrencyUnit`].
#[derive(Debug)]
pub struct CurrencyData {
    code: &'static str,
    numeric_code: u16,
    fraction_digits: u32,
    display_name: &'static str,
    symbol: &'static str,
    local_symbol: &'static str,
}

/// A currency identified by its ISO-4217 code.
///
/// Cheap to copy; equality, hashing and ordering use the code only.
#[derive(Clone, Copy)]
pub struct CurrencyUnit(&'static CurrencyData);

macro_rules! currencies {
    ($($ident:ident => ($code:literal, $numeric:literal, $digits:literal, $name:literal, $symbol:literal, $local:literal)),* $(,)?) => {
        impl CurrencyUnit {
            $(
                #[doc = $name]
                pub const $ident: Self = Self(&CurrencyData {
                    code: $code,
                    numeric_code: $numeric,
                    fraction_digits: $digits,
                    display_name: $name,
                    symbol: $symbol,
                    local_symbol: $local,
                });
            )*
        }

        static CURRENCIES: &[CurrencyUnit] = &[$(CurrencyUnit::$ident),*];
    };
}

// Kept sorted by code.
currencies! {
    AUD => ("AUD", 36, 2, "Australian Dollar", "A$", "$"),
    BRL => ("BRL", 986, 2, "Brazilian Real", "R$", "R$"),
    CAD => ("CAD", 124, 2, "Canadian Dollar", "CA$", "$"),
    CHF => ("CHF", 756, 2, "Swiss Franc", "CHF", "CHF"),
    CNY => ("CNY", 156, 2, "Chinese Yuan", "CN¥", "¥"),
    DKK => ("DKK", 208, 2, "Danish Krone", "DKK", "kr."),
    EUR => ("EUR", 978, 2, "Euro", "€", "€"),
    GBP => ("GBP", 826, 2, "British Pound", "£", "£"),
    IDR => ("IDR", 360, 2, "Indonesian Rupiah", "IDR", "Rp"),
    INR => ("INR", 356, 2, "Indian Rupee", "₹", "₹"),
    JPY => ("JPY", 392, 0, "Japanese Yen", "JP¥", "¥"),
    MXN => ("MXN", 484, 2, "Mexican Peso", "MX$", "$"),
    NOK => ("NOK", 578, 2, "Norwegian Krone", "NOK", "kr"),
    SEK => ("SEK", 752, 2, "Swedish Krona", "SEK", "kr"),
    SGD => ("SGD", 702, 2, "Singapore Dollar", "SGD", "$"),
    USD => ("USD", 840, 2, "US Dollar", "US$", "$"),
}

static BY_CODE: Lazy<HashMap<&'static str, CurrencyUnit>> = Lazy::new(|| {
    tracing::debug!(count = CURRENCIES.len(), "Currency catalog initialized");
    CURRENCIES.iter().map(|unit| (unit.code(), *unit)).collect()
});

impl CurrencyUnit {
    /// Looks up a currency by ISO-4217 code, ignoring case.
    pub fn of(code: &str) -> MonetaryResult<Self> {
        BY_CODE
            .get(code.trim().to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| MonetaryError::UnknownCurrency(code.to_string()))
    }

    /// The currency used in the locale's country.
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::EnUs => Self::USD,
            Locale::EnCa | Locale::FrCa => Self::CAD,
            Locale::EnGb => Self::GBP,
            Locale::DeDe | Locale::FrFr | Locale::ItIt | Locale::EsEs => Self::EUR,
            Locale::DeCh => Self::CHF,
            Locale::JaJp => Self::JPY,
        }
    }

    /// Every known currency, ordered by code.
    #[must_use]
    pub fn all() -> &'static [Self] {
        CURRENCIES
    }

    /// Finds a currency by code, by its symbol as shown in `locale`, or by
    /// English display name, ignoring case.
    pub fn find_by_text(text: &str, locale: Locale) -> Option<Self> {
        let text = text.trim();
        Self::of(text).ok().or_else(|| {
            CURRENCIES.iter().copied().find(|unit| {
                unit.symbol(locale) == text || unit.0.display_name.eq_ignore_ascii_case(text)
            })
        })
    }

    /// ISO-4217 alphabetic code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.0.code
    }

    /// ISO-4217 numeric code.
    #[must_use]
    pub const fn numeric_code(self) -> u16 {
        self.0.numeric_code
    }

    /// Number of minor-unit digits, e.g. 2 for USD and 0 for JPY.
    #[must_use]
    pub const fn default_fraction_digits(self) -> u32 {
        self.0.fraction_digits
    }

    /// English display name, e.g. "US Dollar".
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.0.display_name
    }

    /// Symbol as shown in `locale`: the short form at home, the
    /// unambiguous form elsewhere ("$" in the US, "US$" in Canada).
    #[must_use]
    pub fn symbol(self, locale: Locale) -> &'static str {
        if Self::for_locale(locale) == self {
            self.0.local_symbol
        } else {
            self.0.symbol
        }
    }
}

impl PartialEq for CurrencyUnit {
    fn eq(&self, other: &Self) -> bool {
        self.0.code == other.0.code
    }
}

impl Eq for CurrencyUnit {}

impl Hash for CurrencyUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.code.hash(state);
    }
}

impl PartialOrd for CurrencyUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CurrencyUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.code.cmp(other.0.code)
    }
}

impl fmt::Debug for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyUnit({})", self.0.code)
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.code)
    }
}

impl FromStr for CurrencyUnit {
    type Err = MonetaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl Serialize for CurrencyUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for CurrencyUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::of(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_catalog_sorted_by_code() {
        let codes: Vec<_> = CurrencyUnit::all().iter().map(|c| c.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[rstest]
    #[case("EUR", CurrencyUnit::EUR)]
    #[case("usd", CurrencyUnit::USD)]
    #[case(" jpy ", CurrencyUnit::JPY)]
    fn test_currency_of(#[case] code: &str, #[case] expected: CurrencyUnit) {
        assert_eq!(CurrencyUnit::of(code).unwrap(), expected);
    }

    #[test]
    fn test_unknown_currency() {
        assert_eq!(
            CurrencyUnit::of("XXX").unwrap_err(),
            MonetaryError::UnknownCurrency("XXX".into())
        );
        assert!(CurrencyUnit::of("").is_err());
    }

    #[rstest]
    #[case("EUR", Locale::GERMANY)]
    #[case("EUR", Locale::FRANCE)]
    #[case("USD", Locale::US)]
    #[case("JPY", Locale::JAPAN)]
    #[case("CAD", Locale::CANADA)]
    #[case("CAD", Locale::CANADA_FRENCH)]
    fn test_code_and_locale_agree(#[case] code: &str, #[case] locale: Locale) {
        assert_eq!(CurrencyUnit::of(code).unwrap(), CurrencyUnit::for_locale(locale));
    }

    #[test]
    fn test_locale_currency_codes_match_catalog() {
        for locale in Locale::ALL {
            assert_eq!(
                CurrencyUnit::for_locale(locale).code(),
                locale.currency_code()
            );
        }
    }

    #[test]
    fn test_metadata() {
        let usd = CurrencyUnit::USD;
        assert_eq!(usd.to_string(), "USD");
        assert_eq!(usd.numeric_code(), 840);
        assert_eq!(usd.default_fraction_digits(), 2);
        assert_eq!(usd.display_name(), "US Dollar");
        assert_eq!(CurrencyUnit::JPY.default_fraction_digits(), 0);
    }

    #[test]
    fn test_symbol_depends_on_locale() {
        assert_eq!(CurrencyUnit::USD.symbol(Locale::US), "$");
        assert_eq!(CurrencyUnit::USD.symbol(Locale::CANADA), "US$");
        assert_eq!(CurrencyUnit::EUR.symbol(Locale::US), "€");
    }

    #[test]
    fn test_find_by_text() {
        let us = Locale::US;
        assert_eq!(CurrencyUnit::find_by_text("US Dollar", us), Some(CurrencyUnit::USD));
        assert_eq!(CurrencyUnit::find_by_text("euro", us), Some(CurrencyUnit::EUR));
        assert_eq!(CurrencyUnit::find_by_text("€", Locale::GERMANY), Some(CurrencyUnit::EUR));
        assert_eq!(CurrencyUnit::find_by_text("$", us), Some(CurrencyUnit::USD));
        assert_eq!(CurrencyUnit::find_by_text("$", Locale::CANADA), Some(CurrencyUnit::CAD));
        assert_eq!(CurrencyUnit::find_by_text("cad", us), Some(CurrencyUnit::CAD));
        assert_eq!(CurrencyUnit::find_by_text("doubloon", us), None);
    }

    #[test]
    fn test_ordering_by_code() {
        assert!(CurrencyUnit::EUR < CurrencyUnit::JPY);
        assert!(CurrencyUnit::JPY < CurrencyUnit::USD);
    }
}
