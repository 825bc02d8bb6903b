//! Supported locales and their number conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MonetaryError;

/// A language and country pair with the conventions needed to format money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    /// English (United States)
    #[serde(rename = "en-US")]
    EnUs,
    /// English (Canada)
    #[serde(rename = "en-CA")]
    EnCa,
    /// French (Canada)
    #[serde(rename = "fr-CA")]
    FrCa,
    /// English (United Kingdom)
    #[serde(rename = "en-GB")]
    EnGb,
    /// German (Germany)
    #[serde(rename = "de-DE")]
    DeDe,
    /// German (Switzerland)
    #[serde(rename = "de-CH")]
    DeCh,
    /// French (France)
    #[serde(rename = "fr-FR")]
    FrFr,
    /// Japanese (Japan)
    #[serde(rename = "ja-JP")]
    JaJp,
    /// Italian (Italy)
    #[serde(rename = "it-IT")]
    ItIt,
    /// Spanish (Spain)
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Locale {
    /// United States.
    pub const US: Self = Self::EnUs;
    /// Canada, English.
    pub const CANADA: Self = Self::EnCa;
    /// Canada, French.
    pub const CANADA_FRENCH: Self = Self::FrCa;
    /// United Kingdom.
    pub const UK: Self = Self::EnGb;
    /// Germany.
    pub const GERMANY: Self = Self::DeDe;
    /// France.
    pub const FRANCE: Self = Self::FrFr;
    /// Japan.
    pub const JAPAN: Self = Self::JaJp;
    /// Italy.
    pub const ITALY: Self = Self::ItIt;

    /// All supported locales.
    pub const ALL: [Self; 10] = [
        Self::EnUs,
        Self::EnCa,
        Self::FrCa,
        Self::EnGb,
        Self::DeDe,
        Self::DeCh,
        Self::FrFr,
        Self::JaJp,
        Self::ItIt,
        Self::EsEs,
    ];

    /// The BCP-47 tag, e.g. `de-DE`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnCa => "en-CA",
            Self::FrCa => "fr-CA",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
            Self::DeCh => "de-CH",
            Self::FrFr => "fr-FR",
            Self::JaJp => "ja-JP",
            Self::ItIt => "it-IT",
            Self::EsEs => "es-ES",
        }
    }

    /// ISO-3166 country code.
    #[must_use]
    pub fn country(self) -> &'static str {
        &self.tag()[3..]
    }

    /// ISO-639 language code.
    #[must_use]
    pub fn language(self) -> &'static str {
        &self.tag()[..2]
    }

    /// ISO-4217 code of the country's currency.
    #[must_use]
    pub const fn currency_code(self) -> &'static str {
        match self {
            Self::EnUs => "USD",
            Self::EnCa | Self::FrCa => "CAD",
            Self::EnGb => "GBP",
            Self::DeDe | Self::FrFr | Self::ItIt | Self::EsEs => "EUR",
            Self::DeCh => "CHF",
            Self::JaJp => "JPY",
        }
    }

    /// Character separating integer and fraction digits.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnCa | Self::EnGb | Self::DeCh | Self::JaJp => '.',
            Self::FrCa | Self::DeDe | Self::FrFr | Self::ItIt | Self::EsEs => ',',
        }
    }

    /// Character separating digit groups.
    #[must_use]
    pub const fn grouping_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnCa | Self::EnGb | Self::JaJp => ',',
            Self::DeDe | Self::ItIt | Self::EsEs => '.',
            Self::FrCa | Self::FrFr => '\u{a0}',
            Self::DeCh => '\'',
        }
    }

    /// Default currency pattern; `¤` marks the currency.
    #[must_use]
    pub const fn currency_pattern(self) -> &'static str {
        match self {
            Self::EnUs | Self::EnCa | Self::EnGb | Self::JaJp => "¤#,##0.00",
            Self::DeCh => "¤ #,##0.00",
            Self::FrCa | Self::DeDe | Self::FrFr | Self::ItIt | Self::EsEs => "#,##0.00 ¤",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = MonetaryError;

    /// Accepts `de-DE`, `de_DE`, and any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| MonetaryError::UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("de-DE", Locale::GERMANY)]
    #[case("de_DE", Locale::GERMANY)]
    #[case("EN-ca", Locale::CANADA)]
    #[case(" ja_jp ", Locale::JAPAN)]
    fn test_locale_from_str(#[case] tag: &str, #[case] expected: Locale) {
        assert_eq!(tag.parse::<Locale>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_locale() {
        let err = "xx-YY".parse::<Locale>().unwrap_err();
        assert_eq!(err, MonetaryError::UnknownLocale("xx-YY".into()));
    }

    #[test]
    fn test_country_and_language() {
        assert_eq!(Locale::GERMANY.country(), "DE");
        assert_eq!(Locale::GERMANY.language(), "de");
        assert_eq!(Locale::CANADA_FRENCH.country(), "CA");
        assert_eq!(Locale::CANADA_FRENCH.language(), "fr");
    }

    #[test]
    fn test_separators_differ_between_germany_and_canada() {
        assert_eq!(Locale::GERMANY.decimal_separator(), ',');
        assert_eq!(Locale::GERMANY.grouping_separator(), '.');
        assert_eq!(Locale::CANADA.decimal_separator(), '.');
        assert_eq!(Locale::CANADA.grouping_separator(), ',');
    }

    #[test]
    fn test_every_pattern_has_currency_placeholder() {
        for locale in Locale::ALL {
            assert!(locale.currency_pattern().contains('¤'), "{locale}");
        }
    }
}
