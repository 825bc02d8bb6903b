//! Format queries: what locale, currency style and pattern to use.

use serde::{Deserialize, Serialize};

use coinage_shared::types::{CurrencyUnit, Locale};

/// How the currency is rendered in formatted amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// ISO code, e.g. "USD".
    #[default]
    Code,
    /// Symbol as shown in the locale, e.g. "$" or "US$".
    Symbol,
    /// English display name, e.g. "US Dollar".
    Name,
}

impl CurrencyStyle {
    /// Renders `currency` in this style for `locale`.
    #[must_use]
    pub fn render(self, currency: CurrencyUnit, locale: Locale) -> &'static str {
        match self {
            Self::Code => currency.code(),
            Self::Symbol => currency.symbol(locale),
            Self::Name => currency.display_name(),
        }
    }
}

/// Describes the format wanted from [`super::MonetaryFormats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormatQuery {
    locale: Locale,
    currency_style: CurrencyStyle,
    pattern: Option<String>,
    default_currency: Option<CurrencyUnit>,
}

impl AmountFormatQuery {
    /// Query for `locale` with its default pattern and [`CurrencyStyle::Code`].
    #[must_use]
    pub const fn of(locale: Locale) -> Self {
        Self {
            locale,
            currency_style: CurrencyStyle::Code,
            pattern: None,
            default_currency: None,
        }
    }

    /// A builder starting from [`AmountFormatQuery::of`].
    #[must_use]
    pub const fn builder(locale: Locale) -> AmountFormatQueryBuilder {
        AmountFormatQueryBuilder {
            query: Self::of(locale),
        }
    }

    /// Locale supplying separators and the default pattern.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// How the currency is rendered.
    #[must_use]
    pub const fn currency_style(&self) -> CurrencyStyle {
        self.currency_style
    }

    /// Custom pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Currency assumed when parsed text names none.
    #[must_use]
    pub const fn default_currency(&self) -> Option<CurrencyUnit> {
        self.default_currency
    }
}

/// Builder for [`AmountFormatQuery`].
#[derive(Debug, Clone)]
pub struct AmountFormatQueryBuilder {
    query: AmountFormatQuery,
}

impl AmountFormatQueryBuilder {
    /// Sets the currency style.
    #[must_use]
    pub fn currency_style(mut self, style: CurrencyStyle) -> Self {
        self.query.currency_style = style;
        self
    }

    /// Replaces the locale's pattern, e.g. `"00,00,00,00.00 ¤"`.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.query.pattern = Some(pattern.into());
        self
    }

    /// Sets the currency assumed when parsed text names none.
    #[must_use]
    pub fn default_currency(mut self, currency: CurrencyUnit) -> Self {
        self.query.default_currency = Some(currency);
        self
    }

    /// Finishes the query.
    #[must_use]
    pub fn build(self) -> AmountFormatQuery {
        self.query
    }
}
