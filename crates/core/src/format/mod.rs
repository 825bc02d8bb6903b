//! Formatting and parsing of monetary amounts.

pub mod amount_format;
pub mod pattern;
pub mod query;

#[cfg(test)]
mod props;

pub use amount_format::MonetaryAmountFormat;
pub use pattern::DecimalPattern;
pub use query::{AmountFormatQuery, AmountFormatQueryBuilder, CurrencyStyle};

use coinage_shared::MonetaryResult;
use coinage_shared::types::Locale;

/// Access to amount formats.
pub struct MonetaryFormats;

impl MonetaryFormats {
    /// The default format of `locale`: its pattern, currency codes.
    ///
    /// ```
    /// use coinage_core::format::MonetaryFormats;
    /// use coinage_shared::types::{Locale, Money};
    ///
    /// let format = MonetaryFormats::amount_format(Locale::GERMANY).unwrap();
    /// let amount = Money::of(12345.67, "USD").unwrap();
    /// assert_eq!(format.format(&amount), "12.345,67 USD");
    /// ```
    pub fn amount_format(locale: Locale) -> MonetaryResult<MonetaryAmountFormat> {
        MonetaryAmountFormat::new(AmountFormatQuery::of(locale))
    }

    /// The format described by `query`.
    pub fn amount_format_with(query: AmountFormatQuery) -> MonetaryResult<MonetaryAmountFormat> {
        MonetaryAmountFormat::new(query)
    }
}
