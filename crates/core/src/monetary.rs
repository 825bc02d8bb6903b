//! Single entry point for currency lookup, factories and roundings.

use coinage_shared::MonetaryResult;
use coinage_shared::types::{
    AmountFactory, CurrencyUnit, Locale, MonetaryAmount, Money, default_amount_factory,
};

use crate::currency::CurrencyRounding;

/// Static access to currencies, amount factories and roundings.
///
/// # Example
///
/// ```
/// use coinage_core::Monetary;
/// use coinage_shared::types::Locale;
///
/// let euro = Monetary::currency("EUR").unwrap();
/// assert_eq!(Monetary::currency_for_locale(Locale::GERMANY), euro);
/// ```
pub struct Monetary;

impl Monetary {
    /// The currency with ISO code `code`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` for codes missing from the catalog.
    pub fn currency(code: &str) -> MonetaryResult<CurrencyUnit> {
        CurrencyUnit::of(code)
    }

    /// The default currency of `locale`.
    #[must_use]
    pub fn currency_for_locale(locale: Locale) -> CurrencyUnit {
        CurrencyUnit::for_locale(locale)
    }

    /// Every known currency, ordered by code.
    #[must_use]
    pub fn currencies() -> &'static [CurrencyUnit] {
        CurrencyUnit::all()
    }

    /// A factory for the default family, [`Money`].
    #[must_use]
    pub fn default_amount_factory() -> AmountFactory<Money> {
        default_amount_factory()
    }

    /// A factory for family `T`.
    #[must_use]
    pub fn amount_factory<T: MonetaryAmount>() -> AmountFactory<T> {
        AmountFactory::new()
    }

    /// Rounding to `currency`'s default fraction digits.
    #[must_use]
    pub const fn rounding(currency: CurrencyUnit) -> CurrencyRounding {
        CurrencyRounding::for_currency(currency)
    }

    /// Rounding that uses each amount's own currency digits.
    #[must_use]
    pub const fn default_rounding() -> CurrencyRounding {
        CurrencyRounding::per_currency()
    }
}
