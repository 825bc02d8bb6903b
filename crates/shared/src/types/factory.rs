//! Family-neutral amount construction.

use std::marker::PhantomData;

use rust_decimal::Decimal;

use super::amount::{AmountNumber, IntoCurrency, MonetaryAmount};
use super::currency::CurrencyUnit;
use super::money::Money;
use crate::error::{MonetaryError, MonetaryResult};

/// Builder for amounts of family `T`.
///
/// Conversion errors from the setters are held back and reported by
/// [`AmountFactory::create`].
///
/// ```
/// use coinage_shared::types::default_amount_factory;
///
/// let amount = default_amount_factory()
///     .set_number(123.45)
///     .set_currency("USD")
///     .create()
///     .unwrap();
/// assert_eq!(amount.to_string(), "USD 123.45");
/// ```
#[derive(Debug)]
pub struct AmountFactory<T> {
    number: Option<MonetaryResult<Decimal>>,
    currency: Option<MonetaryResult<CurrencyUnit>>,
    family: PhantomData<T>,
}

/// A factory producing the default family, [`Money`].
#[must_use]
pub fn default_amount_factory() -> AmountFactory<Money> {
    AmountFactory::new()
}

impl<T: MonetaryAmount> AmountFactory<T> {
    /// Creates an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            number: None,
            currency: None,
            family: PhantomData,
        }
    }

    /// Sets the number.
    #[must_use]
    pub fn set_number(mut self, number: impl AmountNumber) -> Self {
        self.number = Some(number.to_decimal());
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn set_currency(mut self, currency: impl IntoCurrency) -> Self {
        self.currency = Some(currency.into_currency());
        self
    }

    /// Builds the amount.
    pub fn create(self) -> MonetaryResult<T> {
        let number = self
            .number
            .ok_or_else(|| MonetaryError::Validation("number not set".into()))??;
        let currency = self
            .currency
            .ok_or_else(|| MonetaryError::Validation("currency not set".into()))??;
        T::from_parts(number, currency)
    }
}

impl<T: MonetaryAmount> Default for AmountFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}
