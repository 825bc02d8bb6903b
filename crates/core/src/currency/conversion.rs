//! Currency conversion logic.
//!
//! A [`CurrencyConversion`] is an operator: applying it to an amount looks up
//! the rate from the amount's currency into the target currency and
//! multiplies. The result is exact unless a rounding is attached.

use std::fmt;
use std::sync::Arc;

use coinage_shared::types::{CurrencyUnit, IntoCurrency, MonetaryAmount, MonetaryOperator, Money};
use coinage_shared::{MonetaryError, MonetaryResult};

use super::exchange::ExchangeRate;
use super::provider::ExchangeRateProvider;
use super::rounding::CurrencyRounding;

/// Converts amounts into one target currency.
#[derive(Clone)]
pub struct CurrencyConversion {
    term: CurrencyUnit,
    provider: Arc<dyn ExchangeRateProvider>,
    rounding: Option<CurrencyRounding>,
}

impl CurrencyConversion {
    /// Conversion into `term` with rates from `provider`.
    pub fn new(term: CurrencyUnit, provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self {
            term,
            provider,
            rounding: None,
        }
    }

    /// The same conversion, rounding results to the target currency's digits.
    #[must_use]
    pub fn rounded(self) -> Self {
        let rounding = CurrencyRounding::for_currency(self.term);
        self.with_rounding(rounding)
    }

    /// The same conversion, rounding results with `rounding`.
    #[must_use]
    pub fn with_rounding(mut self, rounding: CurrencyRounding) -> Self {
        self.rounding = Some(rounding);
        self
    }

    /// The target currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyUnit {
        self.term
    }

    /// Name of the provider supplying rates.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        &self.provider.context().name
    }

    /// The rate this conversion would use for `amount`.
    pub fn exchange_rate(&self, amount: &dyn MonetaryAmount) -> MonetaryResult<ExchangeRate> {
        self.provider.exchange_rate(amount.currency(), self.term)
    }
}

impl MonetaryOperator for CurrencyConversion {
    fn apply(&self, amount: Money) -> MonetaryResult<Money> {
        if amount.currency() == self.term {
            return Ok(amount);
        }

        let rate = self.exchange_rate(&amount)?;
        let number = amount
            .number_value()
            .checked_mul(rate.factor)
            .ok_or_else(|| MonetaryError::Arithmetic(format!("{amount} * {rate} overflows")))?;
        let converted = Money::new(number, self.term);

        tracing::debug!(
            from = %amount,
            to = %converted,
            provider = %rate.provider,
            "Converted amount"
        );

        match &self.rounding {
            Some(rounding) => rounding.apply(converted),
            None => Ok(converted),
        }
    }
}

/// Builds conversions straight from a shared provider.
pub trait CurrencyConversionExt {
    /// Conversion into `term` backed by this provider.
    fn currency_conversion(&self, term: impl IntoCurrency) -> MonetaryResult<CurrencyConversion>;
}

impl CurrencyConversionExt for Arc<dyn ExchangeRateProvider> {
    fn currency_conversion(&self, term: impl IntoCurrency) -> MonetaryResult<CurrencyConversion> {
        Ok(CurrencyConversion::new(term.into_currency()?, Arc::clone(self)))
    }
}

impl fmt::Debug for CurrencyConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyConversion")
            .field("term", &self.term)
            .field("provider", &self.provider_name())
            .field("rounding", &self.rounding)
            .finish()
    }
}
