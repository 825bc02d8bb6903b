//! Exchange rate types and logic.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use coinage_shared::types::{CurrencyUnit, NumberValue};
use coinage_shared::{MonetaryError, MonetaryResult};

/// How current a rate is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    /// Base and term are the same currency.
    Identity,
    /// Live market rate.
    Realtime,
    /// Published with a delay, e.g. daily reference rates.
    Deferred,
    /// Rate for a past date.
    Historic,
}

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency.
    pub base: CurrencyUnit,
    /// Target currency.
    pub term: CurrencyUnit,
    /// Exchange rate (1 base = factor term).
    pub factor: Decimal,
    /// Name of the provider that supplied the rate.
    pub provider: String,
    /// How current the rate is.
    pub rate_type: RateType,
    /// Date this rate is effective, when known.
    pub effective_date: Option<NaiveDate>,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(
        base: CurrencyUnit,
        term: CurrencyUnit,
        factor: Decimal,
        provider: impl Into<String>,
        rate_type: RateType,
        effective_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            base,
            term,
            factor,
            provider: provider.into(),
            rate_type,
            effective_date,
        }
    }

    /// The base currency.
    #[must_use]
    pub const fn base_currency(&self) -> CurrencyUnit {
        self.base
    }

    /// The term (target) currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyUnit {
        self.term
    }

    /// The conversion factor.
    #[must_use]
    pub const fn factor(&self) -> NumberValue {
        NumberValue::new(self.factor)
    }

    /// Returns the inverse rate.
    pub fn inverse(&self) -> MonetaryResult<Self> {
        let factor = Decimal::ONE
            .checked_div(self.factor)
            .ok_or_else(|| MonetaryError::Arithmetic(format!("rate {self} has no inverse")))?;
        Ok(Self {
            base: self.term,
            term: self.base,
            factor,
            provider: self.provider.clone(),
            rate_type: self.rate_type,
            effective_date: self.effective_date,
        })
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} [{}]",
            self.base, self.term, self.factor, self.provider
        )
    }
}
