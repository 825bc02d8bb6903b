//! Reference rate data.
//!
//! Rates ship with the crate as JSON and can be replaced by a file of the
//! same shape:
//!
//! ```json
//! { "ECB": { "anchor": "EUR", "rate_type": "deferred",
//!            "snapshots": [ { "date": "2014-11-28", "rates": { "USD": "1.2537" } } ] } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use coinage_shared::types::CurrencyUnit;
use coinage_shared::{MonetaryError, MonetaryResult};

use super::exchange::RateType;
use super::provider::{ExchangeRateProvider, HistoricRateProvider, RateTable, TableRateProvider};

const BUNDLED: &str = include_str!("../../data/reference_rates.json");

/// Rates published on one date.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSnapshot {
    /// Publication date.
    pub date: NaiveDate,
    /// `1 anchor = rate currency` entries.
    pub rates: BTreeMap<CurrencyUnit, Decimal>,
}

/// Everything one provider publishes.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderRates {
    /// Currency all rates are quoted against.
    pub anchor: CurrencyUnit,
    /// [`RateType::Historic`] keeps every snapshot; anything else serves the latest.
    pub rate_type: RateType,
    /// Snapshots in any order.
    pub snapshots: Vec<RateSnapshot>,
}

impl ProviderRates {
    fn table(&self, snapshot: &RateSnapshot) -> RateTable {
        RateTable::new(
            self.anchor,
            snapshot.rates.iter().map(|(currency, rate)| (*currency, *rate)),
        )
    }

    /// Builds the provider serving these rates under `name`.
    pub fn build_provider(&self, name: &str) -> MonetaryResult<Arc<dyn ExchangeRateProvider>> {
        if self.rate_type == RateType::Historic {
            let history = self
                .snapshots
                .iter()
                .map(|snapshot| (snapshot.date, self.table(snapshot)))
                .collect();
            return Ok(Arc::new(HistoricRateProvider::new(name, history)));
        }

        let latest = self
            .snapshots
            .iter()
            .max_by_key(|snapshot| snapshot.date)
            .ok_or_else(|| MonetaryError::Validation(format!("provider {name} has no rates")))?;
        Ok(Arc::new(TableRateProvider::new(
            name,
            self.table(latest),
            self.rate_type,
            Some(latest.date),
        )))
    }
}

/// Reference rates of every provider, keyed by provider name.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ReferenceRates(BTreeMap<String, ProviderRates>);

impl ReferenceRates {
    /// The rates bundled with the crate.
    pub fn bundled() -> MonetaryResult<Self> {
        Self::from_json(BUNDLED)
    }

    /// Parses rates from JSON text.
    pub fn from_json(json: &str) -> MonetaryResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| MonetaryError::Config(format!("invalid reference rates: {e}")))
    }

    /// Reads rates from a JSON file.
    pub fn from_file(path: &Path) -> MonetaryResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            MonetaryError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        tracing::info!(path = %path.display(), "Loaded reference rates");
        Self::from_json(&json)
    }

    /// Provider names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Rates of one provider.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProviderRates> {
        self.0.get(name)
    }

    /// One provider per entry, sorted by name.
    pub fn providers(&self) -> MonetaryResult<Vec<Arc<dyn ExchangeRateProvider>>> {
        self.0
            .iter()
            .map(|(name, rates)| rates.build_provider(name))
            .collect()
    }
}
