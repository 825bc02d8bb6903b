//! Exchange rate providers.
//!
//! A provider answers "how many `term` for one `base`". The default provider
//! is a [`CompoundRateProvider`] that asks a chain of named providers in
//! order and returns the first rate found.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::sync::Cache;
use rust_decimal::Decimal;

use coinage_shared::types::CurrencyUnit;
use coinage_shared::{MonetaryError, MonetaryResult};

use super::exchange::{ExchangeRate, RateType};

/// Name and capabilities of a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderContext {
    /// Provider name, e.g. "ECB".
    pub name: String,
    /// Kinds of rates the provider can return.
    pub rate_types: Vec<RateType>,
}

impl ProviderContext {
    /// Creates a context.
    pub fn new(name: impl Into<String>, rate_types: impl IntoIterator<Item = RateType>) -> Self {
        Self {
            name: name.into(),
            rate_types: rate_types.into_iter().collect(),
        }
    }
}

/// A named source of exchange rates.
pub trait ExchangeRateProvider: Send + Sync {
    /// Name and capabilities.
    fn context(&self) -> &ProviderContext;

    /// The rate converting `base` into `term`.
    ///
    /// Fails with [`MonetaryError::RateNotAvailable`] when the provider has
    /// no data for the pair.
    fn exchange_rate(&self, base: CurrencyUnit, term: CurrencyUnit) -> MonetaryResult<ExchangeRate>;

    /// Like [`Self::exchange_rate`] with ISO codes.
    fn exchange_rate_by_code(&self, base: &str, term: &str) -> MonetaryResult<ExchangeRate> {
        self.exchange_rate(CurrencyUnit::of(base)?, CurrencyUnit::of(term)?)
    }

    /// Returns true if a rate for the pair can be supplied.
    fn is_available(&self, base: CurrencyUnit, term: CurrencyUnit) -> bool {
        self.exchange_rate(base, term).is_ok()
    }
}

fn not_available(base: CurrencyUnit, term: CurrencyUnit) -> MonetaryError {
    MonetaryError::RateNotAvailable {
        base: base.code().to_string(),
        term: term.code().to_string(),
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Supplies a factor of one when base and term are the same currency.
#[derive(Debug, Clone)]
pub struct IdentityRateProvider {
    context: ProviderContext,
}

impl IdentityRateProvider {
    /// Provider name.
    pub const NAME: &'static str = "IDENT";

    /// Creates the provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            context: ProviderContext::new(Self::NAME, [RateType::Identity]),
        }
    }
}

impl Default for IdentityRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeRateProvider for IdentityRateProvider {
    fn context(&self) -> &ProviderContext {
        &self.context
    }

    fn exchange_rate(&self, base: CurrencyUnit, term: CurrencyUnit) -> MonetaryResult<ExchangeRate> {
        if base != term {
            return Err(not_available(base, term));
        }
        Ok(ExchangeRate::new(
            base,
            term,
            Decimal::ONE,
            Self::NAME,
            RateType::Identity,
            None,
        ))
    }
}

// ============================================================================
// Reference-rate tables
// ============================================================================

/// Rates quoted against one anchor currency, e.g. ECB rates against EUR.
///
/// Pairs not involving the anchor are crossed through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    anchor: CurrencyUnit,
    rates: HashMap<CurrencyUnit, Decimal>,
}

impl RateTable {
    /// Creates a table of `1 anchor = rate currency` entries.
    pub fn new(
        anchor: CurrencyUnit,
        rates: impl IntoIterator<Item = (CurrencyUnit, Decimal)>,
    ) -> Self {
        Self {
            anchor,
            rates: rates.into_iter().collect(),
        }
    }

    /// The currency all rates are quoted against.
    #[must_use]
    pub const fn anchor(&self) -> CurrencyUnit {
        self.anchor
    }

    fn quote(&self, currency: CurrencyUnit) -> Option<Decimal> {
        if currency == self.anchor {
            Some(Decimal::ONE)
        } else {
            self.rates.get(&currency).copied().filter(|rate| !rate.is_zero())
        }
    }

    /// Factor converting `base` into `term`.
    #[must_use]
    pub fn factor(&self, base: CurrencyUnit, term: CurrencyUnit) -> Option<Decimal> {
        let base_quote = self.quote(base)?;
        let term_quote = self.quote(term)?;
        if base == self.anchor {
            Some(term_quote)
        } else {
            term_quote.checked_div(base_quote)
        }
    }
}

/// A named provider backed by a single [`RateTable`].
#[derive(Debug, Clone)]
pub struct TableRateProvider {
    context: ProviderContext,
    table: RateTable,
    rate_type: RateType,
    effective_date: Option<NaiveDate>,
}

impl TableRateProvider {
    /// Creates a provider serving `table` under `name`.
    pub fn new(
        name: impl Into<String>,
        table: RateTable,
        rate_type: RateType,
        effective_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            context: ProviderContext::new(name, [rate_type]),
            table,
            rate_type,
            effective_date,
        }
    }
}

impl ExchangeRateProvider for TableRateProvider {
    fn context(&self) -> &ProviderContext {
        &self.context
    }

    fn exchange_rate(&self, base: CurrencyUnit, term: CurrencyUnit) -> MonetaryResult<ExchangeRate> {
        let factor = self
            .table
            .factor(base, term)
            .ok_or_else(|| not_available(base, term))?;
        Ok(ExchangeRate::new(
            base,
            term,
            factor,
            self.context.name.clone(),
            self.rate_type,
            self.effective_date,
        ))
    }
}

/// A named provider holding one [`RateTable`] per date.
///
/// [`ExchangeRateProvider::exchange_rate`] answers from the latest date;
/// [`HistoricRateProvider::exchange_rate_on`] from the latest date on or
/// before the one asked for.
#[derive(Debug, Clone)]
pub struct HistoricRateProvider {
    context: ProviderContext,
    history: BTreeMap<NaiveDate, RateTable>,
}

impl HistoricRateProvider {
    /// Creates a provider serving `history` under `name`.
    pub fn new(name: impl Into<String>, history: BTreeMap<NaiveDate, RateTable>) -> Self {
        Self {
            context: ProviderContext::new(name, [RateType::Historic]),
            history,
        }
    }

    /// Dates with data, oldest first.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.history.keys().copied()
    }

    /// The rate in effect on `date`.
    pub fn exchange_rate_on(
        &self,
        base: CurrencyUnit,
        term: CurrencyUnit,
        date: NaiveDate,
    ) -> MonetaryResult<ExchangeRate> {
        let (effective, table) = self
            .history
            .range(..=date)
            .next_back()
            .ok_or_else(|| not_available(base, term))?;
        self.rate_from(base, term, *effective, table)
    }

    fn rate_from(
        &self,
        base: CurrencyUnit,
        term: CurrencyUnit,
        effective: NaiveDate,
        table: &RateTable,
    ) -> MonetaryResult<ExchangeRate> {
        let factor = table
            .factor(base, term)
            .ok_or_else(|| not_available(base, term))?;
        Ok(ExchangeRate::new(
            base,
            term,
            factor,
            self.context.name.clone(),
            RateType::Historic,
            Some(effective),
        ))
    }
}

impl ExchangeRateProvider for HistoricRateProvider {
    fn context(&self) -> &ProviderContext {
        &self.context
    }

    fn exchange_rate(&self, base: CurrencyUnit, term: CurrencyUnit) -> MonetaryResult<ExchangeRate> {
        let (effective, table) = self
            .history
            .iter()
            .next_back()
            .ok_or_else(|| not_available(base, term))?;
        self.rate_from(base, term, *effective, table)
    }
}

// ============================================================================
// Compound
// ============================================================================

/// Time-to-live for cached rates (one hour).
const CACHE_TTL_SECS: u64 = 3600;

/// Asks each provider of a chain in order; the first rate found wins.
///
/// Rates found are cached per pair for an hour.
pub struct CompoundRateProvider {
    context: ProviderContext,
    providers: Vec<Arc<dyn ExchangeRateProvider>>,
    cache: Cache<(CurrencyUnit, CurrencyUnit), ExchangeRate>,
}

impl CompoundRateProvider {
    /// Provider name.
    pub const NAME: &'static str = "default";

    /// Creates a chain over `providers`, caching up to `cache_capacity` rates.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn ExchangeRateProvider>>, cache_capacity: u64) -> Self {
        let mut rate_types: Vec<RateType> = Vec::new();
        for provider in &providers {
            for rate_type in &provider.context().rate_types {
                if !rate_types.contains(rate_type) {
                    rate_types.push(*rate_type);
                }
            }
        }
        Self {
            context: ProviderContext::new(Self::NAME, rate_types),
            providers,
            cache: Cache::builder()
                .max_capacity(cache_capacity)
                .time_to_live(Duration::from_secs(CACHE_TTL_SECS))
                .build(),
        }
    }

    /// Names of the chained providers, in order.
    pub fn provider_names(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|provider| provider.context().name.clone())
            .collect()
    }

    /// Drops every cached rate.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl ExchangeRateProvider for CompoundRateProvider {
    fn context(&self) -> &ProviderContext {
        &self.context
    }

    fn exchange_rate(&self, base: CurrencyUnit, term: CurrencyUnit) -> MonetaryResult<ExchangeRate> {
        if let Some(cached) = self.cache.get(&(base, term)) {
            return Ok(cached);
        }

        for provider in &self.providers {
            match provider.exchange_rate(base, term) {
                Ok(rate) => {
                    tracing::debug!(
                        base = %base,
                        term = %term,
                        provider = %rate.provider,
                        factor = %rate.factor,
                        "Exchange rate resolved"
                    );
                    self.cache.insert((base, term), rate.clone());
                    return Ok(rate);
                }
                Err(MonetaryError::RateNotAvailable { .. }) => {}
                Err(err) => return Err(err),
            }
        }

        tracing::warn!(base = %base, term = %term, "No provider in chain has a rate");
        Err(not_available(base, term))
    }
}
