//! Named exchange rate providers and the default chain.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use coinage_shared::config::ConversionConfig;
use coinage_shared::types::IntoCurrency;
use coinage_shared::{MonetaryError, MonetaryResult};

use super::conversion::CurrencyConversion;
use super::provider::{CompoundRateProvider, ExchangeRateProvider, IdentityRateProvider};
use super::rates::ReferenceRates;

/// Default chain when none is configured.
pub const DEFAULT_CHAIN: [&str; 4] = ["IDENT", "ECB", "IMF", "ECB-HIST"];

const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Registered providers plus the compound provider built over a chain of them.
#[derive(Clone)]
pub struct ConversionRegistry {
    providers: HashMap<String, Arc<dyn ExchangeRateProvider>>,
    chain: Vec<String>,
    default_provider: Arc<CompoundRateProvider>,
}

/// Builder for [`ConversionRegistry`].
pub struct ConversionRegistryBuilder {
    providers: HashMap<String, Arc<dyn ExchangeRateProvider>>,
    chain: Vec<String>,
    cache_capacity: u64,
}

impl ConversionRegistryBuilder {
    /// Registers a provider under its context name, replacing any earlier one.
    #[must_use]
    pub fn register(mut self, provider: Arc<dyn ExchangeRateProvider>) -> Self {
        let name = provider.context().name.clone();
        self.providers.insert(name, provider);
        self
    }

    /// Registers several providers.
    #[must_use]
    pub fn register_all(
        self,
        providers: impl IntoIterator<Item = Arc<dyn ExchangeRateProvider>>,
    ) -> Self {
        providers.into_iter().fold(self, Self::register)
    }

    /// Sets the names the default provider consults, in order.
    #[must_use]
    pub fn provider_chain<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.chain = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets how many rates the default provider caches.
    #[must_use]
    pub fn cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`MonetaryError::UnknownProvider`] if the chain names a
    /// provider that was never registered.
    pub fn build(self) -> MonetaryResult<ConversionRegistry> {
        let chained = self
            .chain
            .iter()
            .map(|name| {
                self.providers
                    .get(name)
                    .cloned()
                    .ok_or_else(|| MonetaryError::UnknownProvider(name.clone()))
            })
            .collect::<MonetaryResult<Vec<_>>>()?;

        tracing::debug!(
            chain = ?self.chain,
            registered = self.providers.len(),
            "Built conversion registry"
        );

        Ok(ConversionRegistry {
            default_provider: Arc::new(CompoundRateProvider::new(chained, self.cache_capacity)),
            providers: self.providers,
            chain: self.chain,
        })
    }
}

impl ConversionRegistry {
    /// An empty builder; the chain defaults to [`DEFAULT_CHAIN`].
    #[must_use]
    pub fn builder() -> ConversionRegistryBuilder {
        ConversionRegistryBuilder {
            providers: HashMap::new(),
            chain: DEFAULT_CHAIN.iter().map(ToString::to_string).collect(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// The identity provider plus the bundled reference rates, default chain.
    pub fn bundled() -> MonetaryResult<Self> {
        Self::from_config(&ConversionConfig::default())
    }

    /// Registry built from configuration: rates from `rates_file` or the
    /// bundled data, chain and cache size as configured.
    pub fn from_config(config: &ConversionConfig) -> MonetaryResult<Self> {
        let rates = match &config.rates_file {
            Some(path) => ReferenceRates::from_file(path)?,
            None => ReferenceRates::bundled()?,
        };
        Self::builder()
            .register(Arc::new(IdentityRateProvider::new()))
            .register_all(rates.providers()?)
            .provider_chain(config.provider_chain.iter().cloned())
            .cache_capacity(config.cache_capacity)
            .build()
    }

    /// The provider registered under `name`.
    pub fn provider(&self, name: &str) -> MonetaryResult<Arc<dyn ExchangeRateProvider>> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| MonetaryError::UnknownProvider(name.to_string()))
    }

    /// The compound provider over the default chain.
    #[must_use]
    pub fn default_provider(&self) -> Arc<dyn ExchangeRateProvider> {
        self.default_provider.clone()
    }

    /// Names of the default chain, in order.
    #[must_use]
    pub fn default_provider_chain(&self) -> &[String] {
        &self.chain
    }

    /// Every registered provider name, sorted.
    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Conversion into `term` using the default chain.
    pub fn conversion(&self, term: impl IntoCurrency) -> MonetaryResult<CurrencyConversion> {
        Ok(CurrencyConversion::new(
            term.into_currency()?,
            self.default_provider(),
        ))
    }

    /// Conversion into `term` using only the provider named `provider`.
    pub fn conversion_with(
        &self,
        term: impl IntoCurrency,
        provider: &str,
    ) -> MonetaryResult<CurrencyConversion> {
        Ok(CurrencyConversion::new(
            term.into_currency()?,
            self.provider(provider)?,
        ))
    }
}

impl fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRegistry")
            .field("providers", &self.provider_names())
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}
