//! Operators, reductions and exchange rates over monetary amounts.

pub mod conversion;
pub mod exchange;
pub mod functions;
pub mod operator;
pub mod provider;
pub mod rates;
pub mod registry;
pub mod rounding;
pub mod summary;

#[cfg(test)]
mod props;

pub use conversion::{CurrencyConversion, CurrencyConversionExt};
pub use exchange::{ExchangeRate, RateType};
pub use operator::{MonetaryOperatorExt, Percent, ten_percent};
pub use provider::{
    CompoundRateProvider, ExchangeRateProvider, HistoricRateProvider, IdentityRateProvider,
    ProviderContext, RateTable, TableRateProvider,
};
pub use rates::ReferenceRates;
pub use registry::{ConversionRegistry, ConversionRegistryBuilder};
pub use rounding::CurrencyRounding;
pub use summary::MonetarySummaryStatistics;
