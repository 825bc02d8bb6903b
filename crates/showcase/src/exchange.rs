//! Exchange rate lookup and currency conversion.

use std::io::Write;

use coinage_core::currency::{ConversionRegistry, CurrencyConversionExt};
use coinage_shared::types::Money;

use crate::render;

/// Prints the default chain, the EUR/USD rate and ten euros in dollars,
/// once through the default chain and once through ECB alone.
pub fn run(out: &mut impl Write, registry: &ConversionRegistry) -> anyhow::Result<()> {
    let exchange_rate_provider = registry.default_provider();
    let ecb_exchange_rate_provider = registry.provider("ECB")?;

    let default_provider_chain = registry.default_provider_chain();

    let rate = exchange_rate_provider.exchange_rate_by_code("EUR", "USD")?;
    let factor = rate.factor();
    let base_currency = rate.base_currency();
    let target_currency = rate.currency();

    let dollar_conversion = registry.conversion("USD")?;
    let ecb_dollar_conversion = ecb_exchange_rate_provider.currency_conversion("USD")?;

    let ten_euro = Money::of(10, "EUR")?;
    let in_dollar = ten_euro.with(&dollar_conversion)?;
    let in_dollar_ecb = ten_euro.with(&ecb_dollar_conversion)?;

    writeln!(
        out,
        "default_provider_chain = {}",
        render::list(default_provider_chain)
    )?;
    writeln!(out, "provider = {}", rate.provider)?;
    writeln!(out, "factor = {factor}")?;
    writeln!(out, "base_currency = {base_currency}")?;
    writeln!(out, "target_currency = {target_currency}")?;
    writeln!(out, "in_dollar = {in_dollar}")?;
    writeln!(out, "in_dollar_ecb = {in_dollar_ecb}")?;
    Ok(())
}
