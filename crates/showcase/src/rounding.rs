//! Rounding to a currency's default fraction digits.

use std::io::Write;

use coinage_core::Monetary;
use coinage_shared::types::Money;

/// Prints `USD 12.34567` rounded for US dollars.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let usd = Monetary::currency("USD")?;
    let dollars = Money::of(12.34567, "USD")?;

    let rounding = Monetary::rounding(usd);
    let rounded_dollars = dollars.with(&rounding)?;

    writeln!(out, "rounded_dollars = {rounded_dollars}")?;
    Ok(())
}
