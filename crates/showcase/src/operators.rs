//! A user-defined operator and its composition with a rounding.

use std::io::Write;

use coinage_core::Monetary;
use coinage_core::currency::{MonetaryOperatorExt, ten_percent};
use coinage_shared::types::{MonetaryAmount, Money};

/// Prints ten percent of `USD 12.34567`, exact and rounded.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let dollars = Money::of(12.34567, "USD")?;

    let ten_percent_dollars = dollars.with(&ten_percent)?;
    writeln!(out, "ten_percent_dollars = {ten_percent_dollars}")?;

    let rounded = ten_percent.and_then(Monetary::rounding(dollars.currency()));
    writeln!(out, "rounded_ten_percent_dollars = {}", dollars.with(&rounded)?)?;
    Ok(())
}
