//! Min, max and sum over same-currency amounts.

use std::io::Write;

use coinage_core::currency::functions::{max_of, min_of, sum_all};
use coinage_shared::types::Money;

use crate::render;

/// Prints min, max and sum of 10, 7.5 and 12 euros.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let amounts = vec![
        Money::of(10, "EUR")?,
        Money::of(7.5, "EUR")?,
        Money::of(12, "EUR")?,
    ];

    let min = min_of(amounts.iter().copied())?;
    let max = max_of(amounts.iter().copied())?;
    let sum = sum_all(amounts)?;

    writeln!(out, "min = {}", render::option(min.as_ref()))?;
    writeln!(out, "max = {}", render::option(max.as_ref()))?;
    writeln!(out, "sum = {}", render::option(sum.as_ref()))?;
    Ok(())
}
