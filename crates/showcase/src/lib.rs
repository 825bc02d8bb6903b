//! Demonstration procedures for Coinage.
//!
//! Each procedure builds sample values, runs library operations on them and
//! writes one `name = value` line per result. Procedures share no state.

pub mod amounts;
pub mod currencies;
pub mod exchange;
pub mod filtering;
pub mod formatting;
pub mod operations;
pub mod operators;
pub mod reduction;
pub mod render;
pub mod rounding;

use std::io::Write;

use coinage_core::currency::ConversionRegistry;

/// Runs every procedure in order, separated by blank lines.
///
/// # Errors
///
/// Returns the first error a procedure does not handle itself, or a write
/// failure.
pub fn run_all(out: &mut impl Write, registry: &ConversionRegistry) -> anyhow::Result<()> {
    currencies::run(out)?;
    writeln!(out)?;
    amounts::run(out)?;
    writeln!(out)?;
    rounding::run(out)?;
    writeln!(out)?;
    operations::run(out)?;
    writeln!(out)?;
    reduction::run(out)?;
    writeln!(out)?;
    filtering::run(out)?;
    writeln!(out)?;
    operators::run(out)?;
    writeln!(out)?;
    exchange::run(out, registry)?;
    writeln!(out)?;
    formatting::run(out)?;
    tracing::debug!("All procedures finished");
    Ok(())
}
