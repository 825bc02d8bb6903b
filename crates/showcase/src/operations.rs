//! Arithmetic and predicates, including a currency mismatch.

use std::io::Write;

use coinage_shared::types::{FastMoney, MonetaryAmount, Money};

/// Prints sums, differences, a product and predicates over euro amounts,
/// then the message of the error raised by adding euros to dollars.
///
/// # Errors
///
/// Only currency mismatches are caught; any other error is returned.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let five_euro = Money::of(5, "EUR")?;
    let ten_us_dollar = Money::of(10, "USD")?;
    let seven_euro = FastMoney::of(7, "EUR")?;

    let twelve_euro = five_euro.add(&seven_euro)?;
    let two_euro = seven_euro.subtract(&five_euro)?;
    let seven_point_five_euro = five_euro.multiply(1.5)?;
    let minus_two_euro = five_euro.subtract(&seven_euro)?;

    writeln!(out, "twelve_euro = {twelve_euro}")?;
    writeln!(out, "two_euro = {two_euro}")?;
    writeln!(out, "seven_point_five_euro = {seven_point_five_euro}")?;
    writeln!(out, "minus_two_euro = {minus_two_euro}")?;

    let greater_than = seven_euro.is_greater_than(&five_euro)?;
    let positive = seven_euro.is_positive();
    let zero = seven_euro.is_zero();

    writeln!(out, "greater_than = {greater_than}")?;
    writeln!(out, "positive = {positive}")?;
    writeln!(out, "zero = {zero}")?;

    if let Err(err) = five_euro.add(&ten_us_dollar) {
        if !err.is_domain() {
            return Err(err.into());
        }
        writeln!(out, "{err}")?;
    }
    Ok(())
}
