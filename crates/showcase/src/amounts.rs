//! Constructing amounts and reading their numbers back.

use std::io::Write;

use coinage_core::Monetary;
use coinage_shared::types::{FastMoney, MonetaryAmount, Money};

/// Prints amounts built three ways, the decomposition of `EUR 123.45`, and
/// equality within and across amount families.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let euro = Monetary::currency("EUR")?;
    let five_euro = Money::of(5, euro)?;
    let ten_us_dollar = Money::of(10, "USD")?;
    let seven_euro = FastMoney::of(7, euro)?;

    writeln!(out, "five_euro = {five_euro}")?;
    writeln!(out, "ten_us_dollar = {ten_us_dollar}")?;
    writeln!(out, "seven_euro = {seven_euro}")?;

    let factory_amount = Monetary::default_amount_factory()
        .set_number(123.45)
        .set_currency("USD")
        .create()?;
    writeln!(out, "factory_amount = {factory_amount}")?;

    let amount = Money::of(123.45, euro)?;
    let number = amount.number();
    writeln!(out, "currency = {}", amount.currency())?;
    writeln!(out, "int_value = {}", number.int_value()?)?;
    writeln!(out, "double_value = {}", number.double_value()?)?;
    writeln!(
        out,
        "fraction_denominator = {}",
        number.amount_fraction_denominator()
    )?;
    writeln!(
        out,
        "fraction_numerator = {}",
        number.amount_fraction_numerator()
    )?;
    writeln!(out, "precision = {}", number.precision())?;

    let one_euro = Money::of(1, Monetary::currency("EUR")?)?;
    let one_fast_euro = FastMoney::of(1, "EUR")?;
    let is_equal = one_euro.same_as(&Money::of(1, "EUR")?);
    let fast_equal = one_euro.same_as(&one_fast_euro);
    let numerically_equal = one_euro.is_equal_to(&one_fast_euro);

    writeln!(out, "is_equal = {is_equal}")?;
    writeln!(out, "fast_equal = {fast_equal}")?;
    writeln!(out, "numerically_equal = {numerically_equal}")?;
    Ok(())
}
