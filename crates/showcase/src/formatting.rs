//! Locale formats, parsing, and a custom pattern.

use std::io::Write;

use coinage_core::Monetary;
use coinage_core::format::{AmountFormatQuery, CurrencyStyle, MonetaryFormats};
use coinage_shared::types::{Locale, Money};

/// Prints `USD 12345.67` in German and Canadian formats and in a custom
/// pattern with currency names, then a German amount parsed back.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let german_format = MonetaryFormats::amount_format(Locale::GERMANY)?;
    let canadian_format = MonetaryFormats::amount_format(Locale::CANADA)?;

    let amount = Money::of(12345.67, Monetary::currency("USD")?)?;

    let canadian_formatted = canadian_format.format(&amount);
    let german_formatted = german_format.format(&amount);

    writeln!(out, "canadian_formatted = {canadian_formatted}")?;
    writeln!(out, "german_formatted = {german_formatted}")?;

    let parsed = german_format.parse("12,4 USD")?;

    let custom_format = MonetaryFormats::amount_format_with(
        AmountFormatQuery::builder(Locale::US)
            .currency_style(CurrencyStyle::Name)
            .pattern("00,00,00,00.00 ¤")
            .build(),
    )?;
    let formatted = custom_format.format(&amount);

    writeln!(out, "formatted = {formatted}")?;
    writeln!(out, "parsed = {parsed}")?;
    Ok(())
}
