//! Currency lookup by code and by locale.

use std::io::Write;

use coinage_core::Monetary;
use coinage_shared::types::Locale;

/// Prints currencies obtained by ISO code and by locale.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let euro = Monetary::currency("EUR")?;
    let us_dollar = Monetary::currency("USD")?;

    let yen = Monetary::currency_for_locale(Locale::JAPAN);
    let canadian_dollar = Monetary::currency_for_locale(Locale::CANADA);

    writeln!(out, "euro = {euro}")?;
    writeln!(out, "us_dollar = {us_dollar}")?;
    writeln!(out, "yen = {yen}")?;
    writeln!(out, "canadian_dollar = {canadian_dollar}")?;
    Ok(())
}
