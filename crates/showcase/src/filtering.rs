//! Filters, sorts, grouping and per-currency summaries.

use std::io::Write;

use anyhow::Context;

use coinage_core::Monetary;
use coinage_core::currency::functions::{
    group_by_currency, group_by_summarizing, is_currency, is_greater_than, sort_currency_unit,
    sort_number,
};
use coinage_shared::types::Money;

use crate::render;

/// Prints the dollar summary, filtered and sorted views, and the
/// grouping of a mixed-currency sample.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let amounts = vec![
        Money::of(2, "EUR")?,
        Money::of(42, "USD")?,
        Money::of(7, "USD")?,
        Money::of(13.37, "JPY")?,
        Money::of(18, "USD")?,
    ];

    let yen = Monetary::currency("JPY")?;
    let dollar = Monetary::currency("USD")?;

    let only_dollar: Vec<Money> = amounts
        .iter()
        .copied()
        .filter(is_currency([dollar]))
        .collect();

    let only_dollar_and_yen: Vec<Money> = amounts
        .iter()
        .copied()
        .filter(is_currency([dollar, yen]))
        .collect();

    let ten_dollar = Money::of(10, dollar)?;
    let greater_than_ten_dollar: Vec<Money> = amounts
        .iter()
        .copied()
        .filter(is_currency([dollar]))
        .filter(is_greater_than(ten_dollar))
        .collect();

    let mut sorted_by_amount = only_dollar.clone();
    sorted_by_amount.sort_by(sort_number);

    let mut sorted_by_currency_unit = amounts.clone();
    sorted_by_currency_unit.sort_by(sort_currency_unit);

    let grouped_by_currency = group_by_currency(amounts.iter().copied());

    let summary = group_by_summarizing(amounts)?;
    let dollar_summary = summary.get(&dollar).context("no dollar amounts")?;

    writeln!(out, "average = {}", dollar_summary.average()?)?;
    writeln!(
        out,
        "min = {}",
        dollar_summary.min().context("empty dollar summary")?
    )?;
    writeln!(
        out,
        "max = {}",
        dollar_summary.max().context("empty dollar summary")?
    )?;
    writeln!(out, "sum = {}", dollar_summary.sum())?;
    writeln!(out, "count = {}", dollar_summary.count())?;

    writeln!(out, "only_dollar_and_yen = {}", render::list(&only_dollar_and_yen))?;
    writeln!(out, "only_dollar = {}", render::list(&only_dollar))?;
    writeln!(
        out,
        "greater_than_ten_dollar = {}",
        render::list(&greater_than_ten_dollar)
    )?;
    writeln!(out, "sorted_by_amount = {}", render::list(&sorted_by_amount))?;
    writeln!(
        out,
        "sorted_by_currency_unit = {}",
        render::list(&sorted_by_currency_unit)
    )?;
    writeln!(
        out,
        "grouped_by_currency = {}",
        render::groups(&grouped_by_currency)
    )?;
    Ok(())
}
