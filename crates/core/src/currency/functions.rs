//! Reducers, filters, comparators and grouping over amounts.
//!
//! Filters return closures usable with `Iterator::filter` on an iterator of
//! `Money` values; comparators fit `slice::sort_by`, which is stable.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use coinage_shared::MonetaryResult;
use coinage_shared::types::{CurrencyUnit, MonetaryAmount, Money};

use super::summary::MonetarySummaryStatistics;

// ============================================================================
// Reducers
// ============================================================================

/// Adds two amounts of the same currency.
pub fn sum(a: Money, b: Money) -> MonetaryResult<Money> {
    a.add(&b)
}

/// The smaller of two amounts of the same currency; `a` on ties.
pub fn min(a: Money, b: Money) -> MonetaryResult<Money> {
    Ok(if b.is_less_than(&a)? { b } else { a })
}

/// The larger of two amounts of the same currency; `a` on ties.
pub fn max(a: Money, b: Money) -> MonetaryResult<Money> {
    Ok(if b.is_greater_than(&a)? { b } else { a })
}

fn try_reduce<I, F>(amounts: I, reducer: F) -> MonetaryResult<Option<Money>>
where
    I: IntoIterator<Item = Money>,
    F: FnMut(Money, Money) -> MonetaryResult<Money>,
{
    let mut iter = amounts.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    iter.try_fold(first, reducer).map(Some)
}

/// Sum of all amounts; `None` when empty.
pub fn sum_all<I: IntoIterator<Item = Money>>(amounts: I) -> MonetaryResult<Option<Money>> {
    try_reduce(amounts, sum)
}

/// Smallest amount; `None` when empty.
pub fn min_of<I: IntoIterator<Item = Money>>(amounts: I) -> MonetaryResult<Option<Money>> {
    try_reduce(amounts, min)
}

/// Largest amount; `None` when empty.
pub fn max_of<I: IntoIterator<Item = Money>>(amounts: I) -> MonetaryResult<Option<Money>> {
    try_reduce(amounts, max)
}

// ============================================================================
// Filters
// ============================================================================

/// Keeps amounts in any of `currencies`.
pub fn is_currency(currencies: impl IntoIterator<Item = CurrencyUnit>) -> impl Fn(&Money) -> bool {
    let currencies: Vec<_> = currencies.into_iter().collect();
    move |amount: &Money| currencies.contains(&amount.currency())
}

/// Keeps amounts in none of `currencies`.
pub fn is_not_currency(
    currencies: impl IntoIterator<Item = CurrencyUnit>,
) -> impl Fn(&Money) -> bool {
    let keep = is_currency(currencies);
    move |amount: &Money| !keep(amount)
}

/// Keeps amounts greater than `reference`; other currencies never match.
pub fn is_greater_than(reference: Money) -> impl Fn(&Money) -> bool {
    move |amount: &Money| {
        amount.currency() == reference.currency()
            && amount.number_value() > reference.number_value()
    }
}

/// Keeps amounts less than `reference`; other currencies never match.
pub fn is_less_than(reference: Money) -> impl Fn(&Money) -> bool {
    move |amount: &Money| {
        amount.currency() == reference.currency()
            && amount.number_value() < reference.number_value()
    }
}

/// Keeps amounts within `low..=high`, both in the amount's currency.
pub fn is_between(low: Money, high: Money) -> impl Fn(&Money) -> bool {
    move |amount: &Money| {
        amount.currency() == low.currency()
            && amount.currency() == high.currency()
            && amount.number_value() >= low.number_value()
            && amount.number_value() <= high.number_value()
    }
}

/// Keeps amounts above zero.
pub fn is_positive(amount: &Money) -> bool {
    amount.is_positive()
}

/// Keeps amounts below zero.
pub fn is_negative(amount: &Money) -> bool {
    amount.is_negative()
}

/// Keeps zero amounts.
pub fn is_zero(amount: &Money) -> bool {
    amount.is_zero()
}

// ============================================================================
// Comparators
// ============================================================================

/// Ascending by number within each currency.
///
/// Numbers of different currencies are not comparable, so mixed input is
/// ordered by currency code first.
pub fn sort_number(a: &Money, b: &Money) -> Ordering {
    sort_currency_unit(a, b).then_with(|| a.number_value().cmp(&b.number_value()))
}

/// Descending by number within each currency, currencies descending.
pub fn sort_number_desc(a: &Money, b: &Money) -> Ordering {
    sort_number(b, a)
}

/// Ascending by currency code.
pub fn sort_currency_unit(a: &Money, b: &Money) -> Ordering {
    a.currency().cmp(&b.currency())
}

/// Descending by currency code.
pub fn sort_currency_unit_desc(a: &Money, b: &Money) -> Ordering {
    sort_currency_unit(b, a)
}

// ============================================================================
// Grouping
// ============================================================================

/// Partitions amounts by currency, keeping input order within each group.
pub fn group_by_currency<I: IntoIterator<Item = Money>>(
    amounts: I,
) -> BTreeMap<CurrencyUnit, Vec<Money>> {
    let mut groups: BTreeMap<CurrencyUnit, Vec<Money>> = BTreeMap::new();
    for amount in amounts {
        groups.entry(amount.currency()).or_default().push(amount);
    }
    groups
}

/// Summary statistics per currency.
pub fn group_by_summarizing<I: IntoIterator<Item = Money>>(
    amounts: I,
) -> MonetaryResult<BTreeMap<CurrencyUnit, MonetarySummaryStatistics>> {
    let mut summaries: BTreeMap<CurrencyUnit, MonetarySummaryStatistics> = BTreeMap::new();
    for amount in amounts {
        summaries
            .entry(amount.currency())
            .or_insert_with(|| MonetarySummaryStatistics::new(amount.currency()))
            .accept(amount)?;
    }
    tracing::debug!(groups = summaries.len(), "Summarized amounts by currency");
    Ok(summaries)
}
