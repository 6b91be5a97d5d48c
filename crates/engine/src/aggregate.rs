//! Aggregation over stored transactions: face-value totals, forward
//! projections, and the income-derived remaining budget.

use std::collections::HashSet;

use crate::{Transaction, UserRecord};

/// Sums transaction amounts at face value, optionally restricted to one
/// category (case-sensitive exact match).
///
/// No currency normalization happens here; amounts are summed as stored.
/// Currency-aware summation is the caller's job via the rate table.
#[must_use]
pub fn total_expenditure(record: &UserRecord, category: Option<&str>) -> f64 {
    record
        .data
        .iter()
        .filter(|tx| category.is_none_or(|c| tx.category == c))
        .map(|tx| tx.amount)
        .sum()
}

/// Projects per-category spending `days` ahead.
///
/// Each category's historical total is divided by the number of distinct
/// calendar dates in the whole input (not per category) to get a per-day
/// average, then multiplied by `days`. Categories keep first-seen order.
/// A single distinct date divides by one; empty input yields an empty
/// report.
#[must_use]
pub fn project_spending(transactions: &[Transaction], days: u32) -> Vec<(String, f64)> {
    let mut seen_dates = HashSet::new();
    let mut totals: Vec<(String, f64)> = Vec::new();

    for tx in transactions {
        seen_dates.insert(tx.date);
        match totals.iter_mut().find(|(category, _)| *category == tx.category) {
            Some((_, total)) => *total += tx.amount,
            None => totals.push((tx.category.clone(), tx.amount)),
        }
    }

    let day_span = seen_dates.len().max(1) as f64;
    for (_, total) in &mut totals {
        *total = *total / day_span * f64::from(days);
    }
    totals
}

/// Income minus total expenditure, or `0.0` when income is unset or zero.
///
/// An exhausted budget and an unconfigured income are indistinguishable at
/// this surface; both read as zero. `category` is accepted for parity with
/// the query surface but does not narrow the sum.
#[must_use]
pub fn remaining_budget(record: &UserRecord, _category: Option<&str>) -> f64 {
    match record.income {
        Some(income) if income != 0.0 => income - total_expenditure(record, None),
        _ => 0.0,
    }
}
