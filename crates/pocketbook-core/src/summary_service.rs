//! Aggregation helpers for expense summaries.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use pocketbook_domain::{Amounted, Expense};

/// Spending accumulated on a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTotal {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Overall and per-category totals for a non-empty expense collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
}

/// Read-only aggregates over an expense collection.
pub struct SummaryService;

impl SummaryService {
    /// Sum of every amount; `0.0` when there are no expenses.
    pub fn total(expenses: &[Expense]) -> f64 {
        expenses.iter().map(Amounted::amount).sum()
    }

    /// Per-category sums, one entry per category present, ordered by name.
    pub fn by_category(expenses: &[Expense]) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.category().to_string()).or_insert(0.0) += expense.amount();
        }
        totals
    }

    /// Per-date sums in ascending date order.
    pub fn by_date(expenses: &[Expense]) -> Vec<DateTotal> {
        let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.date()).or_insert(0.0) += expense.amount();
        }
        totals
            .into_iter()
            .map(|(date, amount)| DateTotal { date, amount })
            .collect()
    }

    /// Combined view for the summary screen, `None` when nothing has been recorded.
    pub fn summarize(expenses: &[Expense]) -> Option<ExpenseSummary> {
        if expenses.is_empty() {
            return None;
        }
        Some(ExpenseSummary {
            count: expenses.len(),
            total: Self::total(expenses),
            by_category: Self::by_category(expenses),
        })
    }
}
