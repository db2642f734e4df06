//! Window aggregation
//!
//! Sums entries over an inclusive date range, partitioned by kind and by
//! category. Every report is built on top of these totals.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::ledger::Ledger;
use crate::models::Money;

/// Totals for one inclusive date window
#[derive(Debug, Clone)]
pub struct WindowTotals {
    /// Start of the window (inclusive)
    pub start: NaiveDate,
    /// End of the window (inclusive)
    pub end: NaiveDate,
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts
    pub total_expense: Money,
    /// Signed flow per category: expenses count positive, income counts
    /// negative, so a positive value means net outflow
    pub net_by_category: BTreeMap<String, Money>,
    /// Unsigned expense sum per category, for budget comparison
    pub expense_by_category: BTreeMap<String, Money>,
}

impl WindowTotals {
    /// Aggregate all entries with dates in `[start, end]`
    pub fn collect(ledger: &Ledger, start: NaiveDate, end: NaiveDate) -> Self {
        let mut totals = Self {
            start,
            end,
            total_income: Money::zero(),
            total_expense: Money::zero(),
            net_by_category: BTreeMap::new(),
            expense_by_category: BTreeMap::new(),
        };

        for entry in ledger.entries_between(start, end) {
            if entry.is_income() {
                totals.total_income += entry.amount;
            } else {
                totals.total_expense += entry.amount;
                *totals
                    .expense_by_category
                    .entry(entry.category.clone())
                    .or_insert_with(Money::zero) += entry.amount;
            }

            *totals
                .net_by_category
                .entry(entry.category.clone())
                .or_insert_with(Money::zero) += entry.net_amount();
        }

        totals
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }
}
