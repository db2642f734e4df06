//! Top spending categories
//!
//! Ranks categories by total expense amount across the whole ledger.

use std::collections::BTreeMap;

use crate::ledger::Ledger;
use crate::models::Money;

/// Default number of categories to show
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Total expense for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    pub category: String,
    /// Unsigned expense total; income in the category is not netted against it
    pub total: Money,
}

/// Top-categories report
#[derive(Debug, Clone)]
pub struct TopCategoriesReport {
    /// At most `limit` rows, largest total first; ties keep alphabetical order
    pub rows: Vec<CategorySpend>,
    pub limit: usize,
}

impl TopCategoriesReport {
    /// Rank expense categories over all entries and keep the top `limit`
    pub fn generate(ledger: &Ledger, limit: usize) -> Self {
        let mut by_category: BTreeMap<String, Money> = BTreeMap::new();
        for entry in ledger.entries() {
            if entry.is_expense() {
                *by_category
                    .entry(entry.category.clone())
                    .or_insert_with(Money::zero) += entry.amount;
            }
        }

        let mut rows: Vec<CategorySpend> = by_category
            .into_iter()
            .map(|(category, total)| CategorySpend { category, total })
            .collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total));
        rows.truncate(limit);

        Self { rows, limit }
    }
}
