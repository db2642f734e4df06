//! Monthly report
//!
//! Income, expense, and per-category breakdown for one calendar month,
//! joined against that month's budget allocations.

use crate::ledger::Ledger;
use crate::models::{Money, Month};
use crate::reports::WindowTotals;

/// One category's net flow within the month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    /// Signed: positive means net outflow
    pub net: Money,
}

/// Budget comparison for one category with an allocation this month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetLine {
    pub category: String,
    /// Allocated ceiling
    pub budget: Money,
    /// Expense total for the category within the month
    pub spent: Money,
    /// `budget - spent`; negative signals overspend, which is reported,
    /// not an error
    pub remaining: Money,
}

/// Monthly report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
    /// Categories sorted by descending absolute net flow; ties keep
    /// alphabetical order
    pub by_category: Vec<CategoryRow>,
    /// One line per budgeted category, alphabetical
    pub budget_lines: Vec<BudgetLine>,
}

impl MonthlyReport {
    /// Generate the report for one month
    pub fn generate(ledger: &Ledger, month: Month) -> Self {
        let totals = WindowTotals::collect(ledger, month.first_day(), month.last_day());

        let mut by_category: Vec<CategoryRow> = totals
            .net_by_category
            .iter()
            .map(|(category, net)| CategoryRow {
                category: category.clone(),
                net: *net,
            })
            .collect();
        by_category.sort_by(|a, b| b.net.abs().cmp(&a.net.abs()));

        let budget_lines = match ledger.budgets_for(month) {
            Some(budgets) => budgets
                .iter()
                .map(|(category, budget)| {
                    let spent = totals
                        .expense_by_category
                        .get(category)
                        .copied()
                        .unwrap_or_else(Money::zero);
                    BudgetLine {
                        category: category.clone(),
                        budget: *budget,
                        spent,
                        remaining: *budget - spent,
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        Self {
            month,
            income: totals.total_income,
            expense: totals.total_expense,
            by_category,
            budget_lines,
        }
    }

    /// Income minus expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, EntryKind};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(ledger: &mut Ledger, d: NaiveDate, cents: i64, category: &str) {
        ledger.insert(EntryDraft::new(
            EntryKind::Expense,
            d,
            Money::from_cents(cents),
            category,
            "",
        ));
    }

    #[test]
    fn test_net_identity() {
        let mut ledger = Ledger::default();
        ledger.insert(EntryDraft::new(
            EntryKind::Income,
            date(2024, 1, 5),
            Money::from_cents(100_000),
            "Salary",
            "",
        ));
        expense(&mut ledger, date(2024, 1, 10), 30_000, "Rent");

        let report = MonthlyReport::generate(&ledger, Month::new(2024, 1));

        assert_eq!(report.income, Money::from_cents(100_000));
        assert_eq!(report.expense, Money::from_cents(30_000));
        assert_eq!(report.net(), report.income - report.expense);
    }

    #[test]
    fn test_category_rows_sorted_by_impact() {
        let mut ledger = Ledger::default();
        expense(&mut ledger, date(2024, 1, 5), 1_000, "Small");
        expense(&mut ledger, date(2024, 1, 6), 50_000, "Big");
        ledger.insert(EntryDraft::new(
            EntryKind::Income,
            date(2024, 1, 7),
            Money::from_cents(20_000),
            "Medium",
            "",
        ));

        let report = MonthlyReport::generate(&ledger, Month::new(2024, 1));

        let names: Vec<&str> = report
            .by_category
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        // Largest absolute flow first; income ranks by magnitude too
        assert_eq!(names, ["Big", "Medium", "Small"]);
        assert_eq!(report.by_category[1].net, Money::from_cents(-20_000));
    }

    #[test]
    fn test_budget_line_spent_and_remaining() {
        let mut ledger = Ledger::default();
        expense(&mut ledger, date(2024, 1, 10), 4_000, "Rent");

        let mut budgets = BTreeMap::new();
        budgets.insert("Rent".to_string(), Money::from_cents(10_000));
        ledger.set_budgets(Month::new(2024, 1), budgets);

        let report = MonthlyReport::generate(&ledger, Month::new(2024, 1));

        assert_eq!(report.budget_lines.len(), 1);
        let line = &report.budget_lines[0];
        assert_eq!(line.category, "Rent");
        assert_eq!(line.spent, Money::from_cents(4_000));
        assert_eq!(line.remaining, Money::from_cents(6_000));
    }

    #[test]
    fn test_overspend_goes_negative() {
        let mut ledger = Ledger::default();
        expense(&mut ledger, date(2024, 1, 10), 15_000, "Food");

        let mut budgets = BTreeMap::new();
        budgets.insert("Food".to_string(), Money::from_cents(10_000));
        ledger.set_budgets(Month::new(2024, 1), budgets);

        let report = MonthlyReport::generate(&ledger, Month::new(2024, 1));

        assert_eq!(report.budget_lines[0].remaining, Money::from_cents(-5_000));
    }

    #[test]
    fn test_budgeted_category_with_no_spending() {
        let mut ledger = Ledger::default();

        let mut budgets = BTreeMap::new();
        budgets.insert("Travel".to_string(), Money::from_cents(25_000));
        ledger.set_budgets(Month::new(2024, 1), budgets);

        let report = MonthlyReport::generate(&ledger, Month::new(2024, 1));

        let line = &report.budget_lines[0];
        assert_eq!(line.spent, Money::zero());
        assert_eq!(line.remaining, Money::from_cents(25_000));
    }

    #[test]
    fn test_income_does_not_count_as_spending() {
        let mut ledger = Ledger::default();
        ledger.insert(EntryDraft::new(
            EntryKind::Income,
            date(2024, 1, 5),
            Money::from_cents(99_999),
            "Rent",
            "sublet income",
        ));

        let mut budgets = BTreeMap::new();
        budgets.insert("Rent".to_string(), Money::from_cents(10_000));
        ledger.set_budgets(Month::new(2024, 1), budgets);

        let report = MonthlyReport::generate(&ledger, Month::new(2024, 1));

        assert_eq!(report.budget_lines[0].spent, Money::zero());
    }

    #[test]
    fn test_entries_outside_month_excluded() {
        let mut ledger = Ledger::default();
        expense(&mut ledger, date(2024, 1, 31), 1_000, "Food");
        expense(&mut ledger, date(2024, 2, 1), 2_000, "Food");

        let january = MonthlyReport::generate(&ledger, Month::new(2024, 1));
        assert_eq!(january.expense, Money::from_cents(1_000));

        let february = MonthlyReport::generate(&ledger, Month::new(2024, 2));
        assert_eq!(february.expense, Money::from_cents(2_000));
    }
}
