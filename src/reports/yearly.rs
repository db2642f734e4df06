//! Yearly report
//!
//! Twelve monthly income/expense rows plus column totals.

use crate::ledger::Ledger;
use crate::models::{Money, Month};
use crate::reports::WindowTotals;

/// Income and expense for one month of the year
#[derive(Debug, Clone)]
pub struct MonthRow {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
}

impl MonthRow {
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// Yearly report
#[derive(Debug, Clone)]
pub struct YearlyReport {
    pub year: i32,
    /// Exactly twelve rows, January through December
    pub months: Vec<MonthRow>,
    pub total_income: Money,
    pub total_expense: Money,
}

impl YearlyReport {
    /// Generate the report for one year
    pub fn generate(ledger: &Ledger, year: i32) -> Self {
        let mut months = Vec::with_capacity(12);
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();

        for m in 1..=12 {
            let month = Month::new(year, m);
            let totals = WindowTotals::collect(ledger, month.first_day(), month.last_day());
            total_income += totals.total_income;
            total_expense += totals.total_expense;
            months.push(MonthRow {
                month,
                income: totals.total_income,
                expense: totals.total_expense,
            });
        }

        Self {
            year,
            months,
            total_income,
            total_expense,
        }
    }

    /// Total income minus total expense
    pub fn total_net(&self) -> Money {
        self.total_income - self.total_expense
    }
}
