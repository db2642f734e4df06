//! Report formatting for terminal output
//!
//! Renders the pure report structures as text. The currency symbol comes
//! from settings; everything else is fixed-width layout.

use std::collections::BTreeMap;

use crate::models::{Money, Month};
use crate::reports::{MonthlyReport, TopCategoriesReport, YearlyReport};
use crate::services::{ExpansionSummary, ImportReport};

/// Format the monthly summary: totals, category breakdown, and budget
/// comparison when the month has allocations
pub fn format_monthly_report(report: &MonthlyReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("Summary for {}\n", report.month));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Income:  {}\n",
        report.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expense: {}\n",
        report.expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net:     {}\n",
        report.net().format_with_symbol(symbol)
    ));

    if !report.by_category.is_empty() {
        output.push_str("\nBy category (net flow, expenses positive):\n");
        for row in &report.by_category {
            output.push_str(&format!(
                "  {:16} {:>12}\n",
                truncate(&row.category, 16),
                row.net.format_with_symbol(symbol)
            ));
        }
    }

    if !report.budget_lines.is_empty() {
        output.push_str("\nBudgets:\n");
        for line in &report.budget_lines {
            output.push_str(&format!(
                "  {:16} Budget {:>10}  Spent {:>10}  Remaining {:>10}\n",
                truncate(&line.category, 16),
                line.budget.format_with_symbol(symbol),
                line.spent.format_with_symbol(symbol),
                line.remaining.format_with_symbol(symbol)
            ));
        }
    }

    output.push_str(&"=".repeat(40));
    output.push('\n');
    output
}

/// Format the yearly overview as a month-by-month table with totals
pub fn format_yearly_report(report: &YearlyReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Yearly overview for {}\n", report.year));
    output.push_str(&format!(
        "{:5} | {:>10} | {:>10} | {:>10}\n",
        "Month", "Income", "Expense", "Net"
    ));
    output.push_str(&"-".repeat(45));
    output.push('\n');

    for row in &report.months {
        output.push_str(&format!(
            "{:>5} | {:>10} | {:>10} | {:>10}\n",
            row.month.month(),
            row.income.format_with_symbol(symbol),
            row.expense.format_with_symbol(symbol),
            row.net().format_with_symbol(symbol)
        ));
    }

    output.push_str(&"-".repeat(45));
    output.push('\n');
    output.push_str(&format!(
        "{:5} | {:>10} | {:>10} | {:>10}\n",
        "Total",
        report.total_income.format_with_symbol(symbol),
        report.total_expense.format_with_symbol(symbol),
        report.total_net().format_with_symbol(symbol)
    ));

    output
}

/// Format the top spending categories
pub fn format_top_categories(report: &TopCategoriesReport, symbol: &str) -> String {
    if report.rows.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Top categories by spending:\n");
    for row in &report.rows {
        output.push_str(&format!(
            "  {:16} {:>12}\n",
            truncate(&row.category, 16),
            row.total.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format a month's budget allocations
pub fn format_budget_table(month: Month, budgets: &BTreeMap<String, Money>, symbol: &str) -> String {
    if budgets.is_empty() {
        return format!("No budgets set for {}.\n", month);
    }

    let mut output = String::new();
    output.push_str(&format!("Budgets for {}:\n", month));
    for (category, amount) in budgets {
        output.push_str(&format!(
            "  {:16} {:>12}\n",
            truncate(category, 16),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format the outcome of a CSV import, including per-row errors
pub fn format_import_report(report: &ImportReport) -> String {
    let mut output = format!(
        "Imported {} row(s), skipped {}.\n",
        report.imported, report.skipped
    );
    for (row, message) in &report.row_errors {
        output.push_str(&format!("  row {}: {}\n", row, message));
    }
    output
}

/// Format the outcome of a recurring-entry expansion run
pub fn format_expansion_summary(summary: &ExpansionSummary) -> String {
    if summary.templates == 0 {
        return "No recurring templates found.\n".to_string();
    }
    format!(
        "Generated {} occurrence(s) from {} template(s).\n",
        summary.generated, summary.templates
    )
}

/// Truncate a string to a maximum length, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
