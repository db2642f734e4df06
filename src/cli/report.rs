//! Report CLI commands
//!
//! Implements the monthly summary, yearly overview, and top-category
//! report commands.

use chrono::{Datelike, NaiveDate};
use clap::Subcommand;

use crate::cli::parse_month;
use crate::config::settings::Settings;
use crate::display::{format_monthly_report, format_top_categories, format_yearly_report};
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::Month;
use crate::reports::{MonthlyReport, TopCategoriesReport, YearlyReport, DEFAULT_TOP_LIMIT};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly summary with per-category flows and budget comparison
    Month {
        /// Month (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
    /// Month-by-month overview of a year
    Year {
        /// Year (e.g., 2025), defaults to the current year
        year: Option<i32>,
    },
    /// Categories ranked by total spending
    Top {
        /// Number of categories to show
        #[arg(short, long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },
}

/// Handle a report command
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
    today: NaiveDate,
) -> LedgerResult<()> {
    match cmd {
        ReportCommands::Month { month } => {
            let month = match month {
                Some(raw) => parse_month(&raw)?,
                None => Month::containing(today),
            };

            let report = MonthlyReport::generate(ledger, month);
            print!(
                "{}",
                format_monthly_report(&report, &settings.currency_symbol)
            );
        }
        ReportCommands::Year { year } => {
            let year = year.unwrap_or_else(|| today.year());

            let report = YearlyReport::generate(ledger, year);
            print!(
                "{}",
                format_yearly_report(&report, &settings.currency_symbol)
            );
        }
        ReportCommands::Top { limit } => {
            let report = TopCategoriesReport::generate(ledger, limit);
            print!(
                "{}",
                format_top_categories(&report, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
