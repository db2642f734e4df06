//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Month;

pub mod budget;
pub mod entry;
pub mod export;
pub mod import;
pub mod recurring;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use entry::{
    handle_add, handle_delete, handle_demo, handle_edit, handle_list, handle_search, AddArgs,
    EditArgs, KindArg,
};
pub use export::handle_export;
pub use import::handle_import;
pub use recurring::handle_apply;
pub use report::{handle_report_command, ReportCommands};

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(raw: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", raw))
    })
}

/// Parse a YYYY-MM month argument
pub(crate) fn parse_month(raw: &str) -> LedgerResult<Month> {
    Month::parse(raw).map_err(|_| {
        LedgerError::Validation(format!("Invalid month format: '{}'. Use YYYY-MM", raw))
    })
}
