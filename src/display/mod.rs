//! Display formatting for terminal output
//!
//! Formats entries and reports for the terminal. All user-facing text
//! rendering lives here; the core stays presentation-free.

pub mod entry;
pub mod report;

pub use entry::{format_entry_register, format_entry_row};
pub use report::{
    format_budget_table, format_expansion_summary, format_import_report, format_monthly_report,
    format_top_categories, format_yearly_report,
};
