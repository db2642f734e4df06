//! Reports module for tally
//!
//! Pure aggregation over the ledger: window totals, monthly and yearly
//! summaries, and top spending categories. Text rendering lives in the
//! display module.

pub mod monthly;
pub mod spending;
pub mod window;
pub mod yearly;

pub use monthly::{BudgetLine, CategoryRow, MonthlyReport};
pub use spending::{CategorySpend, TopCategoriesReport, DEFAULT_TOP_LIMIT};
pub use window::WindowTotals;
pub use yearly::{MonthRow, YearlyReport};
