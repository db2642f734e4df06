//! Service layer for tally
//!
//! The service layer provides business logic on top of the ledger store,
//! handling validation, recurring-entry expansion, and batch import.

pub mod budget;
pub mod demo;
pub mod entry;
pub mod import;
pub mod recurring;

pub use budget::BudgetService;
pub use demo::DemoService;
pub use entry::{CreateEntryInput, EntryService, UpdateEntryInput};
pub use import::{ImportReport, ImportService};
pub use recurring::{ExpansionSummary, RecurringService};
