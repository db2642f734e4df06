//! Core data models for tally
//!
//! This module contains the data structures that represent the ledger
//! domain: entries, recurrence rules, money amounts, and calendar months.

pub mod entry;
pub mod ids;
pub mod money;
pub mod month;

pub use entry::{
    normalize_category, Entry, EntryDraft, EntryKind, EntryOrigin, EntryValidationError,
    RecurrenceRule, DEFAULT_CATEGORY,
};
pub use ids::EntryId;
pub use money::Money;
pub use month::Month;
