//! Export module for tally
//!
//! Writes entry data to CSV for spreadsheets and re-import.

pub mod csv;

pub use csv::{export_entries_csv, export_entries_to_path};
