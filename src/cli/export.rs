//! CSV export CLI command
//!
//! Handles exporting all entries to a CSV file.

use std::path::Path;

use crate::error::LedgerResult;
use crate::export::export_entries_to_path;
use crate::ledger::Ledger;

/// Handle `export`
pub fn handle_export(ledger: &Ledger, file: &Path) -> LedgerResult<()> {
    let exported = export_entries_to_path(ledger, file)?;

    println!("Exported {} entries to {}", exported, file.display());

    Ok(())
}
