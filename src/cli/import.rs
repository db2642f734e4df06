//! CSV import CLI command
//!
//! Handles importing entries from CSV files, reporting skipped rows
//! without aborting the run.

use std::path::Path;

use crate::display::format_import_report;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::services::ImportService;

/// Handle `import`
pub fn handle_import(ledger: &mut Ledger, file: &Path) -> LedgerResult<()> {
    let mut service = ImportService::new(ledger);
    let report = service.import_file(file)?;

    print!("{}", format_import_report(&report));

    Ok(())
}
