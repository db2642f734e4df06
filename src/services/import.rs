//! CSV import service
//!
//! Reads entry rows from a CSV file by header name. A malformed row is
//! skipped, counted, and reported with its row number while the rest of the
//! batch continues; this is the one operation where partial failure is
//! tolerated instead of aborting.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{EntryDraft, EntryKind, Money};

/// One CSV row, matched to columns by header name. Unknown columns (such as
/// the `id` column written on export) are ignored, so a previously exported
/// file re-imports cleanly with fresh ids.
#[derive(Debug, Deserialize)]
struct EntryRow {
    #[serde(rename = "type")]
    kind: String,
    date: String,
    amount: String,
    category: Option<String>,
    description: Option<String>,
}

/// Outcome of a batch import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows inserted into the store
    pub imported: usize,
    /// Rows skipped because they could not be read or validated
    pub skipped: usize,
    /// Row number (1-based, not counting the header) and reason per skipped row
    pub row_errors: Vec<(usize, String)>,
}

impl ImportReport {
    fn record_error(&mut self, row: usize, message: String) {
        self.skipped += 1;
        self.row_errors.push((row, message));
    }
}

/// Service for importing entries from CSV
pub struct ImportService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Import entries from the CSV file at `path`
    pub fn import_file(&mut self, path: &Path) -> LedgerResult<ImportReport> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            LedgerError::Import(format!("Could not open {}: {}", path.display(), e))
        })?;
        self.import_from_reader(&mut reader)
    }

    /// Import entries from an open CSV reader
    ///
    /// Imported rows are always plain entries: a recurrence schedule does not
    /// survive an export/import round trip.
    pub fn import_from_reader<R: Read>(
        &mut self,
        reader: &mut csv::Reader<R>,
    ) -> LedgerResult<ImportReport> {
        let mut report = ImportReport::default();

        for (idx, result) in reader.deserialize::<EntryRow>().enumerate() {
            let row_number = idx + 1;
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    report.record_error(row_number, format!("unreadable row: {}", e));
                    continue;
                }
            };
            match self.insert_row(row) {
                Ok(()) => report.imported += 1,
                Err(e) => report.record_error(row_number, e.to_string()),
            }
        }

        Ok(report)
    }

    fn insert_row(&mut self, row: EntryRow) -> LedgerResult<()> {
        let kind: EntryKind = row
            .kind
            .parse()
            .map_err(|e| LedgerError::Validation(format!("{}", e)))?;

        let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d")
            .map_err(|_| LedgerError::Validation(format!("Invalid date: '{}'", row.date)))?;

        let amount = Money::parse(row.amount.trim())
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let draft = EntryDraft::new(
            kind,
            date,
            amount,
            row.category.unwrap_or_default(),
            row.description.unwrap_or_default(),
        );
        draft
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.ledger.insert(draft);
        Ok(())
    }
}
