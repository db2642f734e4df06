//! Recurring-entry CLI command
//!
//! Implements `apply`, which expands recurring templates into concrete
//! occurrences up to a cutoff date.

use chrono::NaiveDate;

use crate::cli::parse_date;
use crate::display::format_expansion_summary;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::services::RecurringService;

/// Handle `apply`
pub fn handle_apply(
    ledger: &mut Ledger,
    as_of: Option<String>,
    today: NaiveDate,
) -> LedgerResult<()> {
    let cutoff = match as_of {
        Some(raw) => parse_date(&raw)?,
        None => today,
    };

    let mut service = RecurringService::new(ledger);
    let summary = service.apply(cutoff);

    print!("{}", format_expansion_summary(&summary));

    Ok(())
}
