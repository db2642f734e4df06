//! Entry service
//!
//! Provides business logic for entry management: validated create, edit,
//! and delete. Validation failures come back as errors; prompting the user
//! again is the caller's concern.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{
    normalize_category, Entry, EntryDraft, EntryId, EntryKind, EntryOrigin, Money, RecurrenceRule,
};

/// Service for entry management
pub struct EntryService<'a> {
    ledger: &'a mut Ledger,
}

/// Input for creating a new entry
#[derive(Debug, Clone)]
pub struct CreateEntryInput {
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub amount: Money,
    pub category: Option<String>,
    pub description: Option<String>,
    /// When set, the entry is stored as a recurring template
    pub rule: Option<RecurrenceRule>,
}

/// Input for editing an entry; unset fields keep their value
#[derive(Debug, Clone, Default)]
pub struct UpdateEntryInput {
    pub kind: Option<EntryKind>,
    pub date: Option<NaiveDate>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub description: Option<String>,
    /// Recurrence change:
    /// - `None`: keep the schedule as it is
    /// - `Some(None)`: drop the schedule (template becomes a plain entry)
    /// - `Some(Some(rule))`: set or replace the schedule
    pub rule: Option<Option<RecurrenceRule>>,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Create a new entry
    pub fn create(&mut self, input: CreateEntryInput) -> LedgerResult<Entry> {
        let mut draft = EntryDraft::new(
            input.kind,
            input.date,
            input.amount,
            input.category.unwrap_or_default(),
            input.description.unwrap_or_default(),
        );
        if let Some(rule) = input.rule {
            draft = draft.with_origin(EntryOrigin::Template { rule });
        }

        draft
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let id = self.ledger.insert(draft.clone());
        Ok(draft.into_entry(id))
    }

    /// Edit an existing entry
    ///
    /// Any field but the id can change. Dropping the schedule of an entry
    /// that never had one is a no-op; in particular a generated occurrence
    /// keeps its provenance unless a new schedule explicitly replaces it.
    pub fn update(&mut self, id: EntryId, input: UpdateEntryInput) -> LedgerResult<Entry> {
        let mut entry = self
            .ledger
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;

        if let Some(kind) = input.kind {
            entry.kind = kind;
        }
        if let Some(date) = input.date {
            entry.date = date;
        }
        if let Some(amount) = input.amount {
            entry.amount = amount;
        }
        if let Some(category) = input.category {
            entry.category = normalize_category(&category);
        }
        if let Some(description) = input.description {
            entry.description = description;
        }
        if let Some(rule_change) = input.rule {
            match rule_change {
                Some(rule) => entry.origin = EntryOrigin::Template { rule },
                None => {
                    if entry.is_template() {
                        entry.origin = EntryOrigin::Plain;
                    }
                }
            }
        }

        if entry.amount.is_negative() {
            return Err(LedgerError::Validation(format!(
                "Amount must not be negative, got {}",
                entry.amount
            )));
        }

        self.ledger.update(entry.clone());
        Ok(entry)
    }

    /// Delete an entry, returning what was removed
    pub fn delete(&mut self, id: EntryId) -> LedgerResult<Entry> {
        let entry = self
            .ledger
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::entry_not_found(id.to_string()))?;

        self.ledger.delete(id);
        Ok(entry)
    }
}
