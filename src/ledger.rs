//! The ledger: entry store and budget table
//!
//! [`Ledger`] is the whole persisted document. It owns the flat list of
//! entries, the per-month budget table, and the id counter. It is a plain
//! value passed explicitly to services and reports; the binary loads one at
//! startup and saves it back after mutating commands.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryDraft, EntryId, Money, Month};

fn default_next_id() -> u64 {
    1
}

/// Entry store, budget table, and id counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    entries: Vec<Entry>,

    /// Month -> category -> budgeted amount
    #[serde(default)]
    budgets: BTreeMap<Month, BTreeMap<String, Money>>,

    /// Next id to assign; ids are never reused
    #[serde(default = "default_next_id")]
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            budgets: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a draft, assigning the next sequential id
    pub fn insert(&mut self, draft: EntryDraft) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(draft.into_entry(id));
        id
    }

    /// Get an entry by id
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Replace the stored entry whose id matches `updated.id`
    ///
    /// Returns false when no such entry exists. Ids themselves never change;
    /// replacement is keyed on the id.
    pub fn update(&mut self, updated: Entry) -> bool {
        match self.entries.iter_mut().find(|e| e.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Delete an entry by id, reporting whether it existed
    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered newest date first; entries sharing a date keep their
    /// insertion order
    pub fn list(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Entries with dates in `[start, end]`, both bounds inclusive, in
    /// store order
    pub fn entries_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect()
    }

    /// Entries whose category or description contains the query,
    /// case-insensitively, in store order
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.matches_query(query))
            .collect()
    }

    /// Replace a month's budget table wholesale
    ///
    /// An empty table clears the month.
    pub fn set_budgets(&mut self, month: Month, budgets: BTreeMap<String, Money>) {
        if budgets.is_empty() {
            self.budgets.remove(&month);
        } else {
            self.budgets.insert(month, budgets);
        }
    }

    /// Budgets for a month, if any were set
    pub fn budgets_for(&self, month: Month) -> Option<&BTreeMap<String, Money>> {
        self.budgets.get(&month)
    }

    /// Bump the id counter past every stored id
    ///
    /// Run after loading, so files written by hand (or by older versions)
    /// never lead to a reused id.
    pub fn normalize(&mut self) {
        let max_id = self
            .entries
            .iter()
            .map(|e| e.id.as_u64())
            .max()
            .unwrap_or(0);
        if self.next_id <= max_id {
            self.next_id = max_id + 1;
        }
    }
}
