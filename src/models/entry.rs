//! Ledger entry model
//!
//! Represents income and expense entries, including recurring templates and
//! the occurrences generated from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::money::Money;

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "Other";

/// Direction of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = EntryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(EntryValidationError::UnknownKind(s.to_string())),
        }
    }
}

/// Schedule attached to a recurring template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    /// Days between occurrences, at least 1
    pub interval_days: u32,

    /// Last date (inclusive) on which an occurrence may fall
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<NaiveDate>,
}

impl RecurrenceRule {
    /// Create a rule. A zero-day interval would never advance the schedule
    /// and is rejected.
    pub fn new(interval_days: u32, until: Option<NaiveDate>) -> Result<Self, EntryValidationError> {
        if interval_days == 0 {
            return Err(EntryValidationError::NonPositiveInterval);
        }
        Ok(Self {
            interval_days,
            until,
        })
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.until {
            Some(until) => write!(
                f,
                "every {} days until {}",
                self.interval_days,
                until.format("%Y-%m-%d")
            ),
            None => write!(f, "every {} days", self.interval_days),
        }
    }
}

/// How an entry came to exist
///
/// A rule lives only on the `Template` variant, so a generated occurrence
/// cannot itself spawn further occurrences. Occurrences keep the id of the
/// template that produced them, which is what the expander deduplicates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryOrigin {
    /// Entered directly, no schedule
    #[default]
    Plain,
    /// Recurring template; the expander materializes its occurrences
    Template { rule: RecurrenceRule },
    /// Generated from a template by the expander
    Occurrence { template: EntryId },
}

impl EntryOrigin {
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }

    pub fn is_template(&self) -> bool {
        matches!(self, Self::Template { .. })
    }

    /// The schedule, for templates
    pub fn rule(&self) -> Option<&RecurrenceRule> {
        match self {
            Self::Template { rule } => Some(rule),
            _ => None,
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned by the store
    pub id: EntryId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: EntryKind,

    /// Date the entry occurred
    pub date: NaiveDate,

    /// Amount, always non-negative; direction comes from `kind`
    pub amount: Money,

    /// Spending category
    pub category: String,

    /// Free-form note
    #[serde(default)]
    pub description: String,

    /// Plain, template, or generated occurrence
    #[serde(default, skip_serializing_if = "EntryOrigin::is_plain")]
    pub origin: EntryOrigin,
}

impl Entry {
    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    pub fn is_template(&self) -> bool {
        self.origin.is_template()
    }

    /// Check whether this entry was generated from the given template
    pub fn is_occurrence_of(&self, template: EntryId) -> bool {
        matches!(self.origin, EntryOrigin::Occurrence { template: t } if t == template)
    }

    /// Amount with the reporting sign convention applied: expenses count
    /// positive, income counts negative
    pub fn net_amount(&self) -> Money {
        match self.kind {
            EntryKind::Expense => self.amount,
            EntryKind::Income => -self.amount,
        }
    }

    /// Case-insensitive substring match against category or description
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.category.to_lowercase().contains(&q) || self.description.to_lowercase().contains(&q)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.category
        )
    }
}

/// Fields of an entry before the store has assigned it an id
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub origin: EntryOrigin,
}

impl EntryDraft {
    /// Create a draft. Blank categories fall back to [`DEFAULT_CATEGORY`].
    pub fn new(
        kind: EntryKind,
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            date,
            amount,
            category: normalize_category(&category.into()),
            description: description.into(),
            origin: EntryOrigin::Plain,
        }
    }

    /// Attach an origin (template rule or occurrence provenance)
    pub fn with_origin(mut self, origin: EntryOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Validate the draft
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.amount.is_negative() {
            return Err(EntryValidationError::NegativeAmount(self.amount));
        }
        if let EntryOrigin::Template { rule } = &self.origin {
            if rule.interval_days == 0 {
                return Err(EntryValidationError::NonPositiveInterval);
            }
        }
        Ok(())
    }

    /// Turn the draft into a stored entry with the given id
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            kind: self.kind,
            date: self.date,
            amount: self.amount,
            category: self.category,
            description: self.description,
            origin: self.origin,
        }
    }
}

/// Trim a category name, falling back to [`DEFAULT_CATEGORY`] when blank
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    NegativeAmount(Money),
    NonPositiveInterval,
    UnknownKind(String),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative, got {}", amount)
            }
            Self::NonPositiveInterval => {
                write!(f, "Recurrence interval must be at least 1 day")
            }
            Self::UnknownKind(s) => {
                write!(f, "Unknown entry kind: {} (expected income or expense)", s)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}
