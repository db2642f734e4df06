//! Demo data service
//!
//! Seeds a fixed set of sample entries so a fresh ledger has something to
//! report on. The set is deterministic for a given day and includes one
//! recurring template for the expander to pick up.

use chrono::{Duration, NaiveDate};

use crate::ledger::Ledger;
use crate::models::{EntryDraft, EntryKind, EntryOrigin, Money, RecurrenceRule};

/// Service for seeding sample data
pub struct DemoService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> DemoService<'a> {
    /// Create a new demo service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Insert the sample set, dated relative to `today`. Returns the number
    /// of entries inserted.
    pub fn seed(&mut self, today: NaiveDate) -> usize {
        let drafts = sample_drafts(today);
        let count = drafts.len();
        for draft in drafts {
            self.ledger.insert(draft);
        }
        count
    }
}

/// Recent income and expenses plus one recurring subscription template,
/// dated far enough back that `apply` has an occurrence to generate.
fn sample_drafts(today: NaiveDate) -> Vec<EntryDraft> {
    let day = |back: i64| today - Duration::days(back);

    vec![
        EntryDraft::new(
            EntryKind::Income,
            day(25),
            Money::from_cents(2_400_00),
            "Salary",
            "Monthly pay",
        ),
        EntryDraft::new(
            EntryKind::Expense,
            day(20),
            Money::from_cents(84_30),
            "Food",
            "Groceries",
        ),
        EntryDraft::new(
            EntryKind::Expense,
            day(14),
            Money::from_cents(42_00),
            "Transport",
            "Fuel",
        ),
        EntryDraft::new(
            EntryKind::Expense,
            day(10),
            Money::from_cents(120_75),
            "Bills",
            "Electricity",
        ),
        EntryDraft::new(
            EntryKind::Expense,
            day(6),
            Money::from_cents(18_99),
            "Shopping",
            "Paperback",
        ),
        EntryDraft::new(
            EntryKind::Expense,
            day(3),
            Money::from_cents(64_50),
            "Food",
            "Restaurant",
        ),
        EntryDraft::new(
            EntryKind::Expense,
            day(35),
            Money::from_cents(9_99),
            "Bills",
            "Streaming subscription",
        )
        .with_origin(EntryOrigin::Template {
            rule: RecurrenceRule {
                interval_days: 30,
                until: None,
            },
        }),
    ]
}
