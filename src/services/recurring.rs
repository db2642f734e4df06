//! Recurring entry expansion
//!
//! Walks every template's schedule from its start date up to today (and its
//! `until` bound, when set) and materializes the occurrences that do not
//! exist yet. Occurrences are matched to their template by id, so running
//! the expansion twice generates nothing new, and two templates that happen
//! to share every field still expand independently.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use crate::ledger::Ledger;
use crate::models::{Entry, EntryDraft, EntryOrigin};

/// Outcome of one expansion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionSummary {
    /// Templates considered
    pub templates: usize,
    /// Occurrences inserted
    pub generated: usize,
}

/// Service for recurring entry expansion
pub struct RecurringService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> RecurringService<'a> {
    /// Create a new recurring service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Materialize all occurrences due on or before `today`
    ///
    /// For each template the schedule is walked from the template date in
    /// whole-interval steps; the template date itself is never an
    /// occurrence. A step is skipped when an occurrence of this template
    /// already exists on that date, so occurrences edited to a different
    /// amount or category stay untouched and are not produced again.
    pub fn apply(&mut self, today: NaiveDate) -> ExpansionSummary {
        let templates: Vec<Entry> = self
            .ledger
            .entries()
            .iter()
            .filter(|e| e.is_template())
            .cloned()
            .collect();

        let mut summary = ExpansionSummary {
            templates: templates.len(),
            ..Default::default()
        };

        for template in &templates {
            let Some(rule) = template.origin.rule().copied() else {
                continue;
            };
            // A stored zero interval (hand-edited file) would never advance
            if rule.interval_days == 0 {
                continue;
            }

            let existing: HashSet<NaiveDate> = self
                .ledger
                .entries()
                .iter()
                .filter(|e| e.is_occurrence_of(template.id))
                .map(|e| e.date)
                .collect();

            let step = Duration::days(i64::from(rule.interval_days));
            let mut cursor = template.date + step;
            loop {
                if cursor > today {
                    break;
                }
                if rule.until.is_some_and(|until| cursor > until) {
                    break;
                }

                if !existing.contains(&cursor) {
                    self.ledger.insert(
                        EntryDraft::new(
                            template.kind,
                            cursor,
                            template.amount,
                            template.category.clone(),
                            template.description.clone(),
                        )
                        .with_origin(EntryOrigin::Occurrence {
                            template: template.id,
                        }),
                    );
                    summary.generated += 1;
                }

                cursor += step;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Money, RecurrenceRule};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent_template(ledger: &mut Ledger, until: Option<NaiveDate>) -> crate::models::EntryId {
        ledger.insert(
            EntryDraft::new(
                EntryKind::Expense,
                date(2024, 1, 1),
                Money::from_cents(10_000),
                "Rent",
                "monthly rent",
            )
            .with_origin(EntryOrigin::Template {
                rule: RecurrenceRule::new(30, until).unwrap(),
            }),
        )
    }

    fn occurrence_dates(ledger: &Ledger, template: crate::models::EntryId) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = ledger
            .entries()
            .iter()
            .filter(|e| e.is_occurrence_of(template))
            .map(|e| e.date)
            .collect();
        dates.sort();
        dates
    }

    #[test]
    fn test_expansion_respects_until_and_today() {
        let mut ledger = Ledger::new();
        let template = rent_template(&mut ledger, Some(date(2024, 3, 15)));

        let summary = RecurringService::new(&mut ledger).apply(date(2024, 4, 1));

        assert_eq!(summary.templates, 1);
        assert_eq!(summary.generated, 2);
        assert_eq!(
            occurrence_dates(&ledger, template),
            vec![date(2024, 1, 31), date(2024, 3, 1)]
        );
    }

    #[test]
    fn test_generated_occurrences_copy_template_fields() {
        let mut ledger = Ledger::new();
        let template = rent_template(&mut ledger, None);

        RecurringService::new(&mut ledger).apply(date(2024, 2, 15));

        let occurrences: Vec<&Entry> = ledger
            .entries()
            .iter()
            .filter(|e| e.is_occurrence_of(template))
            .collect();
        assert_eq!(occurrences.len(), 1);

        let occ = occurrences[0];
        assert_eq!(occ.kind, EntryKind::Expense);
        assert_eq!(occ.amount, Money::from_cents(10_000));
        assert_eq!(occ.category, "Rent");
        assert_eq!(occ.description, "monthly rent");
        assert!(!occ.is_template());
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let mut ledger = Ledger::new();
        rent_template(&mut ledger, Some(date(2024, 3, 15)));

        let first = RecurringService::new(&mut ledger).apply(date(2024, 4, 1));
        assert_eq!(first.generated, 2);
        let count = ledger.count();

        let second = RecurringService::new(&mut ledger).apply(date(2024, 4, 1));
        assert_eq!(second.generated, 0);
        assert_eq!(ledger.count(), count);
    }

    #[test]
    fn test_expansion_fills_around_existing_occurrence() {
        let mut ledger = Ledger::new();
        let template = rent_template(&mut ledger, None);

        // The first occurrence already exists; the walk must step past it
        // without stalling and still produce the later ones.
        ledger.insert(
            EntryDraft::new(
                EntryKind::Expense,
                date(2024, 1, 31),
                Money::from_cents(10_000),
                "Rent",
                "monthly rent",
            )
            .with_origin(EntryOrigin::Occurrence { template }),
        );

        let summary = RecurringService::new(&mut ledger).apply(date(2024, 3, 10));

        assert_eq!(summary.generated, 1);
        assert_eq!(
            occurrence_dates(&ledger, template),
            vec![date(2024, 1, 31), date(2024, 3, 1)]
        );
    }

    #[test]
    fn test_edited_occurrence_is_not_regenerated() {
        let mut ledger = Ledger::new();
        let template = rent_template(&mut ledger, None);

        RecurringService::new(&mut ledger).apply(date(2024, 2, 15));

        // Edit the generated occurrence's amount
        let occ_id = ledger
            .entries()
            .iter()
            .find(|e| e.is_occurrence_of(template))
            .map(|e| e.id)
            .unwrap();
        let mut edited = ledger.get(occ_id).unwrap().clone();
        edited.amount = Money::from_cents(9_500);
        ledger.update(edited);

        let summary = RecurringService::new(&mut ledger).apply(date(2024, 2, 15));
        assert_eq!(summary.generated, 0);
        assert_eq!(ledger.get(occ_id).unwrap().amount, Money::from_cents(9_500));
    }

    #[test]
    fn test_until_bound_is_inclusive() {
        let mut ledger = Ledger::new();
        let template = ledger.insert(
            EntryDraft::new(
                EntryKind::Expense,
                date(2024, 1, 1),
                Money::from_cents(500),
                "Gym",
                "",
            )
            .with_origin(EntryOrigin::Template {
                rule: RecurrenceRule::new(14, Some(date(2024, 1, 15))).unwrap(),
            }),
        );

        RecurringService::new(&mut ledger).apply(date(2024, 2, 1));

        assert_eq!(occurrence_dates(&ledger, template), vec![date(2024, 1, 15)]);
    }

    #[test]
    fn test_no_occurrence_on_or_before_template_date() {
        let mut ledger = Ledger::new();
        let template = rent_template(&mut ledger, None);

        // Today is the template date: the walk starts one interval later
        let summary = RecurringService::new(&mut ledger).apply(date(2024, 1, 1));
        assert_eq!(summary.generated, 0);
        assert!(occurrence_dates(&ledger, template).is_empty());
    }

    #[test]
    fn test_identical_templates_expand_independently() {
        let mut ledger = Ledger::new();
        let a = rent_template(&mut ledger, None);
        let b = rent_template(&mut ledger, None);

        let summary = RecurringService::new(&mut ledger).apply(date(2024, 3, 10));

        assert_eq!(summary.templates, 2);
        assert_eq!(summary.generated, 4);
        assert_eq!(
            occurrence_dates(&ledger, a),
            vec![date(2024, 1, 31), date(2024, 3, 1)]
        );
        assert_eq!(
            occurrence_dates(&ledger, b),
            vec![date(2024, 1, 31), date(2024, 3, 1)]
        );
    }

    #[test]
    fn test_occurrences_do_not_chain() {
        let mut ledger = Ledger::new();
        rent_template(&mut ledger, None);

        RecurringService::new(&mut ledger).apply(date(2024, 6, 1));
        let after_first = ledger.count();

        // Generated occurrences carry no rule, so a later run only extends
        // the original template's schedule.
        let summary = RecurringService::new(&mut ledger).apply(date(2024, 6, 1));
        assert_eq!(summary.templates, 1);
        assert_eq!(summary.generated, 0);
        assert_eq!(ledger.count(), after_first);
    }

    #[test]
    fn test_zero_interval_template_is_skipped() {
        let mut ledger = Ledger::new();
        // Bypasses RecurrenceRule::new, as a hand-edited data file could
        ledger.insert(
            EntryDraft::new(
                EntryKind::Expense,
                date(2024, 1, 1),
                Money::from_cents(100),
                "Broken",
                "",
            )
            .with_origin(EntryOrigin::Template {
                rule: RecurrenceRule {
                    interval_days: 0,
                    until: None,
                },
            }),
        );

        let summary = RecurringService::new(&mut ledger).apply(date(2024, 2, 1));
        assert_eq!(summary.templates, 1);
        assert_eq!(summary.generated, 0);
    }

    #[test]
    fn test_empty_ledger() {
        let mut ledger = Ledger::new();
        let summary = RecurringService::new(&mut ledger).apply(date(2024, 1, 1));
        assert_eq!(summary, ExpansionSummary::default());
    }
}
