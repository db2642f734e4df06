//! Budget service
//!
//! Sets per-category budgets one month at a time. Setting a month replaces
//! that month's table wholesale; other months are untouched.

use std::collections::BTreeMap;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Money, Month};

/// Service for budget management
pub struct BudgetService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Replace a month's budgets
    ///
    /// An empty table clears the month entirely.
    pub fn set_month(&mut self, month: Month, budgets: BTreeMap<String, Money>) -> LedgerResult<()> {
        for (category, amount) in &budgets {
            if amount.is_negative() {
                return Err(LedgerError::Budget(format!(
                    "Budget for '{}' must not be negative, got {}",
                    category, amount
                )));
            }
        }

        self.ledger.set_budgets(month, budgets);
        Ok(())
    }

    /// Parse `CATEGORY=AMOUNT` pairs as given on the command line
    pub fn parse_pairs(pairs: &[String]) -> LedgerResult<BTreeMap<String, Money>> {
        let mut budgets = BTreeMap::new();

        for pair in pairs {
            let (category, amount) = pair.split_once('=').ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Expected CATEGORY=AMOUNT, got '{}'",
                    pair
                ))
            })?;

            let category = category.trim();
            if category.is_empty() {
                return Err(LedgerError::Validation(format!(
                    "Budget category cannot be empty in '{}'",
                    pair
                )));
            }

            let amount = Money::parse(amount)
                .map_err(|e| LedgerError::Validation(e.to_string()))?;

            budgets.insert(category.to_string(), amount);
        }

        Ok(budgets)
    }
}
