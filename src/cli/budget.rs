//! Budget CLI commands
//!
//! Implements budget management commands for setting and inspecting
//! per-category monthly budgets.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use clap::Subcommand;

use crate::cli::parse_month;
use crate::config::settings::Settings;
use crate::display::format_budget_table;
use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::Month;
use crate::services::BudgetService;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budgets for a month, replacing any previous ones
    Set {
        /// Month (YYYY-MM)
        month: String,
        /// Budgets as CATEGORY=AMOUNT pairs (none clears the month)
        pairs: Vec<String>,
    },
    /// Show the budgets for a month
    Show {
        /// Month (YYYY-MM), defaults to the current month
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    ledger: &mut Ledger,
    settings: &Settings,
    cmd: BudgetCommands,
    today: NaiveDate,
) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set { month, pairs } => {
            let month = parse_month(&month)?;
            let budgets = BudgetService::parse_pairs(&pairs)?;
            let cleared = budgets.is_empty();

            let mut service = BudgetService::new(ledger);
            service.set_month(month, budgets.clone())?;

            if cleared {
                println!("Cleared budgets for {}.", month);
            } else {
                println!("Saved {} budget(s) for {}.", budgets.len(), month);
                print!(
                    "{}",
                    format_budget_table(month, &budgets, &settings.currency_symbol)
                );
            }
        }
        BudgetCommands::Show { month } => {
            let month = match month {
                Some(raw) => parse_month(&raw)?,
                None => Month::containing(today),
            };

            let table = match ledger.budgets_for(month) {
                Some(budgets) => format_budget_table(month, budgets, &settings.currency_symbol),
                None => format_budget_table(month, &BTreeMap::new(), &settings.currency_symbol),
            };
            print!("{}", table);
        }
    }

    Ok(())
}
