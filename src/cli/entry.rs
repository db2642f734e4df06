//! Entry CLI commands
//!
//! Implements the add/list/edit/delete/search commands plus the demo
//! seeder, bridging clap argument parsing with the service layer.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::cli::parse_date;
use crate::config::settings::Settings;
use crate::display::{format_entry_register, format_entry_row};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{EntryId, EntryKind, Money, RecurrenceRule};
use crate::services::{CreateEntryInput, DemoService, EntryService, UpdateEntryInput};

/// Entry kind as it appears on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Money going out
    Expense,
    /// Money coming in
    Income,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Expense => EntryKind::Expense,
            KindArg::Income => EntryKind::Income,
        }
    }
}

/// Arguments for `add`
#[derive(Args)]
pub struct AddArgs {
    /// Entry kind
    #[arg(value_enum)]
    pub kind: KindArg,
    /// Amount (e.g., "42.50")
    pub amount: String,
    /// Entry date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Category name
    #[arg(short, long)]
    pub category: Option<String>,
    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,
    /// Repeat every N days, storing the entry as a recurring template
    #[arg(long, value_name = "DAYS")]
    pub every: Option<u32>,
    /// Last date the schedule may generate (YYYY-MM-DD)
    #[arg(long, requires = "every", value_name = "DATE")]
    pub until: Option<String>,
}

/// Arguments for `edit`; unset flags keep the current value
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    pub id: u64,
    /// New kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
    /// New amount
    #[arg(short, long)]
    pub amount: Option<String>,
    /// New date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
    /// New description
    #[arg(long)]
    pub description: Option<String>,
    /// Repeat every N days, setting or replacing the schedule
    #[arg(long, value_name = "DAYS")]
    pub every: Option<u32>,
    /// Last date the schedule may generate (YYYY-MM-DD)
    #[arg(long, requires = "every", value_name = "DATE")]
    pub until: Option<String>,
    /// Drop the recurrence schedule, keeping the entry itself
    #[arg(long, conflicts_with_all = ["every", "until"])]
    pub no_recurrence: bool,
}

/// Handle `add`
pub fn handle_add(
    ledger: &mut Ledger,
    settings: &Settings,
    args: AddArgs,
    today: NaiveDate,
) -> LedgerResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '42.50' or '100'. Error: {}",
            args.amount, e
        ))
    })?;

    let date = match args.date {
        Some(raw) => parse_date(&raw)?,
        None => today,
    };

    let rule = match args.every {
        Some(days) => {
            let until = match args.until {
                Some(raw) => Some(parse_date(&raw)?),
                None => None,
            };
            let rule = RecurrenceRule::new(days, until)
                .map_err(|e| LedgerError::Validation(e.to_string()))?;
            Some(rule)
        }
        None => None,
    };

    let mut service = EntryService::new(ledger);
    let entry = service.create(CreateEntryInput {
        kind: args.kind.into(),
        date,
        amount,
        category: args.category,
        description: args.description,
        rule,
    })?;

    println!("Added:");
    println!("{}", format_entry_row(&entry, &settings.currency_symbol));
    if entry.is_template() {
        println!("This entry is a recurring template; run 'tally apply' to generate occurrences.");
    }

    Ok(())
}

/// Handle `list`
pub fn handle_list(
    ledger: &Ledger,
    settings: &Settings,
    limit: Option<usize>,
) -> LedgerResult<()> {
    let limit = limit.unwrap_or(settings.list_limit);
    let entries = ledger.list();
    let shown: Vec<&_> = entries.iter().take(limit).copied().collect();

    print!(
        "{}",
        format_entry_register(&shown, &settings.currency_symbol)
    );
    if entries.len() > shown.len() {
        println!("({} of {} entries; use --limit to see more)", shown.len(), entries.len());
    }

    Ok(())
}

/// Handle `edit`
pub fn handle_edit(ledger: &mut Ledger, settings: &Settings, args: EditArgs) -> LedgerResult<()> {
    let amount = match args.amount {
        Some(raw) => Some(Money::parse(&raw).map_err(|e| {
            LedgerError::Validation(format!(
                "Invalid amount format: '{}'. Use format like '42.50' or '100'. Error: {}",
                raw, e
            ))
        })?),
        None => None,
    };

    let date = match args.date {
        Some(raw) => Some(parse_date(&raw)?),
        None => None,
    };

    let rule = if args.no_recurrence {
        Some(None)
    } else if let Some(days) = args.every {
        let until = match args.until {
            Some(raw) => Some(parse_date(&raw)?),
            None => None,
        };
        let rule = RecurrenceRule::new(days, until)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        Some(Some(rule))
    } else {
        None
    };

    let mut service = EntryService::new(ledger);
    let entry = service.update(
        EntryId::new(args.id),
        UpdateEntryInput {
            kind: args.kind.map(Into::into),
            date,
            amount,
            category: args.category,
            description: args.description,
            rule,
        },
    )?;

    println!("Updated:");
    println!("{}", format_entry_row(&entry, &settings.currency_symbol));

    Ok(())
}

/// Handle `delete`
pub fn handle_delete(ledger: &mut Ledger, settings: &Settings, id: u64) -> LedgerResult<()> {
    let mut service = EntryService::new(ledger);
    let entry = service.delete(EntryId::new(id))?;

    println!(
        "Deleted entry {} ({} {})",
        entry.id,
        entry.category,
        entry.amount.format_with_symbol(&settings.currency_symbol)
    );

    Ok(())
}

/// Handle `search`
pub fn handle_search(ledger: &Ledger, settings: &Settings, query: &str) -> LedgerResult<()> {
    let matches = ledger.search(query);

    if matches.is_empty() {
        println!("No entries match '{}'.", query);
        return Ok(());
    }

    println!("{} match(es) for '{}':", matches.len(), query);
    print!(
        "{}",
        format_entry_register(&matches, &settings.currency_symbol)
    );

    Ok(())
}

/// Handle `demo`
pub fn handle_demo(
    ledger: &mut Ledger,
    settings: &Settings,
    today: NaiveDate,
) -> LedgerResult<()> {
    let mut service = DemoService::new(ledger);
    let seeded = service.seed(today);

    println!("Seeded {} sample entries.", seeded);
    let entries = ledger.list();
    let shown: Vec<&_> = entries.iter().take(seeded).copied().collect();
    print!(
        "{}",
        format_entry_register(&shown, &settings.currency_symbol)
    );

    Ok(())
}
