use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_add, handle_apply, handle_budget_command, handle_delete, handle_demo, handle_edit,
    handle_export, handle_import, handle_list, handle_report_command, handle_search, AddArgs,
    BudgetCommands, EditArgs, ReportCommands,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "Tally is a terminal-based personal finance ledger. It records \
                  income and expense entries in a single JSON file, expands \
                  recurring templates into dated occurrences, and reports monthly \
                  and yearly flows against per-category budgets."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an income or expense entry
    Add(AddArgs),

    /// List recent entries, newest first
    #[command(alias = "ls")]
    List {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete {
        /// Entry ID
        id: u64,
    },

    /// Search entries by category and description
    Search {
        /// Search text (case-insensitive)
        query: String,
    },

    /// Generate due occurrences from recurring templates
    Apply {
        /// Expand schedules up to this date (YYYY-MM-DD), defaults to today
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports over the recorded entries
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all entries to a CSV file
    Export {
        /// Output file
        #[arg(default_value = "export.csv")]
        file: PathBuf,
    },

    /// Import entries from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Seed a handful of sample entries
    Demo,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    let mut ledger = storage.load()?;

    let today = chrono::Local::now().date_naive();

    match cli.command {
        Some(Commands::Add(args)) => {
            handle_add(&mut ledger, &settings, args, today)?;
            storage.save(&ledger)?;
        }
        Some(Commands::List { limit }) => {
            handle_list(&ledger, &settings, limit)?;
        }
        Some(Commands::Edit(args)) => {
            handle_edit(&mut ledger, &settings, args)?;
            storage.save(&ledger)?;
        }
        Some(Commands::Delete { id }) => {
            handle_delete(&mut ledger, &settings, id)?;
            storage.save(&ledger)?;
        }
        Some(Commands::Search { query }) => {
            handle_search(&ledger, &settings, &query)?;
        }
        Some(Commands::Apply { as_of }) => {
            handle_apply(&mut ledger, as_of, today)?;
            storage.save(&ledger)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mutating = matches!(cmd, BudgetCommands::Set { .. });
            handle_budget_command(&mut ledger, &settings, cmd, today)?;
            if mutating {
                storage.save(&ledger)?;
            }
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&ledger, &settings, cmd, today)?;
        }
        Some(Commands::Export { file }) => {
            handle_export(&ledger, &file)?;
        }
        Some(Commands::Import { file }) => {
            handle_import(&mut ledger, &file)?;
            storage.save(&ledger)?;
        }
        Some(Commands::Demo) => {
            handle_demo(&mut ledger, &settings, today)?;
            storage.save(&ledger)?;
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Data directory: {}", paths.data_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  List limit:      {}", settings.list_limit);
        }
        None => {
            println!("tally - Terminal-based personal finance ledger");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally demo' to seed a few sample entries.");
        }
    }

    Ok(())
}
