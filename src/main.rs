use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgerboard::cli::{
    handle_add_command, handle_budget_command, handle_export_command, handle_list_command,
    handle_summary_command, AddArgs, BudgetCommands, ExportArgs, ListArgs, SummaryArgs,
};
use ledgerboard::config::{paths::LedgerPaths, settings::Settings};
use ledgerboard::store::CsvLedgerStore;

#[derive(Parser)]
#[command(
    name = "ledgerboard",
    version,
    about = "Personal finance ledger with dashboard-style summaries",
    long_about = "Ledgerboard keeps income and expenses in a five-column CSV ledger \
                  and derives the views a finance dashboard shows: totals, running \
                  balance, category breakdowns, budgets, and a next-month estimate."
)]
struct Cli {
    /// Path to the ledger CSV file
    #[arg(long, global = true, env = "LEDGERBOARD_FILE")]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard summary for a date window
    Summary(SummaryArgs),

    /// Record a new transaction
    Add(AddArgs),

    /// List transactions, newest first
    List(ListArgs),

    /// Export filtered transactions as CSV
    Export(ExportArgs),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    paths.ensure_directories()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let ledger_path = cli
        .ledger
        .clone()
        .unwrap_or_else(|| settings.ledger_file(&paths));
    let mut store = CsvLedgerStore::new(ledger_path);

    match cli.command {
        Some(Commands::Summary(args)) => {
            handle_summary_command(&store, &settings, args)?;
        }
        Some(Commands::Add(args)) => {
            handle_add_command(&mut store, args)?;
        }
        Some(Commands::List(args)) => {
            handle_list_command(&store, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&store, args)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&store, &paths, &mut settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Ledgerboard Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", store.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Cache TTL:       {}s", settings.cache_ttl_secs);
            println!("  Budgets:         {}", settings.budgets.len());
        }
        None => {
            println!("Ledgerboard - personal finance ledger and summaries");
            println!();
            println!("Run 'ledgerboard --help' for usage information.");
            println!("Run 'ledgerboard summary' to see this month's dashboard.");
        }
    }

    Ok(())
}
