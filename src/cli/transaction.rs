//! Transaction CLI commands
//!
//! Add, list, and export. Add writes through the append service; list and
//! export run the same load-filter pipeline as the summary view.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::analysis::filter_records;
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_records_csv;
use crate::loader::load;
use crate::models::{Money, TxnKind};
use crate::services::{append_transaction, NewTransaction};
use crate::store::LedgerStore;

use super::{category_set, parse_date_arg, resolve_window};

/// Arguments for the add command
#[derive(Args)]
pub struct AddArgs {
    /// income or expense
    pub kind: String,

    /// Category label
    pub category: String,

    /// Amount (e.g., "100" or "100.50")
    pub amount: String,

    /// Transaction date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Free-text note
    #[arg(short, long)]
    pub note: Option<String>,
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Window start (YYYY-MM-DD, defaults to the first of this month)
    #[arg(long)]
    pub from: Option<String>,

    /// Window end (YYYY-MM-DD, defaults to the last of this month)
    #[arg(long)]
    pub to: Option<String>,

    /// Restrict to these categories (repeatable, exact match)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Window start (YYYY-MM-DD, defaults to the first of this month)
    #[arg(long)]
    pub from: Option<String>,

    /// Window end (YYYY-MM-DD, defaults to the last of this month)
    #[arg(long)]
    pub to: Option<String>,

    /// Restrict to these categories (repeatable, exact match)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the add command
pub fn handle_add_command(store: &mut dyn LedgerStore, args: AddArgs) -> LedgerResult<()> {
    let kind = TxnKind::parse(&args.kind).ok_or_else(|| {
        LedgerError::Validation(format!(
            "unknown kind '{}', expected income or expense",
            args.kind
        ))
    })?;
    let amount = Money::parse(&args.amount)
        .map_err(|e| LedgerError::Validation(format!("invalid amount '{}': {}", args.amount, e)))?;
    let date = match args.date.as_deref() {
        Some(value) => parse_date_arg(value)?,
        None => Local::now().date_naive(),
    };

    let input = NewTransaction {
        date,
        kind,
        category: args.category,
        amount,
        note: args.note.unwrap_or_default(),
    };
    append_transaction(store, &input)?;

    println!(
        "Recorded {} of {} in '{}' on {}",
        kind, amount, input.category, date
    );
    Ok(())
}

/// Handle the list command
pub fn handle_list_command(store: &dyn LedgerStore, args: ListArgs) -> LedgerResult<()> {
    let (start, end) = resolve_window(args.from.as_deref(), args.to.as_deref())?;
    let filter = category_set(&args.categories);

    let outcome = load(store)?;
    let mut records = filter_records(&outcome.records, start, end, filter.as_ref());

    // Newest first; stable so same-day rows keep insertion order
    records.sort_by_key(|r| std::cmp::Reverse(r.date));
    records.truncate(args.limit);

    if records.is_empty() {
        println!("No transactions between {} and {}", start, end);
        return Ok(());
    }

    println!(
        "{:<12} {:<8} {:<24} {:>12}  {}",
        "Date", "Kind", "Category", "Amount", "Note"
    );
    println!("{}", "-".repeat(72));
    for record in &records {
        println!(
            "{:<12} {:<8} {:<24} {:>12}  {}",
            record.date.format("%Y-%m-%d").to_string(),
            record.kind.to_string(),
            record.category,
            record.amount.to_string(),
            record.note
        );
    }

    if !outcome.rejected.is_empty() {
        println!();
        println!(
            "Note: {} malformed row(s) were excluded during load",
            outcome.rejected.len()
        );
    }
    Ok(())
}

/// Handle the export command
pub fn handle_export_command(store: &dyn LedgerStore, args: ExportArgs) -> LedgerResult<()> {
    let (start, end) = resolve_window(args.from.as_deref(), args.to.as_deref())?;
    let filter = category_set(&args.categories);

    let outcome = load(store)?;
    let records = filter_records(&outcome.records, start, end, filter.as_ref());

    match args.output {
        Some(path) => {
            let mut file = File::create(&path).map_err(|e| {
                LedgerError::Export(format!("cannot create {}: {}", path.display(), e))
            })?;
            export_records_csv(&records, &mut file)?;
            println!("Exported {} transaction(s) to {}", records.len(), path.display());
        }
        None => {
            export_records_csv(&records, &mut io::stdout())?;
        }
    }
    Ok(())
}
