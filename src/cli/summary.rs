//! Summary CLI command
//!
//! Loads a snapshot, runs the dashboard pass over the requested window,
//! and prints the terminal rendering.

use clap::Args;

use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::loader::load;
use crate::reports::DashboardSummary;
use crate::store::LedgerStore;

use super::{category_set, resolve_window};

/// Arguments for the summary command
#[derive(Args)]
pub struct SummaryArgs {
    /// Window start (YYYY-MM-DD, defaults to the first of this month)
    #[arg(long)]
    pub from: Option<String>,

    /// Window end (YYYY-MM-DD, defaults to the last of this month)
    #[arg(long)]
    pub to: Option<String>,

    /// Restrict to these categories (repeatable, exact match)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,
}

/// Handle the summary command
pub fn handle_summary_command(
    store: &dyn LedgerStore,
    settings: &Settings,
    args: SummaryArgs,
) -> LedgerResult<()> {
    let (start, end) = resolve_window(args.from.as_deref(), args.to.as_deref())?;
    let filter = category_set(&args.categories);

    let outcome = load(store)?;
    let summary = DashboardSummary::generate(
        &outcome,
        start,
        end,
        filter.as_ref(),
        &settings.budgets,
    );

    print!("{}", summary.format_terminal());
    Ok(())
}
