//! Budget CLI commands
//!
//! Budgets live in the settings file, not in the ledger. `show` compares
//! them against the current month's spending.

use chrono::Local;
use clap::Subcommand;

use crate::analysis::{budget_vs_actual, filter_records};
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::loader::load;
use crate::models::{BudgetEntry, Money, MonthKey};
use crate::store::LedgerStore;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set or replace a monthly budget ceiling
    Set {
        /// Category substring the budget matches (case-insensitive)
        key: String,
        /// Monthly limit (e.g., "500" or "500.00")
        limit: String,
    },

    /// Remove a budget entry
    Remove {
        /// Key of the entry to remove
        key: String,
    },

    /// Show configured budgets against this month's spending
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &dyn LedgerStore,
    paths: &LedgerPaths,
    settings: &mut Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    match cmd {
        BudgetCommands::Set { key, limit } => {
            let limit = Money::parse(&limit).map_err(|e| {
                LedgerError::Validation(format!("invalid limit '{}': {}", limit, e))
            })?;
            if !limit.is_positive() {
                return Err(LedgerError::Validation(
                    "budget limit must be positive".to_string(),
                ));
            }

            let entry = BudgetEntry::new(key, limit);
            println!("Budget set: {}", entry);
            settings.set_budget(entry);
            settings.save(paths)?;
        }
        BudgetCommands::Remove { key } => {
            if settings.remove_budget(&key) {
                settings.save(paths)?;
                println!("Budget '{}' removed", key);
            } else {
                println!("No budget named '{}'", key);
            }
        }
        BudgetCommands::Show => {
            if settings.budgets.is_empty() {
                println!("No budgets configured. Use 'budget set KEY LIMIT' to add one.");
                return Ok(());
            }

            let month = MonthKey::from_date(Local::now().date_naive());
            let outcome = load(store)?;
            let records = filter_records(
                &outcome.records,
                month.start_date(),
                month.end_date(),
                None,
            );
            let lines = budget_vs_actual(&records, &settings.budgets);

            println!("Budgets for {}", month);
            println!("{}", "-".repeat(72));
            for line in &lines {
                println!(
                    "  {:<24} {:>12} / {:>12} {:>7.1}%  {}",
                    line.entry.key,
                    line.actual.to_string(),
                    line.entry.monthly_limit.to_string(),
                    line.percentage,
                    line.band
                );
            }
        }
    }
    Ok(())
}
