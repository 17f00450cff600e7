//! CLI command handlers
//!
//! Bridges clap argument parsing with the loader, analysis, and service
//! layers. One file per command group, `handle_*_command` free functions.

pub mod budget;
pub mod summary;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use summary::{handle_summary_command, SummaryArgs};
pub use transaction::{
    handle_add_command, handle_export_command, handle_list_command, AddArgs, ExportArgs, ListArgs,
};

use std::collections::HashSet;

use chrono::{Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::MonthKey;

/// Parse a `YYYY-MM-DD` CLI argument
pub(crate) fn parse_date_arg(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| LedgerError::Validation(format!("invalid date '{}', expected YYYY-MM-DD", value)))
}

/// Resolve the reporting window from optional `--from`/`--to` arguments
///
/// Defaults to the current calendar month when neither bound is given.
/// A single bound keeps the other at the month edge.
pub(crate) fn resolve_window(
    from: Option<&str>,
    to: Option<&str>,
) -> LedgerResult<(NaiveDate, NaiveDate)> {
    let current = MonthKey::from_date(Local::now().date_naive());

    let start = match from {
        Some(value) => parse_date_arg(value)?,
        None => current.start_date(),
    };
    let end = match to {
        Some(value) => parse_date_arg(value)?,
        None => current.end_date(),
    };

    if end < start {
        return Err(LedgerError::Validation(format!(
            "window end {} is before start {}",
            end, start
        )));
    }
    Ok((start, end))
}

/// Turn repeatable `--category` arguments into a filter set
///
/// An empty argument list means "no filter", not "match nothing".
pub(crate) fn category_set(categories: &[String]) -> Option<HashSet<String>> {
    if categories.is_empty() {
        None
    } else {
        Some(categories.iter().cloned().collect())
    }
}
