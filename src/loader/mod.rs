//! Ledger loading and normalization
//!
//! Turns the store's raw field-keyed rows into typed `TransactionRecord`s
//! with a guaranteed schema. Missing columns are synthesized as empty
//! values, dates are parsed leniently, and rows that still fail coercion
//! are dropped from the clean set but reported per-row in the outcome, so
//! callers can surface data-quality problems instead of hiding them.

pub mod cache;

pub use cache::SnapshotCache;

use chrono::NaiveDate;

use crate::error::LedgerResult;
use crate::models::{Money, TransactionRecord, TxnKind};
use crate::store::{LedgerStore, RawRow};

/// Why a raw row was excluded during normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The date field was missing or failed every known format
    BadDate(String),
    /// The kind field was not income/expense
    BadKind(String),
    /// The amount field failed numeric parsing (treated as zero, then
    /// excluded by the amount > 0 invariant)
    BadAmount(String),
    /// The amount parsed but was zero or negative
    NonPositiveAmount(Money),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadDate(s) => write!(f, "unparsable date '{}'", s),
            Self::BadKind(s) => write!(f, "unknown kind '{}'", s),
            Self::BadAmount(s) => write!(f, "unparsable amount '{}'", s),
            Self::NonPositiveAmount(m) => write!(f, "non-positive amount {}", m),
        }
    }
}

/// One dropped row with its position and reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 0-indexed position in the fetched row sequence
    pub row_number: usize,
    pub reason: RejectReason,
}

/// The two-valued result of a load: clean records plus everything that was
/// dropped on the way
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Normalized records in store insertion order (not guaranteed
    /// chronological; callers sort when they need date order)
    pub records: Vec<TransactionRecord>,
    /// Rows excluded during normalization
    pub rejected: Vec<RejectedRow>,
}

impl LoadOutcome {
    /// Whether the load produced no usable records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Load and normalize every row from the store
///
/// Fails only when the store itself cannot be read; row-level problems are
/// absorbed into `LoadOutcome::rejected` and never propagate as errors.
pub fn load(store: &dyn LedgerStore) -> LedgerResult<LoadOutcome> {
    let rows = store.fetch_rows()?;

    let mut outcome = LoadOutcome::default();
    for (row_number, row) in rows.iter().enumerate() {
        match normalize_row(row) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => outcome.rejected.push(RejectedRow { row_number, reason }),
        }
    }

    Ok(outcome)
}

/// Coerce one raw row into a typed record, or say why it can't be
fn normalize_row(row: &RawRow) -> Result<TransactionRecord, RejectReason> {
    // Schema completeness: absent columns become empty values rather than
    // lookup failures
    let field = |name: &str| row.get(name).map(String::as_str).unwrap_or("").trim();

    let date_str = field("Date");
    let date = parse_date_lenient(date_str).ok_or_else(|| RejectReason::BadDate(date_str.to_string()))?;

    let kind_str = field("Kind");
    let kind = TxnKind::parse(kind_str).ok_or_else(|| RejectReason::BadKind(kind_str.to_string()))?;

    let amount_str = field("Amount");
    let amount = Money::parse(amount_str)
        .map_err(|_| RejectReason::BadAmount(amount_str.to_string()))?;
    if !amount.is_positive() {
        return Err(RejectReason::NonPositiveAmount(amount));
    }

    Ok(TransactionRecord::with_note(
        date,
        kind,
        field("Category"),
        amount,
        field("Note"),
    ))
}

/// Parse a date string using multiple format attempts
///
/// The canonical store format is `%Y-%m-%d`; the alternatives cover rows
/// edited by hand or entered through a spreadsheet UI.
fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }

    let formats = [
        "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    None
}
