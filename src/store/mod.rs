//! Ledger store abstraction
//!
//! The ledger store is the external system of record for transactions. It
//! exposes exactly two operations: list every row as a field-keyed map, and
//! append one row in the fixed 5-column schema. The in-memory batch built
//! from `fetch_rows` is a disposable read-only snapshot; the store stays the
//! single source of truth.

pub mod csv_store;
pub mod memory;

pub use csv_store::CsvLedgerStore;
pub use memory::MemoryLedgerStore;

use std::collections::HashMap;

use crate::error::LedgerResult;

/// The fixed column schema of the ledger store, in column order
pub const LEDGER_COLUMNS: [&str; 5] = ["Date", "Kind", "Category", "Amount", "Note"];

/// One raw row as fetched from the store: field name to string value.
/// Nothing about the schema is guaranteed; normalization happens in the
/// loader.
pub type RawRow = HashMap<String, String>;

/// One row to append, already serialized to the 5-column schema:
/// `[Date, Kind, Category, Amount, Note]` with Date as `YYYY-MM-DD` and
/// Amount as a plain decimal literal.
pub type NewRow = [String; 5];

/// A tabular transaction store
///
/// Appends are append-only and idempotent-unsafe: retrying a failed append
/// may duplicate a row, so implementations never retry internally and
/// callers surface failures instead of looping.
pub trait LedgerStore {
    /// Fetch all rows in insertion order
    fn fetch_rows(&self) -> LedgerResult<Vec<RawRow>>;

    /// Append a single row, writing the header row first if the store is
    /// empty
    fn append_row(&mut self, row: &NewRow) -> LedgerResult<()>;
}
