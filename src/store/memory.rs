//! In-memory ledger store
//!
//! Backs the loader tests and doubles as a scratch store. The `fail_reads`
//! toggle drives the source-unavailable path without needing a broken file.

use crate::error::{LedgerError, LedgerResult};

use super::{LedgerStore, NewRow, RawRow, LEDGER_COLUMNS};

/// Ledger store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerStore {
    rows: Vec<RawRow>,
    fail_reads: bool,
}

impl MemoryLedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw rows
    pub fn with_rows(rows: Vec<RawRow>) -> Self {
        Self {
            rows,
            fail_reads: false,
        }
    }

    /// Make every subsequent read fail with `SourceUnavailable`
    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn fetch_rows(&self) -> LedgerResult<Vec<RawRow>> {
        if self.fail_reads {
            return Err(LedgerError::SourceUnavailable(
                "memory store marked unreachable".into(),
            ));
        }
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, row: &NewRow) -> LedgerResult<()> {
        let raw: RawRow = LEDGER_COLUMNS
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.to_string(), v.clone()))
            .collect();
        self.rows.push(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_fetch() {
        let mut store = MemoryLedgerStore::new();
        assert!(store.is_empty());

        store
            .append_row(&[
                "2025-01-15".into(),
                "Income".into(),
                "Salary".into(),
                "5000.00".into(),
                "".into(),
            ])
            .unwrap();

        let rows = store.fetch_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Kind"], "Income");
        assert_eq!(rows[0]["Amount"], "5000.00");
    }

    #[test]
    fn test_fail_reads() {
        let mut store = MemoryLedgerStore::new();
        store.set_fail_reads(true);

        let err = store.fetch_rows().unwrap_err();
        assert!(err.is_source_unavailable());
    }
}
