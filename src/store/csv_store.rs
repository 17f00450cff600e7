//! CSV-file ledger store
//!
//! Stores the ledger as a plain CSV file with the fixed 5-column header.
//! This is the local stand-in for a hosted spreadsheet: same row-map read
//! surface, same append-one-row write surface, same header-first rule on an
//! empty store.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::{LedgerStore, NewRow, RawRow, LEDGER_COLUMNS};

/// Ledger store backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvLedgerStore {
    path: PathBuf,
}

impl CsvLedgerStore {
    /// Create a store for the given file path. The file is not created
    /// until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_empty_store(&self) -> LedgerResult<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(LedgerError::WriteFailure(format!(
                "cannot stat {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl LedgerStore for CsvLedgerStore {
    fn fetch_rows(&self) -> LedgerResult<Vec<RawRow>> {
        // A store that was never written to is empty, not unavailable
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                LedgerError::SourceUnavailable(format!(
                    "cannot open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        let headers = reader
            .headers()
            .map_err(|e| LedgerError::SourceUnavailable(format!("malformed header row: {}", e)))?
            .clone();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                LedgerError::SourceUnavailable(format!("malformed record: {}", e))
            })?;

            let row: RawRow = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect();
            rows.push(row);
        }

        Ok(rows)
    }

    fn append_row(&mut self, row: &NewRow) -> LedgerResult<()> {
        let write_header = self.is_empty_store()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::WriteFailure(format!(
                        "cannot create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                LedgerError::WriteFailure(format!("cannot open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if write_header {
            writer
                .write_record(LEDGER_COLUMNS)
                .map_err(|e| LedgerError::WriteFailure(format!("header write failed: {}", e)))?;
        }

        writer
            .write_record(row.iter())
            .map_err(|e| LedgerError::WriteFailure(format!("row write failed: {}", e)))?;
        writer
            .flush()
            .map_err(|e| LedgerError::WriteFailure(format!("flush failed: {}", e)))?;

        Ok(())
    }
}
