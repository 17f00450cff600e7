//! Ledgerboard - personal finance ledger and dashboard engine
//!
//! This library loads a five-column transaction ledger from a spreadsheet-like
//! store, normalizes it into typed records, and derives the aggregate views a
//! finance dashboard renders: totals, running balance, category breakdowns,
//! budget comparisons, and a light next-month forecast.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, periods, budgets)
//! - `store`: Row-oriented ledger storage behind the `LedgerStore` trait
//! - `loader`: Normalization of raw rows into records, plus snapshot caching
//! - `analysis`: Pure aggregation functions over record slices
//! - `reports`: Dashboard summary assembly
//! - `export`: CSV export of filtered records
//! - `services`: Write-path operations (appending transactions)
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerboard::loader::load;
//! use ledgerboard::store::CsvLedgerStore;
//!
//! let store = CsvLedgerStore::new("ledger.csv".into());
//! let outcome = load(&store)?;
//! println!("{} records, {} rejected", outcome.records.len(), outcome.rejected.len());
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;

pub use error::LedgerError;
