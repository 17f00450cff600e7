//! Core data models for ledgerboard
//!
//! - `Money`: i64-cents currency type
//! - `TransactionRecord` / `TxnKind`: one normalized ledger row
//! - `MonthKey`: calendar month grouping key
//! - `BudgetEntry` / `BudgetBand` / `BudgetLine`: budget comparison types

pub mod budget;
pub mod money;
pub mod period;
pub mod transaction;

pub use budget::{BudgetBand, BudgetEntry, BudgetLine};
pub use money::{Money, MoneyParseError};
pub use period::{MonthKey, MonthParseError};
pub use transaction::{TransactionRecord, TxnKind};
