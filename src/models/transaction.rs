//! Transaction record model
//!
//! One row of the ledger: a date, an income/expense marker, a free-text
//! category, a positive amount, and an optional note. Records are created
//! externally (one append at a time) and are immutable once loaded into an
//! analysis batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    Income,
    Expense,
}

impl TxnKind {
    /// Parse a kind label case-insensitively. Anything other than
    /// "income"/"expense" is malformed.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single normalized ledger row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar date (no time-of-day semantics)
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TxnKind,

    /// Free-text category label; open set, empty allowed
    #[serde(default)]
    pub category: String,

    /// Always positive after normalization
    pub amount: Money,

    /// Optional free text
    #[serde(default)]
    pub note: String,
}

impl TransactionRecord {
    /// Create a new record
    pub fn new(
        date: NaiveDate,
        kind: TxnKind,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            kind,
            category: category.into(),
            amount,
            note: String::new(),
        }
    }

    /// Create a record with a note
    pub fn with_note(
        date: NaiveDate,
        kind: TxnKind,
        category: impl Into<String>,
        amount: Money,
        note: impl Into<String>,
    ) -> Self {
        let mut record = Self::new(date, kind, category, amount);
        record.note = note.into();
        record
    }

    /// The amount with its cashflow sign: positive for income, negative
    /// for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TxnKind::Income => self.amount,
            TxnKind::Expense => -self.amount,
        }
    }

    /// Check the retained-record invariant: amount strictly positive
    pub fn is_valid(&self) -> bool {
        self.amount.is_positive()
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}
