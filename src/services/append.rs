//! Append service
//!
//! The one write path: validate a new transaction, serialize it to the
//! fixed 5-column row, and append it to the store. Appends are not
//! idempotent — a retried failure may duplicate a row — so a failure is
//! surfaced with the submitted input intact and never retried here.

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, TxnKind};
use crate::store::{LedgerStore, NewRow};

/// Input for a new ledger row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TxnKind,
    pub category: String,
    pub amount: Money,
    pub note: String,
}

impl NewTransaction {
    /// Reject invalid input before any write is attempted
    pub fn validate(&self) -> LedgerResult<()> {
        if !self.amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }

    /// Serialize to the store's 5-column schema
    pub fn to_row(&self) -> NewRow {
        [
            self.date.format("%Y-%m-%d").to_string(),
            self.kind.to_string(),
            self.category.clone(),
            self.amount.to_decimal_string(),
            self.note.clone(),
        ]
    }
}

/// Validate and append one transaction to the store
///
/// On success the caller should invalidate its snapshot cache so the next
/// read sees the new row. On failure nothing was written (validation) or
/// the failure is surfaced verbatim (store write); either way there is no
/// automatic retry.
pub fn append_transaction(store: &mut dyn LedgerStore, input: &NewTransaction) -> LedgerResult<()> {
    input.validate()?;

    store.append_row(&input.to_row()).map_err(|e| {
        LedgerError::WriteFailure(format!(
            "could not append {} {} {} on {}: {}",
            input.kind,
            input.category,
            input.amount,
            input.date.format("%Y-%m-%d"),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;
    use crate::store::MemoryLedgerStore;

    fn input(cents: i64) -> NewTransaction {
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            kind: TxnKind::Expense,
            category: "Groceries".into(),
            amount: Money::from_cents(cents),
            note: "weekly shop".into(),
        }
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let mut store = MemoryLedgerStore::new();
        append_transaction(&mut store, &input(4050)).unwrap();

        let outcome = load(&store).unwrap();
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].category, "Groceries");
        assert_eq!(outcome.records[0].amount.cents(), 4050);
        assert_eq!(outcome.records[0].note, "weekly shop");
    }

    #[test]
    fn test_non_positive_amount_rejected_before_write() {
        let mut store = MemoryLedgerStore::new();

        let err = append_transaction(&mut store, &input(0)).unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());

        let err = append_transaction(&mut store, &input(-100)).unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_row_serialization() {
        let row = input(4050).to_row();
        assert_eq!(
            row,
            [
                "2025-01-15".to_string(),
                "Expense".to_string(),
                "Groceries".to_string(),
                "40.50".to_string(),
                "weekly shop".to_string(),
            ]
        );
    }
}
