//! Running balance
//!
//! Cumulative signed sums in date order, seeded by an opening balance so a
//! truncated view still shows correct absolute balances.

use chrono::NaiveDate;

use crate::models::{Money, TransactionRecord, TxnKind};

/// One step of the running balance series, carrying the row fields a chart
/// tooltip would show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub kind: TxnKind,
    pub category: String,
    pub amount: Money,
    /// Cumulative balance after this record
    pub balance: Money,
}

/// Sum of signed amounts strictly before `window_start`
///
/// Computed against the unfiltered full ledger, this is the opening balance
/// a date-windowed running balance should be seeded with.
pub fn opening_balance(all_records: &[TransactionRecord], window_start: NaiveDate) -> Money {
    all_records
        .iter()
        .filter(|r| r.date < window_start)
        .map(|r| r.signed_amount())
        .sum()
}

/// Produce the cumulative balance series for a record set
///
/// Records are stably sorted by date (ties keep their original order), then
/// each step adds the signed amount to the running total, starting from
/// `opening`.
pub fn running_balance(records: &[TransactionRecord], opening: Money) -> Vec<BalancePoint> {
    let mut sorted: Vec<&TransactionRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.date);

    let mut balance = opening;
    sorted
        .into_iter()
        .map(|r| {
            balance += r.signed_amount();
            BalancePoint {
                date: r.date,
                kind: r.kind,
                category: r.category.clone(),
                amount: r.amount,
                balance,
            }
        })
        .collect()
}
