//! Summary totals
//!
//! Income/expense/balance sums and the daily average expense metric.

use chrono::NaiveDate;

use crate::models::{Money, TransactionRecord, TxnKind};

/// Income, expense, and net balance for a record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    /// income - expense
    pub balance: Money,
}

/// Sum a record set into income/expense/balance
///
/// Empty input yields all zeros.
pub fn totals(records: &[TransactionRecord]) -> Totals {
    let mut income = Money::zero();
    let mut expense = Money::zero();

    for record in records {
        match record.kind {
            TxnKind::Income => income += record.amount,
            TxnKind::Expense => expense += record.amount,
        }
    }

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Average expense per day over an inclusive date span
///
/// Defined as 0 when the span is empty (end before start).
pub fn daily_average_expense(records: &[TransactionRecord], start: NaiveDate, end: NaiveDate) -> Money {
    if end < start {
        return Money::zero();
    }

    let days = (end - start).num_days() + 1;
    let expense = totals(records).expense;
    Money::from_cents(expense.cents() / days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn income(day: u32, cents: i64) -> TransactionRecord {
        TransactionRecord::new(date(day), TxnKind::Income, "Salary", Money::from_cents(cents))
    }

    fn expense(day: u32, cents: i64) -> TransactionRecord {
        TransactionRecord::new(
            date(day),
            TxnKind::Expense,
            "Groceries",
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_totals() {
        let records = vec![income(1, 10000), expense(2, 3000), expense(3, 2000)];
        let t = totals(&records);

        assert_eq!(t.income.cents(), 10000);
        assert_eq!(t.expense.cents(), 5000);
        assert_eq!(t.balance.cents(), 5000);
    }

    #[test]
    fn test_balance_identity() {
        let cases = vec![
            vec![],
            vec![income(1, 100)],
            vec![expense(1, 100)],
            vec![income(1, 12345), expense(2, 678), income(3, 9)],
        ];

        for records in cases {
            let t = totals(&records);
            assert_eq!(t.balance, t.income - t.expense);
        }
    }

    #[test]
    fn test_empty_is_all_zeros() {
        let t = totals(&[]);
        assert!(t.income.is_zero());
        assert!(t.expense.is_zero());
        assert!(t.balance.is_zero());
    }

    #[test]
    fn test_daily_average() {
        // $70 over a 7-day span = $10/day
        let records = vec![expense(1, 7000)];
        let avg = daily_average_expense(&records, date(1), date(7));
        assert_eq!(avg.cents(), 1000);
    }

    #[test]
    fn test_daily_average_single_day_span() {
        let records = vec![expense(1, 5000)];
        let avg = daily_average_expense(&records, date(1), date(1));
        assert_eq!(avg.cents(), 5000);
    }

    #[test]
    fn test_daily_average_empty_span_is_zero() {
        let records = vec![expense(1, 5000)];
        let avg = daily_average_expense(&records, date(10), date(5));
        assert!(avg.is_zero());
    }
}
