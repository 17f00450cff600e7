//! Budget-vs-actual comparison
//!
//! Matches expense records against budget entries by case-insensitive
//! substring (documented policy, see `models::budget`) and classifies
//! consumption into severity bands.

use crate::models::{BudgetBand, BudgetEntry, BudgetLine, Money, TransactionRecord, TxnKind};

/// Compare actual expenses against each budget entry
///
/// For every entry, sums the amounts of all Expense records whose category
/// contains the entry key as a case-insensitive substring. Entries with a
/// zero (or negative) limit are skipped entirely rather than divided by.
pub fn budget_vs_actual(records: &[TransactionRecord], entries: &[BudgetEntry]) -> Vec<BudgetLine> {
    entries
        .iter()
        .filter(|entry| entry.monthly_limit.is_positive())
        .map(|entry| {
            let actual: Money = records
                .iter()
                .filter(|r| r.kind == TxnKind::Expense && entry.matches(&r.category))
                .map(|r| r.amount)
                .sum();

            let percentage = actual.cents() as f64 / entry.monthly_limit.cents() as f64 * 100.0;

            BudgetLine {
                entry: entry.clone(),
                actual,
                percentage,
                band: BudgetBand::classify(percentage),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, cents: i64) -> TransactionRecord {
        TransactionRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            TxnKind::Expense,
            category,
            Money::from_cents(cents),
        )
    }

    fn income(category: &str, cents: i64) -> TransactionRecord {
        TransactionRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            TxnKind::Income,
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_substring_match_absorbs_variants() {
        let records = vec![
            expense("🍔 Food & Drink", 3000),
            expense("Fast Food", 1000),
            expense("Transport", 500),
        ];
        let entries = vec![BudgetEntry::new("food", Money::from_cents(10000))];

        let lines = budget_vs_actual(&records, &entries);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].actual.cents(), 4000);
        assert!((lines[0].percentage - 40.0).abs() < 1e-9);
        assert_eq!(lines[0].band, BudgetBand::Ok);
    }

    #[test]
    fn test_income_records_ignored() {
        let records = vec![income("Food stipend", 100000), expense("Food", 1000)];
        let entries = vec![BudgetEntry::new("food", Money::from_cents(10000))];

        let lines = budget_vs_actual(&records, &entries);
        assert_eq!(lines[0].actual.cents(), 1000);
    }

    #[test]
    fn test_band_boundaries() {
        let entries = vec![BudgetEntry::new("food", Money::from_cents(10000))];

        // Exactly 80% -> Ok
        let lines = budget_vs_actual(&[expense("Food", 8000)], &entries);
        assert_eq!(lines[0].band, BudgetBand::Ok);

        // Just over 80% -> Warning
        let lines = budget_vs_actual(&[expense("Food", 8001)], &entries);
        assert_eq!(lines[0].band, BudgetBand::Warning);

        // Exactly 100% -> Warning
        let lines = budget_vs_actual(&[expense("Food", 10000)], &entries);
        assert_eq!(lines[0].band, BudgetBand::Warning);

        // Over 100% -> Over
        let lines = budget_vs_actual(&[expense("Food", 10001)], &entries);
        assert_eq!(lines[0].band, BudgetBand::Over);
    }

    #[test]
    fn test_zero_limit_excluded_not_divided() {
        let records = vec![expense("Food", 1000)];
        let entries = vec![
            BudgetEntry::new("food", Money::zero()),
            BudgetEntry::new("transport", Money::from_cents(5000)),
        ];

        let lines = budget_vs_actual(&records, &entries);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].entry.key, "transport");
    }

    #[test]
    fn test_no_matching_expenses_is_zero_percent() {
        let entries = vec![BudgetEntry::new("food", Money::from_cents(10000))];
        let lines = budget_vs_actual(&[], &entries);

        assert_eq!(lines[0].actual, Money::zero());
        assert_eq!(lines[0].percentage, 0.0);
        assert_eq!(lines[0].band, BudgetBand::Ok);
    }
}
