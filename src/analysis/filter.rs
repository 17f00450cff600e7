//! Record filtering
//!
//! Date-range and category filtering applied between load and aggregation.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::TransactionRecord;

/// Filter records to an inclusive date window and an optional category set
///
/// `categories: None` keeps every category; `Some(set)` keeps records whose
/// category is a member (exact match). An empty result is a normal outcome,
/// not an error.
pub fn filter_records(
    records: &[TransactionRecord],
    start: NaiveDate,
    end: NaiveDate,
    categories: Option<&HashSet<String>>,
) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|r| r.date >= start && r.date <= end)
        .filter(|r| match categories {
            None => true,
            Some(set) => set.contains(&r.category),
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TxnKind};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn record(day: u32, category: &str) -> TransactionRecord {
        TransactionRecord::new(date(day), TxnKind::Expense, category, Money::from_cents(100))
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let records = vec![record(1, "A"), record(5, "A"), record(10, "A")];

        let filtered = filter_records(&records, date(1), date(10), None);
        assert_eq!(filtered.len(), 3);

        let filtered = filter_records(&records, date(2), date(9), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].date, date(5));
    }

    #[test]
    fn test_category_membership() {
        let records = vec![record(1, "Food"), record(2, "Transport"), record(3, "Food")];
        let set: HashSet<String> = ["Food".to_string()].into_iter().collect();

        let filtered = filter_records(&records, date(1), date(31), Some(&set));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.category == "Food"));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = vec![record(1, "Food")];

        let filtered = filter_records(&records, date(10), date(20), None);
        assert!(filtered.is_empty());

        let set: HashSet<String> = ["Missing".to_string()].into_iter().collect();
        let filtered = filter_records(&records, date(1), date(31), Some(&set));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_preserves_input_order() {
        let records = vec![record(5, "A"), record(1, "A"), record(3, "A")];
        let filtered = filter_records(&records, date(1), date(31), None);
        let days: Vec<u32> = filtered
            .iter()
            .map(|r| chrono::Datelike::day(&r.date))
            .collect();
        assert_eq!(days, vec![5, 1, 3]);
    }
}
