//! Generic grouping and ranking
//!
//! Group-and-sum over any key derived from a record, preserving
//! first-occurrence order, plus a stable top-N ranking. Backs the
//! per-category, per-day, and per-month rollups.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{Money, TransactionRecord};

/// Sum record amounts grouped by a derived key
///
/// Result order is the key's first occurrence in the input; amounts are the
/// unsigned record amounts (callers pick the kind they care about before
/// grouping).
pub fn group_sum<K, F>(records: &[TransactionRecord], key_fn: F) -> Vec<(K, Money)>
where
    K: Eq + Hash + Clone,
    F: Fn(&TransactionRecord) -> K,
{
    let mut totals: Vec<(K, Money)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for record in records {
        let key = key_fn(record);
        match index.get(&key) {
            Some(&i) => totals[i].1 += record.amount,
            None => {
                index.insert(key.clone(), totals.len());
                totals.push((key, record.amount));
            }
        }
    }

    totals
}

/// The n largest groups by total, descending
///
/// The sort is stable, so equal totals keep their first-seen order.
pub fn top_n<K: Clone>(grouped: &[(K, Money)], n: usize) -> Vec<(K, Money)> {
    let mut ranked = grouped.to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TxnKind;
    use chrono::NaiveDate;

    fn record(day: u32, category: &str, cents: i64) -> TransactionRecord {
        TransactionRecord::new(
            NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            TxnKind::Expense,
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_group_sum_by_category() {
        let records = vec![
            record(1, "Food", 1000),
            record(2, "Transport", 500),
            record(3, "Food", 2000),
        ];

        let grouped = group_sum(&records, |r| r.category.clone());
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0], ("Food".to_string(), Money::from_cents(3000)));
        assert_eq!(grouped[1], ("Transport".to_string(), Money::from_cents(500)));
    }

    #[test]
    fn test_insertion_order_of_first_occurrence() {
        let records = vec![
            record(1, "B", 100),
            record(1, "A", 100),
            record(1, "B", 100),
            record(1, "C", 100),
        ];

        let grouped = group_sum(&records, |r| r.category.clone());
        let keys: Vec<&str> = grouped.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_group_by_date() {
        let records = vec![
            record(1, "Food", 100),
            record(2, "Food", 200),
            record(1, "Transport", 300),
        ];

        let grouped = group_sum(&records, |r| r.date);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].1.cents(), 400);
        assert_eq!(grouped[1].1.cents(), 200);
    }

    #[test]
    fn test_top_n_descending_and_truncated() {
        let grouped = vec![
            ("A".to_string(), Money::from_cents(100)),
            ("B".to_string(), Money::from_cents(300)),
            ("C".to_string(), Money::from_cents(200)),
        ];

        let top = top_n(&grouped, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "B");
        assert_eq!(top[1].0, "C");
    }

    #[test]
    fn test_top_n_ties_keep_first_seen_order() {
        let grouped = vec![
            ("A".to_string(), Money::from_cents(100)),
            ("B".to_string(), Money::from_cents(100)),
            ("C".to_string(), Money::from_cents(100)),
        ];

        let top = top_n(&grouped, 3);
        let keys: Vec<&str> = top.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_top_n_larger_than_input() {
        let grouped = vec![("A".to_string(), Money::from_cents(100))];
        assert_eq!(top_n(&grouped, 10).len(), 1);
        assert!(top_n::<String>(&[], 5).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let grouped = group_sum(&[], |r: &TransactionRecord| r.category.clone());
        assert!(grouped.is_empty());
    }
}
