//! Budget entry model
//!
//! A budget entry maps a category-label substring to a monthly ceiling.
//! Matching is deliberately loose: one budget line absorbs every category
//! whose label contains the key, case-insensitively, so a single "food"
//! entry covers several decorated variants of the label.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A user-configured monthly budget ceiling keyed by category substring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Substring matched against category labels (case-insensitive)
    pub key: String,

    /// Monthly ceiling for everything the key matches
    pub monthly_limit: Money,
}

impl BudgetEntry {
    /// Create a new budget entry
    pub fn new(key: impl Into<String>, monthly_limit: Money) -> Self {
        Self {
            key: key.into(),
            monthly_limit,
        }
    }

    /// Check whether a category label falls under this entry
    pub fn matches(&self, category: &str) -> bool {
        category
            .to_lowercase()
            .contains(&self.key.to_lowercase())
    }
}

impl fmt::Display for BudgetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/month", self.key, self.monthly_limit)
    }
}

/// Severity band for budget consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetBand {
    /// At or under 80% of the limit
    Ok,
    /// Over 80%, at or under 100%
    Warning,
    /// Over the limit
    Over,
}

impl BudgetBand {
    /// Classify a consumption percentage into a band
    pub fn classify(percentage: f64) -> Self {
        if percentage > 100.0 {
            Self::Over
        } else if percentage > 80.0 {
            Self::Warning
        } else {
            Self::Ok
        }
    }
}

impl fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "Warning"),
            Self::Over => write!(f, "Over"),
        }
    }
}

/// One row of a budget-vs-actual comparison
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    /// The entry this line was computed for
    pub entry: BudgetEntry,

    /// Summed expense amounts of matching categories
    pub actual: Money,

    /// actual / limit * 100
    pub percentage: f64,

    /// Severity classification of the percentage
    pub band: BudgetBand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_substring_case_insensitive() {
        let entry = BudgetEntry::new("food", Money::from_cents(50000));
        assert!(entry.matches("Food & Drink"));
        assert!(entry.matches("FAST FOOD"));
        assert!(!entry.matches("Transport"));
    }

    #[test]
    fn test_matches_decorated_labels() {
        // One entry absorbs multiple decorated variants
        let entry = BudgetEntry::new("groceries", Money::from_cents(50000));
        assert!(entry.matches("🛒 Groceries"));
        assert!(entry.matches("groceries (weekly)"));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(BudgetBand::classify(0.0), BudgetBand::Ok);
        assert_eq!(BudgetBand::classify(80.0), BudgetBand::Ok);
        assert_eq!(BudgetBand::classify(80.0001), BudgetBand::Warning);
        assert_eq!(BudgetBand::classify(100.0), BudgetBand::Warning);
        assert_eq!(BudgetBand::classify(100.0001), BudgetBand::Over);
    }

    #[test]
    fn test_serialization() {
        let entry = BudgetEntry::new("food", Money::from_cents(50000));
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: BudgetEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}
