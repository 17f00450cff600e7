//! User settings for ledgerboard
//!
//! Manages the ledger store location, display preferences, the snapshot
//! cache TTL, budget entries, and the category inventories offered when
//! adding a transaction. Budget entries live here rather than in the ledger
//! store: they are session/config state, not transactions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::BudgetEntry;

/// User settings for ledgerboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Path to the ledger store; `None` means the default location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How long a loaded snapshot stays fresh, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Monthly budget ceilings keyed by category substring
    #[serde(default)]
    pub budgets: Vec<BudgetEntry>,

    /// Expense categories offered when adding a transaction
    #[serde(default = "default_expense_categories")]
    pub expense_categories: Vec<String>,

    /// Income categories offered when adding a transaction
    #[serde(default = "default_income_categories")]
    pub income_categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    60
}

fn default_expense_categories() -> Vec<String> {
    [
        "Household",
        "Food & Drink",
        "Transport",
        "Bills",
        "Health",
        "Entertainment",
        "Education",
        "Shopping",
        "Gifts & Charity",
        "Other",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_income_categories() -> Vec<String> {
    ["Salary", "Bonus", "Investments", "Side Hustle", "Gifts", "Other"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger_file: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            cache_ttl_secs: default_cache_ttl_secs(),
            budgets: Vec::new(),
            expense_categories: default_expense_categories(),
            income_categories: default_income_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the ledger store path, falling back to the default location
    pub fn ledger_file(&self, paths: &LedgerPaths) -> PathBuf {
        self.ledger_file
            .clone()
            .unwrap_or_else(|| paths.default_ledger_file())
    }

    /// Upsert a budget entry by key (case-insensitive)
    pub fn set_budget(&mut self, entry: BudgetEntry) {
        let key_lower = entry.key.to_lowercase();
        if let Some(existing) = self
            .budgets
            .iter_mut()
            .find(|b| b.key.to_lowercase() == key_lower)
        {
            *existing = entry;
        } else {
            self.budgets.push(entry);
        }
    }

    /// Remove a budget entry by key (case-insensitive); returns whether
    /// anything was removed
    pub fn remove_budget(&mut self, key: &str) -> bool {
        let key_lower = key.to_lowercase();
        let before = self.budgets.len();
        self.budgets.retain(|b| b.key.to_lowercase() != key_lower);
        self.budgets.len() != before
    }
}
