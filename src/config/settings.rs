//! User settings for budget-planner
//!
//! Manages user preferences: currency symbol, which amounts may be negative,
//! and how to react to a corrupt budget file.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::AmountPolicy;
use crate::storage::{read_json, write_json_atomic, CorruptDataPolicy};

/// User settings for budget-planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Which amounts may be negative
    #[serde(default)]
    pub amount_policy: AmountPolicy,

    /// Reaction to a budget file that exists but cannot be parsed
    #[serde(default)]
    pub on_corrupt_data: CorruptDataPolicy,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            amount_policy: AmountPolicy::default(),
            on_corrupt_data: CorruptDataPolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        // Don't save defaults yet - let caller decide when to persist
        read_json::<Settings, _>(&settings_path)
            .map(Option::unwrap_or_default)
            .map_err(|e| match e {
                BudgetError::CorruptData(msg) => {
                    BudgetError::Config(format!("Failed to parse settings file: {}", msg))
                }
                other => other,
            })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.on_corrupt_data, CorruptDataPolicy::StartFresh);
        assert!(settings.amount_policy.allow_negative_expenses);
        assert!(!settings.amount_policy.allow_negative_income);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            amount_policy: AmountPolicy::strict(),
            on_corrupt_data: CorruptDataPolicy::Fail,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"on_corrupt_data": "fail"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.on_corrupt_data, CorruptDataPolicy::Fail);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{{{").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}
