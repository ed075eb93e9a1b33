//! User settings for the expense tracker
//!
//! Manages user preferences: the category menu, default report windows and
//! how charts are drawn.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Categories offered by the add-expense menu
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Groceries",
    "Other",
];

/// Category used when the menu choice is out of range
pub const FALLBACK_CATEGORY: &str = "Other";

/// How charts are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Full-screen ratatui charts when attached to a terminal
    #[default]
    Terminal,
    /// Plain block-character charts written to stdout
    Text,
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Categories offered when adding an expense
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Number of entries shown by "View Recent Expenses"
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Default window for the category summary (None = whole history)
    #[serde(default)]
    pub category_window_days: Option<u32>,

    /// Default number of months in the trend analysis
    #[serde(default = "default_trend_months")]
    pub trend_months: usize,

    /// Default number of days in the daily view
    #[serde(default = "default_daily_window_days")]
    pub daily_window_days: u32,

    /// Chart renderer preference
    #[serde(default)]
    pub chart_mode: ChartMode,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_recent_limit() -> usize {
    10
}

fn default_trend_months() -> usize {
    6
}

fn default_daily_window_days() -> u32 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            categories: default_categories(),
            recent_limit: default_recent_limit(),
            category_window_days: None,
            trend_months: default_trend_months(),
            daily_window_days: default_daily_window_days(),
            chart_mode: ChartMode::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve a 1-based category menu choice, falling back to "Other"
    pub fn category_for_choice(&self, choice: usize) -> String {
        choice
            .checked_sub(1)
            .and_then(|index| self.categories.get(index))
            .cloned()
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.categories.len(), 10);
        assert_eq!(settings.recent_limit, 10);
        assert_eq!(settings.trend_months, 6);
        assert_eq!(settings.daily_window_days, 30);
        assert_eq!(settings.category_window_days, None);
        assert_eq!(settings.chart_mode, ChartMode::Terminal);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.chart_mode = ChartMode::Text;
        settings.recent_limit = 25;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.chart_mode, ChartMode::Text);
        assert_eq!(loaded.recent_limit, 25);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"chart_mode": "text"}"#).unwrap();
        assert_eq!(settings.chart_mode, ChartMode::Text);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.categories[0], "Food & Dining");
    }

    #[test]
    fn test_category_for_choice() {
        let settings = Settings::default();
        assert_eq!(settings.category_for_choice(1), "Food & Dining");
        assert_eq!(settings.category_for_choice(9), "Groceries");
        assert_eq!(settings.category_for_choice(0), "Other");
        assert_eq!(settings.category_for_choice(42), "Other");
    }
}
