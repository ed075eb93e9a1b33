//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag / `EXPENSE_TRACKER_DATA_DIR` environment variable
//! 2. The platform config directory (`~/.config/expense-tracker` on Linux,
//!    `~/Library/Application Support/expense-tracker` on macOS,
//!    `%APPDATA%\expense-tracker` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::ExpenseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all expense tracker data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory from the platform config dir
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ExpenseError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("expense-tracker"))
}
