//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail of every change.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::AuditLog;
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLog,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLog::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Get the audit log
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Load all data from disk
    ///
    /// `ExpenseError::Data` means the data file was unreadable; storage is
    /// still usable with an empty collection.
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }
}
