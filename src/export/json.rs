//! JSON Export functionality
//!
//! Exports every expense with a small metadata header and schema version.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

/// Summary of the exported expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: Money,

    /// Earliest expense date
    pub earliest: Option<String>,

    /// Latest expense date
    pub latest: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> ExpenseResult<Self> {
        Ok(Self::from_expenses(storage.expenses.get_all()?))
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total: expenses.iter().map(|e| e.amount).sum(),
            earliest: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        }
    }
}

/// Export all expenses to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: W, pretty: bool) -> ExpenseResult<usize> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(export.metadata.expense_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_full_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        for (id, day, cents) in [(1, 20, 500), (2, 3, 1250)] {
            storage
                .expenses
                .insert(Expense::new(
                    ExpenseId::new(id),
                    NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                    "Food",
                    Money::from_cents(cents),
                ))
                .unwrap();
        }

        let mut buffer = Vec::new();
        assert_eq!(export_full_json(&storage, &mut buffer, true).unwrap(), 2);

        let export: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expenses.len(), 2);
        assert_eq!(export.metadata.total, Money::from_cents(1750));
        assert_eq!(export.metadata.earliest.as_deref(), Some("2024-01-03"));
        assert_eq!(export.metadata.latest.as_deref(), Some("2024-01-20"));
    }

    #[test]
    fn test_empty_export() {
        let export = FullExport::from_expenses(Vec::new());
        assert_eq!(export.metadata.expense_count, 0);
        assert!(export.metadata.earliest.is_none());
    }
}
