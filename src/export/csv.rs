//! CSV Export functionality
//!
//! Exports expenses to spreadsheet-compatible CSV.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::Storage;

/// Column order of the expense export
pub const CSV_HEADER: [&str; 5] = ["id", "date", "category", "amount", "note"];

fn export_error(e: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Export(e.to_string())
}

/// Export all expenses to CSV in stored order
///
/// Returns the number of rows written.
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> ExpenseResult<usize> {
    let expenses = storage.expenses.get_all()?;
    write_expenses_csv(&expenses, writer)
}

/// Write a set of expenses as CSV
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.clone(),
                format!("{:.2}", expense.amount.as_f64()),
                expense.note_or_empty().to_string(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{ExpenseId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(id: u64, day: u32, category: &str, cents: i64) -> Expense {
        Expense::new(
            ExpenseId::new(id),
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_export_expenses_csv() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage.expenses.insert(expense(1, 5, "Food", 1250).with_note("Lunch")).unwrap();
        storage.expenses.insert(expense(2, 6, "Transport", 300)).unwrap();

        let mut buffer = Vec::new();
        let rows = export_expenses_csv(&storage, &mut buffer).unwrap();
        assert_eq!(rows, 2);

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,date,category,amount,note");
        assert_eq!(lines[1], "1,2024-01-05,Food,12.50,Lunch");
        assert_eq!(lines[2], "2,2024-01-06,Transport,3.00,");
    }

    #[test]
    fn test_fields_are_quoted() {
        let expenses = vec![expense(1, 5, "Food", 999).with_note("Pizza, drinks and \"tips\"")];

        let mut buffer = Vec::new();
        write_expenses_csv(&expenses, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"Pizza, drinks and \"\"tips\"\"\""));
    }

    #[test]
    fn test_empty_export_has_header() {
        let mut buffer = Vec::new();
        assert_eq!(write_expenses_csv(&[], &mut buffer).unwrap(), 0);
        assert_eq!(String::from_utf8(buffer).unwrap(), "id,date,category,amount,note\n");
    }
}
