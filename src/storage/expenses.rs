//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. The file holds a
//! bare JSON array and the in-memory order is the insertion order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{debug, warn};

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{quarantine_file, read_json, write_json_atomic};

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load expenses from disk
    ///
    /// A missing file loads as an empty collection. A file that does not
    /// parse, or holds an invalid record, also leaves the collection empty;
    /// it is moved aside to `<file>.corrupt` and reported as
    /// `ExpenseError::Data`. Duplicate ids are renumbered.
    pub fn load(&self) -> Result<(), ExpenseError> {
        let loaded = read_json(&self.path).and_then(|expenses| self.checked(expenses));

        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.clear();

        match loaded {
            Ok(expenses) => {
                debug!("Loaded {} expenses from {}", expenses.len(), self.path.display());
                *data = expenses;
                Ok(())
            }
            Err(ExpenseError::Data(message)) => {
                warn!("{}", message);
                let moved = quarantine_file(&self.path)?;
                warn!("Moved unreadable data file to {}", moved.display());
                Err(ExpenseError::Data(format!(
                    "{} (original kept at {})",
                    message,
                    moved.display()
                )))
            }
            Err(e) => Err(e),
        }
    }

    /// Reject invalid records and give repeated ids fresh numbers
    fn checked(&self, mut expenses: Vec<Expense>) -> Result<Vec<Expense>, ExpenseError> {
        for expense in &expenses {
            expense.validate().map_err(|e| {
                ExpenseError::Data(format!(
                    "Expense {} in {} is invalid: {}",
                    expense.id,
                    self.path.display(),
                    e
                ))
            })?;
        }

        let mut next = ExpenseId::next_after(expenses.iter().map(|e| e.id));
        let mut seen = HashSet::new();
        for expense in &mut expenses {
            if !seen.insert(expense.id) {
                warn!("Duplicate expense id {} renumbered to {}", expense.id, next);
                expense.id = next;
                seen.insert(next);
                next = next.next();
            }
        }

        Ok(expenses)
    }

    /// Save expenses to disk, overwriting the file
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        debug!("Saving {} expenses to {}", data.len(), self.path.display());
        write_json_atomic(&self.path, data.as_slice())
    }

    /// Get all expenses in stored order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// The id the next inserted expense should receive
    pub fn next_id(&self) -> Result<ExpenseId, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(ExpenseId::next_after(data.iter().map(|e| e.id)))
    }

    /// Append an expense
    ///
    /// Fails if an expense with the same id is already stored.
    pub fn insert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.iter().any(|e| e.id == expense.id) {
            return Err(ExpenseError::Storage(format!(
                "Expense id {} is already in use",
                expense.id
            )));
        }

        data.push(expense);
        Ok(())
    }

    /// Remove an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let mut data = self.data.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let position = data.iter().position(|e| e.id == id);
        Ok(position.map(|index| data.remove(index)))
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, ExpenseError> {
        let data = self.data.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
