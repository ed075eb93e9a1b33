//! Expense service
//!
//! Business logic for expenses: validation on add, listing, searching and
//! deletion, with every change persisted and audited.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::audit::AuditEntry;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, Money};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Criteria for searching expenses
///
/// All set criteria must match.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Exact category name
    pub category: Option<String>,
    /// Earliest date (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest date (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring of the category or note
    pub keyword: Option<String>,
    /// Maximum number of results
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Only expenses on or after a date
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only expenses on or before a date
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by keyword
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check whether no criteria are set
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.keyword.is_none()
    }

    /// Check a single expense against the criteria (ignores `limit`)
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = &self.category {
            if expense.category != category.trim() {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            if !expense.matches_keyword(keyword.trim()) {
                return false;
            }
        }
        true
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Defaults to today when not given
    pub date: Option<NaiveDate>,
    pub category: String,
    pub amount: Money,
    pub note: Option<String>,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense and persist the collection
    pub fn add(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let id = self.storage.expenses.next_id()?;
        let mut expense = Expense::new(id, date, input.category.trim(), input.amount);
        if let Some(note) = input.note {
            expense = expense.with_note(note);
        }

        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;
        debug!("Added expense {}", expense);

        self.audit(AuditEntry::added(&expense));

        Ok(expense)
    }

    /// All expenses in stored order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// The most recently recorded expenses, newest first
    pub fn recent(&self, limit: usize) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = self.storage.expenses.get_all()?;
        // Stable sort keeps insertion order for equal timestamps; reverse
        // that too so the later insertion wins
        expenses.reverse();
        expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        expenses.truncate(limit);
        Ok(expenses)
    }

    /// Expenses matching the filter, in stored order
    pub fn search(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            if start > end {
                return Err(ExpenseError::Validation(format!(
                    "Start date {} is after end date {}",
                    start, end
                )));
            }
        }

        let mut expenses: Vec<Expense> = self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Delete an expense by ID and persist the collection
    ///
    /// Nothing is written when the id does not exist.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        self.storage.expenses.save()?;
        debug!("Deleted expense {}", expense);

        self.audit(AuditEntry::deleted(&expense));

        Ok(expense)
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        self.storage.expenses.count()
    }

    // The change is already saved; a failed audit append must not undo it
    fn audit(&self, entry: AuditEntry) {
        if let Err(e) = self.storage.audit().append(&entry) {
            warn!("Expense {} was {} but not audited: {}", entry.expense_id(), entry.change, e);
        }
    }
}
