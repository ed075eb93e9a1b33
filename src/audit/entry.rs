//! A single line of the audit log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Expense, ExpenseId};

/// What happened to an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Change {
    Added,
    Deleted,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Change::Added => "added",
            Change::Deleted => "deleted",
        })
    }
}

/// An add or delete, with the expense as it was at that moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub change: Change,
    pub expense: Expense,
}

impl AuditEntry {
    pub fn added(expense: &Expense) -> Self {
        Self::now(Change::Added, expense)
    }

    pub fn deleted(expense: &Expense) -> Self {
        Self::now(Change::Deleted, expense)
    }

    fn now(change: Change, expense: &Expense) -> Self {
        Self {
            at: Utc::now(),
            change,
            expense: expense.clone(),
        }
    }

    pub fn expense_id(&self) -> ExpenseId {
        self.expense.id
    }
}

/// `2024-01-06 09:15:00  added    #1 2024-01-06 Transport $3.00`
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<8} {}",
            self.at.format("%Y-%m-%d %H:%M:%S"),
            self.change,
            self.expense
        )
    }
}
