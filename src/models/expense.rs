//! Expense model
//!
//! A single recorded spending event. Expenses are created and deleted but
//! never edited in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Date the money was spent
    pub date: NaiveDate,

    /// Category label (e.g. "Groceries")
    pub category: String,

    /// Amount spent, never negative
    pub amount: Money,

    /// Optional free-text note
    #[serde(default, alias = "description", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the expense was recorded
    #[serde(default = "Utc::now", alias = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(id: ExpenseId, date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            date,
            category: category.into(),
            amount,
            note: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a note; blank notes are dropped
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        let trimmed = note.trim();
        self.note = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// The note, or an empty string
    pub fn note_or_empty(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }

    /// Case-insensitive keyword match against category and note
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.category.to_lowercase().contains(&keyword)
            || self.note_or_empty().to_lowercase().contains(&keyword)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
