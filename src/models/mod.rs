//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its identifier, money amounts and calendar months.

pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{MonthParseError, YearMonth};
