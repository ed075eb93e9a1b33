//! Expense Tracker - personal expense tracking from the terminal
//!
//! Expenses are kept in a single JSON file. An interactive numbered menu adds,
//! lists, searches and deletes them, and summarizes spending by month,
//! category, trend and day with charts drawn in the terminal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months)
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `reports`: Monthly, category, trend and daily reports
//! - `chart`: Chart renderers (ratatui and plain text)
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: Interactive menu and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod chart;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
