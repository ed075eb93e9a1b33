//! Non-interactive expense commands
//!
//! `list` prints a table of expenses, optionally filtered; `history` prints
//! the most recent audit log entries.

use clap::Args;

use crate::config::Settings;
use crate::display::format_expense_table;
use crate::error::ExpenseResult;
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::Storage;

use super::prompt::parse_date;

/// Arguments of the `list` command
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Case-insensitive text in the category or note
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Maximum number of expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl ListArgs {
    fn to_filter(&self) -> ExpenseResult<ExpenseFilter> {
        let mut filter = ExpenseFilter::new();
        if let Some(category) = &self.category {
            filter = filter.category(category.as_str());
        }
        if let Some(from) = &self.from {
            filter = filter.since(parse_date(from)?);
        }
        if let Some(to) = &self.to {
            filter = filter.until(parse_date(to)?);
        }
        if let Some(keyword) = &self.keyword {
            filter = filter.keyword(keyword.as_str());
        }
        if let Some(limit) = self.limit {
            filter = filter.limit(limit);
        }
        Ok(filter)
    }
}

/// Handle the list command
pub fn handle_list_command(
    storage: &Storage,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let filter = args.to_filter()?;
    let expenses = ExpenseService::new(storage).search(&filter)?;

    print!(
        "{}",
        format_expense_table(&expenses, &settings.currency_symbol)
    );
    if !expenses.is_empty() {
        let total: crate::models::Money = expenses.iter().map(|e| e.amount).sum();
        println!(
            "{} expenses, total {}",
            expenses.len(),
            total.format_with_symbol(&settings.currency_symbol)
        );
    }

    Ok(())
}

/// Handle the history command
pub fn handle_history_command(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let entries = storage.audit().recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_list_args_build_filter() {
        let args = ListArgs {
            category: Some("Food".into()),
            from: Some("2024-01-01".into()),
            to: Some("2024-01-31".into()),
            keyword: None,
            limit: Some(5),
        };

        let filter = args.to_filter().unwrap();
        assert_eq!(filter.category.as_deref(), Some("Food"));
        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.end_date, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(filter.limit, Some(5));
    }

    #[test]
    fn test_list_args_reject_bad_date() {
        let args = ListArgs {
            from: Some("yesterday".into()),
            ..ListArgs::default()
        };
        assert!(args.to_filter().unwrap_err().is_validation());
    }
}
