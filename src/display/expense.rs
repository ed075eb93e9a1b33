//! Expense display formatting
//!
//! One-line rows for the recent and search views and a table for listings.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

use super::report::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format a single expense as one line
///
/// `ID: 1 | $12.50 | Food | Lunch | 2024-01-05`
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "ID: {} | {} | {} | {} | {}",
        expense.id,
        expense.amount.format_with_symbol(currency),
        expense.category,
        expense.note_or_empty(),
        expense.date.format("%Y-%m-%d")
    )
}

/// Format expenses one per line
pub fn format_expense_lines(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }
    output
}

/// Format expenses as a table
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: e.date.format("%Y-%m-%d").to_string(),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(currency),
        note: truncate(e.note_or_empty(), 40),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));

    format!("{}\n", table)
}
