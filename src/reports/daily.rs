//! Daily expenses over a trailing window

use chrono::NaiveDate;

use crate::chart::{ChartData, ChartKind};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

use super::{daily_totals, window_start, MAX_DAILY_WINDOW_DAYS};

/// Totals per day for `start..=end`, missing days filled with zero
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<(NaiveDate, Money)>,
    /// Number of expenses dated inside the window
    pub count: usize,
}

impl DailyReport {
    /// Generate the report for the last `days` days up to today
    pub fn generate(storage: &Storage, days: u32) -> ExpenseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        Self::from_expenses(&expenses, chrono::Local::now().date_naive(), days)
    }

    /// Build the report for `today - days ..= today`
    ///
    /// Windows longer than [`MAX_DAILY_WINDOW_DAYS`] are rejected.
    pub fn from_expenses(expenses: &[Expense], today: NaiveDate, days: u32) -> ExpenseResult<Self> {
        if days > MAX_DAILY_WINDOW_DAYS {
            return Err(ExpenseError::Validation(format!(
                "The daily view covers at most {} days (got {})",
                MAX_DAILY_WINDOW_DAYS, days
            )));
        }

        let start = window_start(today, days)?;
        let in_window: Vec<&Expense> = expenses
            .iter()
            .filter(|e| e.date >= start && e.date <= today)
            .collect();
        let totals = daily_totals(in_window.iter().copied());

        let days = start
            .iter_days()
            .take_while(|day| *day <= today)
            .map(|day| (day, totals.get(&day).copied().unwrap_or_default()))
            .collect();

        Ok(Self {
            start,
            end: today,
            days,
            count: in_window.len(),
        })
    }

    pub fn total(&self) -> Money {
        self.days.iter().map(|(_, total)| *total).sum()
    }

    /// True when no expense falls in the window
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Bar chart of daily totals
    pub fn chart(&self) -> Option<ChartData> {
        if self.is_empty() {
            return None;
        }

        let mut chart = ChartData::new("Daily Expenses", ChartKind::Bar);
        for (day, total) in &self.days {
            chart.push(day.format("%m/%d").to_string(), *total);
        }
        Some(chart)
    }

    /// Format the days that have spending
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return format!(
                "No expenses between {} and {}.\n",
                self.start, self.end
            );
        }

        let mut output = format!("\n--- Daily Expenses {} to {} ---\n", self.start, self.end);
        for (day, total) in self.days.iter().filter(|(_, total)| !total.is_zero()) {
            output.push_str(&format!(
                "{} {:>12}\n",
                day.format("%Y-%m-%d %a"),
                total.format_with_symbol(currency)
            ));
        }
        output.push_str(&format!(
            "Total: {} ({} expenses)\n",
            self.total().format_with_symbol(currency),
            self.count
        ));

        output
    }
}
