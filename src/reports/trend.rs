//! Spending trends across months

use crate::chart::{ChartData, ChartKind};
use crate::error::ExpenseResult;
use crate::models::{Expense, Money, YearMonth};
use crate::storage::Storage;

use super::monthly_totals;

/// Monthly totals in chronological order
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub months: Vec<(YearMonth, Money)>,
}

impl TrendReport {
    /// Generate the report from storage, optionally keeping only the last N months
    pub fn generate(storage: &Storage, last_months: Option<usize>) -> ExpenseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        Ok(Self::from_expenses(&expenses, last_months))
    }

    pub fn from_expenses(expenses: &[Expense], last_months: Option<usize>) -> Self {
        let mut months: Vec<(YearMonth, Money)> = monthly_totals(expenses).into_iter().collect();

        if let Some(keep) = last_months {
            let skip = months.len().saturating_sub(keep);
            months.drain(..skip);
        }

        Self { months }
    }

    /// Sum over every month in the report
    pub fn total(&self) -> Money {
        self.months.iter().map(|(_, total)| *total).sum()
    }

    /// Line chart of monthly totals; needs at least two months
    pub fn chart(&self) -> Option<ChartData> {
        if self.months.len() < 2 {
            return None;
        }

        let mut chart = ChartData::new("Monthly Spending Trends", ChartKind::Line);
        for (month, total) in &self.months {
            chart.push(month.short_label(), *total);
        }
        Some(chart)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        match self.months.len() {
            0 => return "No expenses recorded yet.\n".to_string(),
            1 => {
                return format!(
                    "Only one month of data ({}); at least two are needed for a trend.\n",
                    self.months[0].0
                )
            }
            _ => {}
        }

        let mut output = String::from("\n--- Monthly Spending Trends ---\n");
        let mut previous: Option<Money> = None;

        for (month, total) in &self.months {
            let change = match previous {
                Some(prev) if prev.is_positive() => {
                    let pct = (total.cents() - prev.cents()) as f64 / prev.cents() as f64 * 100.0;
                    format!("{:+.1}%", pct)
                }
                _ => String::new(),
            };
            output.push_str(&format!(
                "{:<16} {:>12} {:>9}\n",
                month.to_string(),
                total.format_with_symbol(currency),
                change
            ));
            previous = Some(*total);
        }

        output
    }
}
