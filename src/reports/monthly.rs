//! Monthly Summary
//!
//! Totals for one calendar month broken down by category, drawn as a pie
//! chart of category shares.

use crate::chart::{ChartData, ChartKind};
use crate::error::ExpenseResult;
use crate::models::{Expense, Money, YearMonth};
use crate::storage::Storage;

use super::{category_totals, CategoryTotal};

/// Summary of a single month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    /// The month being summarized
    pub month: YearMonth,
    /// Total spent in the month
    pub total: Money,
    /// Number of expenses in the month
    pub count: usize,
    /// Average amount per expense
    pub average: Money,
    /// Per-category totals, largest first
    pub categories: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// Generate the summary for a month from storage
    pub fn generate(storage: &Storage, month: YearMonth) -> ExpenseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        Ok(Self::from_expenses(&expenses, month))
    }

    /// Build the summary from a set of expenses
    pub fn from_expenses(expenses: &[Expense], month: YearMonth) -> Self {
        let in_month: Vec<&Expense> = expenses.iter().filter(|e| month.contains(e.date)).collect();

        let total: Money = in_month.iter().map(|e| e.amount).sum();
        let count = in_month.len();
        let average = if count == 0 {
            Money::zero()
        } else {
            Money::from_f64(total.as_f64() / count as f64)
        };

        Self {
            month,
            total,
            count,
            average,
            categories: category_totals(in_month),
        }
    }

    /// True when the month has no expenses
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Pie chart of category shares, `None` for an empty month
    pub fn chart(&self) -> Option<ChartData> {
        if self.is_empty() {
            return None;
        }

        let mut chart = ChartData::new(
            format!("Expense Distribution by Category - {}", self.month),
            ChartKind::Pie,
        );
        for category in &self.categories {
            chart.push(category.category.clone(), category.total);
        }
        Some(chart)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return format!("No expenses found for {}.\n", self.month);
        }

        let mut output = String::new();
        output.push_str(&format!("\n--- {} Summary ---\n", self.month));
        output.push_str(&format!(
            "Total Expenses: {}\n",
            self.total.format_with_symbol(currency)
        ));
        output.push_str(&format!("Number of Transactions: {}\n", self.count));
        output.push_str(&format!(
            "Average per Transaction: {}\n",
            self.average.format_with_symbol(currency)
        ));

        output.push_str("\nBy Category:\n");
        for category in &self.categories {
            output.push_str(&format!(
                "  {}: {} ({:.1}%)\n",
                category.category,
                category.total.format_with_symbol(currency),
                category.percentage
            ));
        }

        output
    }
}
