//! Category Summary
//!
//! Totals per category over the whole history or a trailing window of days.

use chrono::NaiveDate;

use crate::chart::{ChartData, ChartKind};
use crate::error::ExpenseResult;
use crate::models::{Expense, Money};
use crate::storage::Storage;

use super::{category_totals, window_start, CategoryTotal};

/// Spending per category
#[derive(Debug, Clone)]
pub struct CategorySummary {
    /// Only expenses dated on or after this day, if set
    pub since: Option<NaiveDate>,
    pub categories: Vec<CategoryTotal>,
    pub total: Money,
}

impl CategorySummary {
    /// Generate the summary from storage
    ///
    /// `window_days` limits the summary to `today - N` onwards.
    pub fn generate(storage: &Storage, window_days: Option<u32>) -> ExpenseResult<Self> {
        let expenses = storage.expenses.get_all()?;
        let today = chrono::Local::now().date_naive();
        let since = window_days
            .map(|days| window_start(today, days))
            .transpose()?;
        Ok(Self::from_expenses(&expenses, since))
    }

    pub fn from_expenses(expenses: &[Expense], since: Option<NaiveDate>) -> Self {
        let categories =
            category_totals(expenses.iter().filter(|e| since.map_or(true, |s| e.date >= s)));
        let total = categories.iter().map(|c| c.total).sum();

        Self {
            since,
            categories,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total for one category, zero if absent
    pub fn total_for(&self, category: &str) -> Money {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
            .unwrap_or_default()
    }

    /// Bar chart of category totals
    pub fn chart(&self) -> Option<ChartData> {
        if self.is_empty() {
            return None;
        }

        let mut chart = ChartData::new("Expenses by Category", ChartKind::Bar);
        for category in &self.categories {
            chart.push(category.category.clone(), category.total);
        }
        Some(chart)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let period = match self.since {
            Some(since) => format!("since {}", since),
            None => "all time".to_string(),
        };

        if self.is_empty() {
            return format!("No expenses found ({}).\n", period);
        }

        let mut output = String::new();
        output.push_str(&format!("\n--- Category Summary ({}) ---\n", period));
        output.push_str(&format!(
            "{:<20} {:>12} {:>6} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&crate::display::report::separator(49));
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>12} {:>6} {:>7.1}%\n",
                category.category,
                category.total.format_with_symbol(currency),
                category.count,
                category.percentage
            ));
        }

        output.push_str(&crate::display::report::separator(49));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>12}\n",
            "Total",
            self.total.format_with_symbol(currency)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::expense;

    #[test]
    fn test_food_example() {
        let expenses = vec![
            expense(1, "2024-01-05", "Food", 1250),
            expense(2, "2024-01-10", "Food", 750),
        ];

        let summary = CategorySummary::from_expenses(&expenses, None);
        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.total_for("Food"), Money::from_cents(2000));
        assert_eq!(summary.total_for("Travel"), Money::zero());
    }

    #[test]
    fn test_category_total_matches_records() {
        let expenses = vec![
            expense(1, "2024-01-05", "Food", 1250),
            expense(2, "2024-02-10", "Transport", 400),
            expense(3, "2024-03-10", "Food", 333),
            expense(4, "2024-03-11", "Shopping", 8000),
        ];

        let summary = CategorySummary::from_expenses(&expenses, None);
        for category in &summary.categories {
            let expected: Money = expenses
                .iter()
                .filter(|e| e.category == category.category)
                .map(|e| e.amount)
                .sum();
            assert_eq!(category.total, expected);
        }
        assert_eq!(summary.categories[0].category, "Shopping");
    }

    #[test]
    fn test_window_excludes_older_expenses() {
        let expenses = vec![
            expense(1, "2024-01-05", "Food", 1250),
            expense(2, "2024-03-10", "Food", 500),
        ];
        let since = NaiveDate::from_ymd_opt(2024, 3, 1);

        let summary = CategorySummary::from_expenses(&expenses, since);
        assert_eq!(summary.total, Money::from_cents(500));
        assert!(summary.format_terminal("$").contains("since 2024-03-01"));
    }

    #[test]
    fn test_chart_is_bar() {
        let expenses = vec![expense(1, "2024-01-05", "Food", 1250)];
        let chart = CategorySummary::from_expenses(&expenses, None).chart().unwrap();
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.points[0].label, "Food");
    }

    #[test]
    fn test_empty_summary() {
        let summary = CategorySummary::from_expenses(&[], None);
        assert!(summary.chart().is_none());
        assert_eq!(summary.format_terminal("$"), "No expenses found (all time).\n");
    }
}
