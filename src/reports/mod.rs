//! Reports for the expense tracker
//!
//! Each report is a plain data structure built from the stored expenses.
//! It can format itself for the terminal and hand its `(label, total)`
//! series to a chart renderer.

pub mod category;
pub mod daily;
pub mod monthly;
pub mod trend;

pub use category::CategorySummary;
pub use daily::DailyReport;
pub use monthly::MonthlySummary;
pub use trend::TrendReport;

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money, YearMonth};

/// Longest trailing window the daily view will zero-fill
pub const MAX_DAILY_WINDOW_DAYS: u32 = 366;

/// First day of the trailing window `today - days ..= today`
///
/// Fails with a validation error when the window reaches past the earliest
/// representable date.
pub fn window_start(today: NaiveDate, days: u32) -> ExpenseResult<NaiveDate> {
    today
        .checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            ExpenseError::Validation(format!(
                "A window of {} days reaches past the earliest supported date",
                days
            ))
        })
}

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of the overall total, 0-100
    pub percentage: f64,
}

/// Group expenses by category, largest total first
///
/// Ties are broken by category name so output is stable.
pub fn category_totals<'a, I>(expenses: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut grouped: HashMap<&str, (Money, usize)> = HashMap::new();
    for expense in expenses {
        let entry = grouped
            .entry(expense.category.as_str())
            .or_insert((Money::zero(), 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let overall: Money = grouped.values().map(|(total, _)| *total).sum();

    let mut totals: Vec<CategoryTotal> = grouped
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
            percentage: percentage_of(total, overall),
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));
    totals
}

/// Sum expenses per calendar month, in chronological order
pub fn monthly_totals<'a, I>(expenses: I) -> BTreeMap<YearMonth, Money>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(YearMonth::of(expense.date)).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// Sum expenses per date, in chronological order
pub fn daily_totals<'a, I>(expenses: I) -> BTreeMap<NaiveDate, Money>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.date).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// `part` as a percentage of `whole`, zero when `whole` is not positive
pub fn percentage_of(part: Money, whole: Money) -> f64 {
    if whole.cents() <= 0 {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::expense;
    use super::*;

    #[test]
    fn test_category_totals_sorted_by_amount() {
        let expenses = vec![
            expense(1, "2024-01-05", "Food", 1250),
            expense(2, "2024-01-10", "Transport", 3000),
            expense(3, "2024-01-12", "Food", 750),
        ];

        let totals = category_totals(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Transport");
        assert_eq!(totals[1].category, "Food");
        assert_eq!(totals[1].total, Money::from_cents(2000));
        assert_eq!(totals[1].count, 2);
        assert!((totals[0].percentage - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_totals_are_chronological() {
        let expenses = vec![
            expense(1, "2024-03-01", "Food", 100),
            expense(2, "2023-12-31", "Food", 200),
            expense(3, "2024-03-15", "Food", 300),
        ];

        let totals: Vec<(String, i64)> = monthly_totals(&expenses)
            .into_iter()
            .map(|(month, total)| (month.key(), total.cents()))
            .collect();
        assert_eq!(
            totals,
            vec![("2023-12".to_string(), 200), ("2024-03".to_string(), 400)]
        );
    }

    #[test]
    fn test_daily_totals() {
        let expenses = vec![
            expense(1, "2024-01-05", "Food", 100),
            expense(2, "2024-01-05", "Transport", 250),
            expense(3, "2024-01-02", "Food", 50),
        ];

        let totals = daily_totals(&expenses);
        let first = totals.iter().next().unwrap();
        assert_eq!(first.0.to_string(), "2024-01-02");
        assert_eq!(totals.values().last().unwrap().cents(), 350);
    }

    #[test]
    fn test_window_start() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            window_start(today, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(window_start(today, 0).unwrap(), today);
        assert!(window_start(today, u32::MAX).unwrap_err().is_validation());
    }

    #[test]
    fn test_percentage_of_zero_whole() {
        assert_eq!(percentage_of(Money::from_cents(5), Money::zero()), 0.0);
    }
}
