//! Calendar month used as the grouping key for monthly reports

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (year, month) pair
///
/// Field order gives chronological ordering for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month; `month` must be 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing a date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Full English month name ("January")
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Short label for chart axes ("Jan 2024")
    pub fn short_label(&self) -> String {
        format!("{} {}", &self.name()[..3], self.year)
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }

    /// "YYYY-MM" key
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {} (expected YYYY-MM)", s)
            }
            MonthParseError::InvalidMonth(m) => {
                write!(f, "Invalid month: {} (expected 1-12)", m)
            }
        }
    }
}

impl std::error::Error for MonthParseError {}
