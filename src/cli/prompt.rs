//! Line-oriented console prompts
//!
//! [`Console`] wraps any `BufRead`/`Write` pair so the menu can run against
//! stdin/stdout or scripted input in tests. The `parse_*` helpers turn a raw
//! answer into a typed value or a validation error.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, MoneyParseError};

/// Date format accepted at every prompt
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A prompt/answer console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a prompt and read one trimmed line
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> ExpenseResult<Option<String>> {
        self.write(prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(ExpenseError::console)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Write text followed by a newline
    pub fn say(&mut self, text: impl AsRef<str>) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text.as_ref()).map_err(ExpenseError::console)
    }

    /// Write text as is
    pub fn write(&mut self, text: impl AsRef<str>) -> ExpenseResult<()> {
        write!(self.output, "{}", text.as_ref())
            .and_then(|_| self.output.flush())
            .map_err(ExpenseError::console)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a non-negative amount
pub fn parse_amount(input: &str) -> ExpenseResult<Money> {
    let amount = Money::parse(input).map_err(|e| match e {
        MoneyParseError::TooLarge(_) => ExpenseError::Validation(e.to_string()),
        MoneyParseError::InvalidFormat(_) => ExpenseError::Validation(format!(
            "Invalid amount '{}'. Please enter a valid number.",
            input
        )),
    })?;

    if amount.is_negative() {
        return Err(ExpenseError::Validation(
            "Amount cannot be negative".to_string(),
        ));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid date '{}'. Use YYYY-MM-DD.",
            input.trim()
        ))
    })
}

/// Parse an optional date; blank means none
pub fn parse_optional_date(input: &str) -> ExpenseResult<Option<NaiveDate>> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(input).map(Some)
    }
}

/// Parse a positive count; blank gives the default
pub fn parse_count(input: &str, default: usize) -> ExpenseResult<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    match input.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(ExpenseError::Validation(format!(
            "Invalid number '{}'. Please enter a positive whole number.",
            input
        ))),
    }
}

/// Parse an optional positive count; blank means none
pub fn parse_optional_count(input: &str) -> ExpenseResult<Option<usize>> {
    if input.trim().is_empty() {
        Ok(None)
    } else {
        parse_count(input, 0).map(Some)
    }
}

/// Parse a year; blank gives the default
pub fn parse_year(input: &str, default: i32) -> ExpenseResult<i32> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    input
        .parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid year '{}'", input)))
}

/// Parse a month number 1-12; blank gives the default
pub fn parse_month(input: &str, default: u32) -> ExpenseResult<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    match input.parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(ExpenseError::Validation(
            "Invalid month. Please enter a number between 1 and 12.".to_string(),
        )),
    }
}
