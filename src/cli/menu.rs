//! Interactive numbered menu
//!
//! Reads choices from a [`Console`] until "Exit" or end of input. Invalid
//! answers and failed operations are reported and the loop carries on.

use std::io::{BufRead, Write};

use log::debug;

use crate::chart::ChartRenderer;
use crate::config::Settings;
use crate::display::report::{double_separator, format_header};
use crate::display::{format_expense_lines, format_expense_row};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, YearMonth};
use crate::reports::{CategorySummary, DailyReport, MonthlySummary, TrendReport};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService};
use crate::storage::Storage;

use super::prompt::{
    parse_amount, parse_count, parse_month, parse_optional_count, parse_optional_date, parse_year,
    Console,
};

const MENU_WIDTH: usize = 60;

const MENU_OPTIONS: [&str; 9] = [
    "Add Expense",
    "View Recent Expenses",
    "Monthly Summary (Pie Chart)",
    "Category Summary (Bar Chart)",
    "Search Expenses",
    "Delete Expense",
    "Spending Trends (Line Chart)",
    "Daily Expenses (Bar Chart)",
    "Exit",
];

/// What the loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Ask a question; end of input quits the menu
macro_rules! ask {
    ($menu:expr, $prompt:expr) => {
        match $menu.console.ask($prompt)? {
            Some(answer) => answer,
            None => return Ok(Step::Quit),
        }
    };
}

/// The interactive menu
pub struct Menu<'a, R, W, C> {
    console: Console<R, W>,
    storage: &'a Storage,
    settings: &'a Settings,
    currency: &'a str,
    charts: C,
}

impl<'a, R: BufRead, W: Write, C: ChartRenderer> Menu<'a, R, W, C> {
    pub fn new(
        console: Console<R, W>,
        storage: &'a Storage,
        settings: &'a Settings,
        charts: C,
    ) -> Self {
        Self {
            console,
            storage,
            settings,
            currency: &settings.currency_symbol,
            charts,
        }
    }

    /// Run until "Exit" or end of input
    ///
    /// Only console failures end the loop with an error.
    pub fn run(&mut self) -> ExpenseResult<()> {
        self.console
            .say("Welcome to Personal Expense Tracker with Visualizations!")?;

        loop {
            self.print_menu()?;

            let choice = match self.console.ask("Enter your choice (1-9): ")? {
                Some(choice) => choice,
                None => break,
            };
            debug!("Menu choice: {:?}", choice);

            match self.dispatch(&choice) {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => break,
                Err(e @ ExpenseError::Console(_)) => return Err(e),
                Err(e) => self.console.say(format!("Error: {}", e))?,
            }
        }

        self.console.say("Thank you for using Personal Expense Tracker!")
    }

    /// Recover the console output and chart renderer
    pub fn into_parts(self) -> (W, C) {
        (self.console.into_output(), self.charts)
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        let mut text = String::new();
        text.push('\n');
        text.push_str(&double_separator(MENU_WIDTH));
        text.push('\n');
        text.push_str(&format_header("PERSONAL EXPENSE TRACKER", MENU_WIDTH));
        text.push('\n');
        text.push_str(&double_separator(MENU_WIDTH));
        text.push('\n');
        for (i, option) in MENU_OPTIONS.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", i + 1, option));
        }
        text.push_str(&double_separator(MENU_WIDTH));
        self.console.say(text)
    }

    fn dispatch(&mut self, choice: &str) -> ExpenseResult<Step> {
        match choice {
            "1" => self.add_expense(),
            "2" => self.recent_expenses(),
            "3" => self.monthly_summary(),
            "4" => self.category_summary(),
            "5" => self.search_expenses(),
            "6" => self.delete_expense(),
            "7" => self.spending_trends(),
            "8" => self.daily_expenses(),
            "9" => Ok(Step::Quit),
            _ => {
                self.console
                    .say("Invalid choice. Please enter a number from 1 to 9.")?;
                Ok(Step::Continue)
            }
        }
    }

    fn draw(&mut self, chart: Option<crate::chart::ChartData>) -> ExpenseResult<()> {
        if let Some(chart) = chart {
            self.charts.render(&chart)?;
        }
        Ok(())
    }

    fn add_expense(&mut self) -> ExpenseResult<Step> {
        let amount = parse_amount(&ask!(self, "Enter amount: $"))?;
        let note = ask!(self, "Enter note (optional): ");

        let mut listing = String::from("\nAvailable Categories:\n");
        for (i, category) in self.settings.categories.iter().enumerate() {
            listing.push_str(&format!("{}. {}\n", i + 1, category));
        }
        self.console.write(listing)?;

        let answer = ask!(self, "Select category (number): ");
        let choice = answer.parse::<usize>().unwrap_or(0);
        if choice == 0 || choice > self.settings.categories.len() {
            self.console.say(format!(
                "Unknown category choice '{}', using '{}'.",
                answer,
                self.settings.category_for_choice(0)
            ))?;
        }
        let category = self.settings.category_for_choice(choice);

        let date = parse_optional_date(&ask!(
            self,
            "Enter date (YYYY-MM-DD) or press Enter for today: "
        ))?;

        let expense = ExpenseService::new(self.storage).add(CreateExpenseInput {
            date,
            category,
            amount,
            note: Some(note),
        })?;

        self.console.say(format!(
            "✓ Expense added: {}",
            format_expense_row(&expense, self.currency)
        ))?;
        Ok(Step::Continue)
    }

    fn recent_expenses(&mut self) -> ExpenseResult<Step> {
        let prompt = format!(
            "Number of recent expenses to show (default {}): ",
            self.settings.recent_limit
        );
        let limit = parse_count(&ask!(self, &prompt), self.settings.recent_limit)?;

        let service = ExpenseService::new(self.storage);
        if service.count()? == 0 {
            self.console.say("No expenses recorded yet.")?;
            return Ok(Step::Continue);
        }

        let recent = service.recent(limit)?;
        self.console
            .say(format!("\n--- Recent Expenses (Last {}) ---", limit))?;
        self.console
            .write(format_expense_lines(&recent, self.currency))?;
        Ok(Step::Continue)
    }

    fn monthly_summary(&mut self) -> ExpenseResult<Step> {
        let now = YearMonth::current();

        let year_prompt = format!("Enter year (default {}): ", now.year());
        let year = parse_year(&ask!(self, &year_prompt), now.year())?;
        let month_prompt = format!("Enter month (1-12, default {}): ", now.month());
        let month = parse_month(&ask!(self, &month_prompt), now.month())?;

        let month = YearMonth::new(year, month)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        let report = MonthlySummary::generate(self.storage, month)?;

        self.console.write(report.format_terminal(self.currency))?;
        self.draw(report.chart())?;
        Ok(Step::Continue)
    }

    fn category_summary(&mut self) -> ExpenseResult<Step> {
        let prompt = match self.settings.category_window_days {
            Some(days) => format!("Number of days to analyze (default {}): ", days),
            None => "Number of days to analyze (blank for all time): ".to_string(),
        };
        let days = match parse_optional_count(&ask!(self, &prompt))? {
            Some(days) => Some(to_days(days)?),
            None => self.settings.category_window_days,
        };

        let report = CategorySummary::generate(self.storage, days)?;
        self.console.write(report.format_terminal(self.currency))?;
        self.draw(report.chart())?;
        Ok(Step::Continue)
    }

    fn search_expenses(&mut self) -> ExpenseResult<Step> {
        let category = ask!(self, "Category (blank for any): ");
        let start = parse_optional_date(&ask!(self, "Start date (YYYY-MM-DD, blank for none): "))?;
        let end = parse_optional_date(&ask!(self, "End date (YYYY-MM-DD, blank for none): "))?;
        let keyword = ask!(self, "Keyword (blank for none): ");

        let mut filter = ExpenseFilter::new();
        if !category.is_empty() {
            filter = filter.category(category);
        }
        if let Some(start) = start {
            filter = filter.since(start);
        }
        if let Some(end) = end {
            filter = filter.until(end);
        }
        if !keyword.is_empty() {
            filter = filter.keyword(keyword);
        }

        if filter.is_empty() {
            self.console
                .say("Please enter at least one search criterion.")?;
            return Ok(Step::Continue);
        }

        let results = ExpenseService::new(self.storage).search(&filter)?;
        if results.is_empty() {
            self.console.say("No matching expenses found.")?;
            return Ok(Step::Continue);
        }

        self.console
            .say(format!("\n--- Search Results ({} found) ---", results.len()))?;
        self.console
            .write(format_expense_lines(&results, self.currency))?;
        Ok(Step::Continue)
    }

    fn delete_expense(&mut self) -> ExpenseResult<Step> {
        let answer = ask!(self, "Enter expense ID to delete: ");
        let id: ExpenseId = answer
            .parse()
            .map_err(|_| ExpenseError::Validation(format!("Invalid expense ID '{}'", answer)))?;

        let deleted = ExpenseService::new(self.storage).delete(id)?;
        self.console.say(format!(
            "✓ Deleted expense: {}",
            format_expense_row(&deleted, self.currency)
        ))?;
        Ok(Step::Continue)
    }

    fn spending_trends(&mut self) -> ExpenseResult<Step> {
        let prompt = format!(
            "Number of months to analyze (default {}): ",
            self.settings.trend_months
        );
        let months = parse_count(&ask!(self, &prompt), self.settings.trend_months)?;

        let report = TrendReport::generate(self.storage, Some(months))?;
        self.console.write(report.format_terminal(self.currency))?;
        self.draw(report.chart())?;
        Ok(Step::Continue)
    }

    fn daily_expenses(&mut self) -> ExpenseResult<Step> {
        let default = self.settings.daily_window_days;
        let prompt = format!("Number of days to visualize (default {}): ", default);
        let days = to_days(parse_count(&ask!(self, &prompt), default as usize)?)?;

        let report = DailyReport::generate(self.storage, days)?;
        self.console.write(report.format_terminal(self.currency))?;
        self.draw(report.chart())?;
        Ok(Step::Continue)
    }
}

fn to_days(days: usize) -> ExpenseResult<u32> {
    u32::try_from(days)
        .map_err(|_| ExpenseError::Validation(format!("Too many days: {}", days)))
}
