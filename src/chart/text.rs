//! Plain-text chart renderer
//!
//! Used when stdout is not a terminal, with `--plain`, or when the settings
//! ask for text charts.

use std::io::Write;

use crate::display::report::{double_separator, format_bar, format_percentage, sparkline, truncate};
use crate::error::{ExpenseError, ExpenseResult};

use super::{ChartData, ChartKind, ChartRenderer};

const LABEL_WIDTH: usize = 20;

/// Writes charts as block-character bars
pub struct TextChart<W: Write> {
    writer: W,
    bar_width: usize,
    currency_symbol: String,
}

impl<W: Write> TextChart<W> {
    /// Create a text chart writer with a 30-column bar
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bar_width: 30,
            currency_symbol: "$".to_string(),
        }
    }

    /// Change the bar width
    pub fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Change the currency symbol
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render a chart to a string
    fn format(&self, chart: &ChartData) -> String {
        let width = LABEL_WIDTH + self.bar_width + 22;
        let mut output = String::new();

        output.push('\n');
        output.push_str(&chart.title);
        output.push('\n');
        output.push_str(&double_separator(width));
        output.push('\n');

        if chart.is_empty() {
            output.push_str("(no data)\n");
            return output;
        }

        let label_width = chart
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(LABEL_WIDTH);

        match chart.kind {
            ChartKind::Pie => {
                for point in &chart.points {
                    let share = chart.share(point);
                    output.push_str(&format!(
                        "{:<lw$} {} {:>6} {:>12}\n",
                        truncate(&point.label, label_width),
                        format_bar(share, 1.0, self.bar_width),
                        format_percentage(share * 100.0),
                        point.value.format_with_symbol(&self.currency_symbol),
                        lw = label_width
                    ));
                }
                output.push_str(&format!(
                    "{:<lw$} {:>w$}\n",
                    "Total",
                    chart.total().format_with_symbol(&self.currency_symbol),
                    lw = label_width,
                    w = self.bar_width + 20
                ));
            }
            ChartKind::Bar | ChartKind::Line => {
                let max = chart.max_value().cents() as f64;
                for point in &chart.points {
                    output.push_str(&format!(
                        "{:<lw$} {} {:>12}\n",
                        truncate(&point.label, label_width),
                        format_bar(point.value.cents() as f64, max, self.bar_width),
                        point.value.format_with_symbol(&self.currency_symbol),
                        lw = label_width
                    ));
                }
                if chart.kind == ChartKind::Line {
                    let values: Vec<u64> = chart
                        .points
                        .iter()
                        .map(|p| p.value.cents().max(0) as u64)
                        .collect();
                    output.push_str(&format!(
                        "{:<lw$} {}\n",
                        "Trend",
                        sparkline(&values),
                        lw = label_width
                    ));
                }
            }
        }

        output
    }
}

impl<W: Write> ChartRenderer for TextChart<W> {
    fn render(&mut self, chart: &ChartData) -> ExpenseResult<()> {
        let text = self.format(chart);
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| ExpenseError::Chart(format!("Failed to write chart: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn render(chart: &ChartData) -> String {
        let mut sink = TextChart::new(Vec::new()).with_bar_width(10);
        sink.render(chart).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_bar_chart() {
        let chart = ChartData::new("Expenses by Category", ChartKind::Bar)
            .with_point("Food", Money::from_cents(2000))
            .with_point("Travel", Money::from_cents(1000));

        let output = render(&chart);
        assert!(output.contains("Expenses by Category"));
        assert!(output.contains("Food   ██████████ "));
        assert!(output.contains("Travel █████░░░░░ "));
        assert!(output.contains("$20.00"));
    }

    #[test]
    fn test_pie_chart_shows_percentages_and_total() {
        let chart = ChartData::new("January 2024", ChartKind::Pie)
            .with_point("Food", Money::from_cents(750))
            .with_point("Travel", Money::from_cents(250));

        let output = render(&chart);
        assert!(output.contains("75%"));
        assert!(output.contains("25%"));
        assert!(output.contains("Total"));
        assert!(output.contains("$10.00"));
    }

    #[test]
    fn test_line_chart_has_sparkline() {
        let chart = ChartData::new("Monthly Spending Trends", ChartKind::Line)
            .with_point("Jan 2024", Money::from_cents(100))
            .with_point("Feb 2024", Money::from_cents(800));

        let output = render(&chart);
        assert!(output.contains("Trend"));
        assert!(output.contains('█'));
    }

    #[test]
    fn test_empty_chart() {
        let output = render(&ChartData::new("Nothing", ChartKind::Bar));
        assert!(output.contains("(no data)"));
    }

    #[test]
    fn test_currency_symbol() {
        let chart = ChartData::new("Euro", ChartKind::Bar).with_point("Food", Money::from_cents(500));
        let mut sink = TextChart::new(Vec::new()).with_currency("€");
        sink.render(&chart).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("€5.00"));
    }
}
