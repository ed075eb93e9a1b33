//! Full-screen chart renderer
//!
//! Takes over the terminal (raw mode, alternate screen), draws the chart with
//! ratatui and returns to the menu on the next key press.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame, Terminal,
};

use crate::error::{ExpenseError, ExpenseResult};

use super::{ChartData, ChartKind, ChartRenderer};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightMagenta,
];

static PANIC_HOOK: Once = Once::new();

fn chart_error(e: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Chart(e.to_string())
}

/// Draws charts full-screen with ratatui
#[derive(Debug, Default)]
pub struct TerminalChart {
    currency_symbol: String,
}

impl TerminalChart {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn money(&self, cents: i64) -> String {
        crate::models::Money::from_cents(cents).format_with_symbol(self.symbol())
    }

    fn symbol(&self) -> &str {
        if self.currency_symbol.is_empty() {
            "$"
        } else {
            &self.currency_symbol
        }
    }

    fn draw(&self, frame: &mut Frame, chart: &ChartData) {
        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());

        let block = Block::bordered().title(format!(" {} ", chart.title));

        if chart.is_empty() {
            frame.render_widget(Paragraph::new("No data").block(block), chunks[0]);
        } else {
            match chart.kind {
                ChartKind::Bar => self.draw_bars(frame, chunks[0], block, chart),
                ChartKind::Line => self.draw_line(frame, chunks[0], block, chart),
                ChartKind::Pie => self.draw_slices(frame, chunks[0], block, chart),
            }
        }

        let footer = Paragraph::new(Line::from(Span::styled(
            "Press any key to return to the menu",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(footer, chunks[1]);
    }

    fn draw_bars(&self, frame: &mut Frame, area: Rect, block: Block, chart: &ChartData) {
        let bars: Vec<Bar> = chart
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                Bar::default()
                    .value(point.value.cents().max(0) as u64)
                    .text_value(self.money(point.value.cents()))
                    .label(Line::from(point.label.clone()))
                    .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
            })
            .collect();

        let longest_label = chart
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut widget = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_gap(1)
            .value_style(Style::default().add_modifier(Modifier::BOLD));

        // Long labels (category names) read better beside horizontal bars
        if longest_label > 6 {
            widget = widget.direction(Direction::Horizontal).bar_width(1);
        } else {
            let count = bars.len().max(1) as u16;
            let width = (area.width.saturating_sub(2) / count).saturating_sub(1).clamp(1, 12);
            widget = widget.bar_width(width);
        }

        frame.render_widget(widget, area);
    }

    fn draw_line(&self, frame: &mut Frame, area: Rect, block: Block, chart: &ChartData) {
        let points: Vec<(f64, f64)> = chart
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value.as_f64()))
            .collect();

        let last = chart.points.len().saturating_sub(1);
        let max = chart.max_value().as_f64().max(1.0) * 1.1;

        let x_labels: Vec<Span> = [0, last / 2, last]
            .iter()
            .map(|&i| Span::raw(chart.points[i].label.clone()))
            .collect();
        let y_labels: Vec<Span> = [0.0, max / 2.0, max]
            .iter()
            .map(|&v| Span::raw(self.money((v * 100.0).round() as i64)))
            .collect();

        let datasets = vec![
            Dataset::default()
                .name("Total")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&points),
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Magenta))
                .data(&points),
        ];

        let widget = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Month")
                    .bounds([0.0, last.max(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("Amount")
                    .bounds([0.0, max])
                    .labels(y_labels),
            );

        frame.render_widget(widget, area);
    }

    fn draw_slices(&self, frame: &mut Frame, area: Rect, block: Block, chart: &ChartData) {
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical(
            chart
                .points
                .iter()
                .map(|_| Constraint::Length(1))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(inner);

        for (i, point) in chart.points.iter().enumerate() {
            let share = chart.share(point);
            let label = format!(
                "{}  {:.1}%  {}",
                point.label,
                share * 100.0,
                self.money(point.value.cents())
            );
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(PALETTE[i % PALETTE.len()]))
                .ratio(share)
                .label(label);
            frame.render_widget(gauge, rows[i]);
        }
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&mut self, chart: &ChartData) -> ExpenseResult<()> {
        let mut terminal = init_terminal()?;
        let result = self.run(&mut terminal, chart);
        restore_terminal()?;
        result
    }
}

impl TerminalChart {
    fn run(&self, terminal: &mut Tui, chart: &ChartData) -> ExpenseResult<()> {
        loop {
            terminal
                .draw(|frame| self.draw(frame, chart))
                .map_err(chart_error)?;

            // Resize and other events just trigger a redraw
            if let Event::Key(key) = event::read().map_err(chart_error)? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

/// Enter raw mode and the alternate screen
fn init_terminal() -> ExpenseResult<Tui> {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
    });

    enable_raw_mode().map_err(chart_error)?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(chart_error(e));
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(chart_error)
}

/// Leave the alternate screen and raw mode
fn restore_terminal() -> ExpenseResult<()> {
    disable_raw_mode().map_err(chart_error)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(chart_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(chart: &ChartData) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let renderer = TerminalChart::new("$");
        terminal.draw(|frame| renderer.draw(frame, chart)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_draws_title_and_footer() {
        let chart = ChartData::new("Expenses by Category", ChartKind::Bar)
            .with_point("Groceries", Money::from_cents(2000));
        let text = draw(&chart);
        assert!(text.contains("Expenses by Category"));
        assert!(text.contains("Press any key"));
    }

    #[test]
    fn test_draws_pie_slices() {
        let chart = ChartData::new("January 2024", ChartKind::Pie)
            .with_point("Food", Money::from_cents(750))
            .with_point("Travel", Money::from_cents(250));
        let text = draw(&chart);
        assert!(text.contains("Food  75.0%  $7.50"));
        assert!(text.contains("Travel  25.0%  $2.50"));
    }

    #[test]
    fn test_draws_line_chart() {
        let chart = ChartData::new("Monthly Spending Trends", ChartKind::Line)
            .with_point("Jan 2024", Money::from_cents(100))
            .with_point("Feb 2024", Money::from_cents(300));
        let text = draw(&chart);
        assert!(text.contains("Monthly Spending Trends"));
        assert!(text.contains("Jan 2024"));
    }

    #[test]
    fn test_draws_empty_chart() {
        let text = draw(&ChartData::new("Nothing here", ChartKind::Bar));
        assert!(text.contains("No data"));
    }
}
