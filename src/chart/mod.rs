//! Chart rendering
//!
//! Reports hand a titled series of `(label, amount)` points to a
//! [`ChartRenderer`]. Two renderers exist:
//!
//! - [`TextChart`]: block-character charts written to any `Write`
//! - [`TerminalChart`]: full-screen ratatui charts, dismissed with a key press

pub mod terminal;
pub mod text;

pub use terminal::TerminalChart;
pub use text::TextChart;

use crate::error::ExpenseResult;
use crate::models::Money;

/// The kind of chart to draw for a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Share of the total per label
    Pie,
    /// One bar per label
    Bar,
    /// Values over time, labels in chronological order
    Line,
}

/// A labelled value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: Money,
}

/// A chart ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    /// Create an empty chart
    pub fn new(title: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            title: title.into(),
            kind,
            points: Vec::new(),
        }
    }

    /// Append a point
    pub fn push(&mut self, label: impl Into<String>, value: Money) {
        self.points.push(ChartPoint {
            label: label.into(),
            value,
        });
    }

    /// Builder form of [`ChartData::push`]
    pub fn with_point(mut self, label: impl Into<String>, value: Money) -> Self {
        self.push(label, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all points
    pub fn total(&self) -> Money {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Largest point value, zero for an empty chart
    pub fn max_value(&self) -> Money {
        self.points
            .iter()
            .map(|p| p.value)
            .max()
            .unwrap_or_default()
    }

    /// A point's share of the total in `0.0..=1.0`
    pub fn share(&self, point: &ChartPoint) -> f64 {
        let total = self.total();
        if total.cents() <= 0 {
            return 0.0;
        }
        (point.value.cents() as f64 / total.cents() as f64).clamp(0.0, 1.0)
    }
}

/// A sink that draws charts
pub trait ChartRenderer {
    /// Draw a chart
    fn render(&mut self, chart: &ChartData) -> ExpenseResult<()>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for Box<R> {
    fn render(&mut self, chart: &ChartData) -> ExpenseResult<()> {
        (**self).render(chart)
    }
}

/// Renderer that remembers charts instead of drawing them
#[derive(Debug, Default)]
pub struct RecordingChart {
    pub charts: Vec<ChartData>,
}

impl ChartRenderer for RecordingChart {
    fn render(&mut self, chart: &ChartData) -> ExpenseResult<()> {
        self.charts.push(chart.clone());
        Ok(())
    }
}
