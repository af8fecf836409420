//! Charts
//!
//! Bar and line renderers for dashboard time series. Layout is computed as
//! plain data first ([`BarChart`], [`LineChart`]) and serialized to markup
//! second, so the same geometry drives server-rendered HTML and the
//! frontend's reactive views.

pub mod bar;
pub mod line;

pub use bar::{render_bar_chart, Bar, BarChart};
pub use line::{render_line_chart, LineChart, LinePoint};

use serde::Serialize;

/// Fixed chart height in pixels
pub const CHART_HEIGHT: f64 = 200.0;

/// Line chart width used when the container has no measured width
pub const DEFAULT_WIDTH: f64 = 600.0;

/// Largest value in a series; 0 for empty or non-positive series
pub fn series_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Scale `value` against `max` onto `0..=height`.
///
/// A zero max yields 0 rather than NaN; negative values clamp to 0.
pub fn scale(value: f64, max: f64, height: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value.max(0.0) / max) * height
}

/// Kind of chart held by a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

/// Visual container for one chart. Every render replaces the previous
/// content entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartContainer {
    pub id: String,
    pub kind: Option<ChartKind>,
    pub markup: String,
    /// How many times the container has been rebuilt
    #[serde(skip)]
    pub renders: u32,
}

impl ChartContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Drop any rendered content
    pub fn clear(&mut self) {
        self.kind = None;
        self.markup.clear();
    }

    fn replace(&mut self, kind: ChartKind, markup: String) {
        self.clear();
        self.kind = Some(kind);
        self.markup = markup;
        self.renders += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}
