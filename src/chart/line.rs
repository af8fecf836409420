//! Line chart renderer
//!
//! Points are spaced `width / len` apart starting at x = 0, so the last
//! vertex sits one spacing short of the right edge.

use serde::Serialize;

use super::{scale, series_max, ChartContainer, ChartKind};
use crate::format::{chart_value, escape_html};

const STROKE: &str = "#00d4ff";
const MARKER_RADIUS: f64 = 4.0;

/// One vertex of the polyline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub value: f64,
    pub x: f64,
    pub y: f64,
    /// Scaled height above the baseline
    pub height: f64,
    /// Tooltip, prefix plus raw value
    pub title: String,
}

/// Line chart layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub label: String,
    pub width: f64,
    pub height: f64,
    pub points: Vec<LinePoint>,
}

impl LineChart {
    pub fn layout(values: &[f64], label: &str, prefix: &str, width: f64, height: f64) -> Self {
        let max = series_max(values);
        let spacing = if values.is_empty() {
            0.0
        } else {
            width / values.len() as f64
        };

        let points = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let scaled = scale(value, max, height);
                LinePoint {
                    value,
                    x: i as f64 * spacing,
                    y: height - scaled,
                    height: scaled,
                    title: format!("{}{}", prefix, chart_value(value)),
                }
            })
            .collect();

        Self {
            label: label.to_string(),
            width,
            height,
            points,
        }
    }

    /// SVG path data, `"M x y L x y ..."`
    pub fn path_data(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { "M" } else { "L" };
                format!("{} {} {}", cmd, p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg class="line-chart" width="{}" height="{}" role="img" aria-label="{}" style="display: block">"#,
            self.width,
            self.height,
            escape_html(&self.label)
        );

        svg.push_str(&format!(
            r#"<path d="{}" stroke="{}" stroke-width="2" fill="none"/>"#,
            self.path_data(),
            STROKE
        ));

        for point in &self.points {
            svg.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"><title>{}</title></circle>"#,
                point.x,
                point.y,
                MARKER_RADIUS,
                STROKE,
                escape_html(&point.title)
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Rebuild `container` as a line chart of `values`
pub fn render_line_chart(
    container: &mut ChartContainer,
    values: &[f64],
    label: &str,
    prefix: &str,
    width: f64,
    height: f64,
) {
    let chart = LineChart::layout(values, label, prefix, width, height);
    tracing::debug!(container = %container.id, points = chart.points.len(), "Rendering line chart");
    container.replace(ChartKind::Line, chart.to_svg());
}
