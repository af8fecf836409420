//! Bar chart renderer

use serde::Serialize;

use super::{scale, series_max, ChartContainer, ChartKind};
use crate::format::{chart_value, escape_html};

const BAR_COLOR: &str = "rgba(0, 212, 255, 0.6)";
const CAPTION_COLOR: &str = "#00d4ff";

/// One proportionally scaled bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub value: f64,
    /// Height in pixels
    pub height: f64,
    /// Share of the container width, in percent
    pub width_pct: f64,
    /// Tooltip, `"{label}: {value}"`
    pub title: String,
    /// Raw value shown above the bar
    pub caption: String,
}

/// Bar chart layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub label: String,
    pub height: f64,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Lay out one bar per value, scaled so the largest value fills `height`
    pub fn layout(values: &[f64], label: &str, height: f64) -> Self {
        let max = series_max(values);
        let width_pct = if values.is_empty() {
            0.0
        } else {
            100.0 / values.len() as f64
        };

        let bars = values
            .iter()
            .map(|&value| Bar {
                value,
                height: scale(value, max, height),
                width_pct,
                title: format!("{}: {}", label, chart_value(value)),
                caption: chart_value(value),
            })
            .collect();

        Self {
            label: label.to_string(),
            height,
            bars,
        }
    }

    /// Serialize as inline-block bars
    pub fn to_html(&self) -> String {
        let mut html = format!(
            r#"<div class="bar-chart" aria-label="{}" style="height: {}px">"#,
            escape_html(&self.label),
            self.height
        );

        for bar in &self.bars {
            html.push_str(&format!(
                concat!(
                    r#"<div class="bar" title="{}" style="display: inline-block; width: {}%; "#,
                    r#"height: {}px; background-color: {}; margin: 0 2px; vertical-align: bottom; "#,
                    r#"position: relative; border-radius: 5px 5px 0 0">"#,
                    r#"<div class="bar-value" style="position: absolute; top: -20px; left: 50%; "#,
                    r#"transform: translateX(-50%); font-size: 10px; color: {}">{}</div></div>"#
                ),
                escape_html(&bar.title),
                bar.width_pct,
                bar.height,
                BAR_COLOR,
                CAPTION_COLOR,
                escape_html(&bar.caption),
            ));
        }

        html.push_str("</div>");
        html
    }
}

/// Rebuild `container` as a bar chart of `values`
pub fn render_bar_chart(container: &mut ChartContainer, values: &[f64], label: &str, height: f64) {
    let chart = BarChart::layout(values, label, height);
    tracing::debug!(container = %container.id, bars = chart.bars.len(), "Rendering bar chart");
    container.replace(ChartKind::Bar, chart.to_html());
}
