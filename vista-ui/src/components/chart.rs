//! Chart Component
//!
//! Hosts the bar and line chart markup computed by `vista::chart`. Each
//! render replaces the container content wholesale.

use leptos::*;
use vista::chart::{ChartContainer, ChartKind};
use vista::dashboard::chart_ids;

/// A titled card around one chart container
#[component]
pub fn ChartPanel(container: ChartContainer) -> impl IntoView {
    let title = match container.id.as_str() {
        chart_ids::USER_GROWTH => "User Growth",
        chart_ids::REVENUE => "Revenue",
        chart_ids::PRODUCT_VIEWS => "Product Views",
        _ => "Chart",
    };
    let kind_class = match container.kind {
        Some(ChartKind::Bar) => "chart-bar",
        Some(ChartKind::Line) => "chart-line",
        None => "chart-empty",
    };

    view! {
        <div class="chart-card">
            <h3>{title}</h3>
            <div
                id=container.id.clone()
                class=format!("chart-container {}", kind_class)
                inner_html=container.markup
            />
        </div>
    }
}
