//! Rendered dashboard
//!
//! Turns a fixture into the stat counters, charts and activity table the
//! page shows.

use serde::Serialize;

use super::activity::ActivityTable;
use super::fixture::{AnalyticsSection, Fixture, StatsSnapshot};
use crate::chart::{render_bar_chart, render_line_chart, ChartContainer, CHART_HEIGHT, DEFAULT_WIDTH};
use crate::counter::CounterPlan;

/// Chart sizing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub height: f64,
    pub width: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: CHART_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Where the rendered data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Fixture,
    Fallback,
}

/// One animated stat counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Display key, also the element class
    pub key: &'static str,
    pub label: &'static str,
    pub target: u64,
    pub prefix: &'static str,
    /// Text shown once the counter settles
    pub display: String,
}

impl StatCard {
    fn new(key: &'static str, label: &'static str, target: u64, prefix: &'static str) -> Self {
        Self {
            key,
            label,
            target,
            prefix,
            display: CounterPlan::standard(target, prefix).final_frame(),
        }
    }

    /// Frame schedule for animating this card
    pub fn plan(&self) -> CounterPlan {
        CounterPlan::standard(self.target, self.prefix)
    }
}

/// Display keys
pub mod stat_keys {
    pub const TOTAL_USERS: &str = "stat-total-users";
    pub const ACTIVE_SESSIONS: &str = "stat-active-sessions";
    pub const REVENUE: &str = "stat-revenue";
    pub const PRODUCTS: &str = "stat-products";
}

/// Chart container ids
pub mod chart_ids {
    pub const USER_GROWTH: &str = "user-growth-chart";
    pub const REVENUE: &str = "revenue-chart";
    pub const PRODUCT_VIEWS: &str = "product-views-chart";
}

/// Everything the dashboard renders for one load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub source: DataSource,
    pub stats: Vec<StatCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<ActivityTable>,
    pub charts: Vec<ChartContainer>,
}

impl DashboardView {
    /// Render the sections present in `fixture`
    pub fn render(fixture: &Fixture, source: DataSource, options: &ChartOptions) -> Self {
        let dashboard = fixture.dashboard.as_ref();

        let stats = dashboard
            .and_then(|d| d.stats.as_ref())
            .map(stat_cards)
            .unwrap_or_default();

        let activity = dashboard
            .and_then(|d| d.recent_activity.clone())
            .map(ActivityTable::new);

        let charts = fixture
            .analytics
            .as_ref()
            .map(|a| charts(a, options))
            .unwrap_or_default();

        Self {
            source,
            stats,
            activity,
            charts,
        }
    }

    /// Render the hardcoded dataset
    pub fn fallback(options: &ChartOptions) -> Self {
        Self::render(&Fixture::fallback(), DataSource::Fallback, options)
    }

    pub fn stat(&self, key: &str) -> Option<&StatCard> {
        self.stats.iter().find(|s| s.key == key)
    }

    pub fn chart(&self, id: &str) -> Option<&ChartContainer> {
        self.charts.iter().find(|c| c.id == id)
    }

    /// The snapshot the stat cards were built from
    pub fn snapshot(&self) -> StatsSnapshot {
        let target = |key| self.stat(key).map(|s| s.target);
        StatsSnapshot {
            total_users: target(stat_keys::TOTAL_USERS),
            active_sessions: target(stat_keys::ACTIVE_SESSIONS),
            revenue: target(stat_keys::REVENUE),
            products: target(stat_keys::PRODUCTS),
        }
    }
}

fn stat_cards(stats: &StatsSnapshot) -> Vec<StatCard> {
    [
        (stat_keys::TOTAL_USERS, "Total Users", stats.total_users, ""),
        (stat_keys::ACTIVE_SESSIONS, "Active Sessions", stats.active_sessions, ""),
        (stat_keys::REVENUE, "Revenue", stats.revenue, "$"),
        (stat_keys::PRODUCTS, "Products", stats.products, ""),
    ]
    .into_iter()
    .filter_map(|(key, label, value, prefix)| value.map(|v| StatCard::new(key, label, v, prefix)))
    .collect()
}

fn charts(analytics: &AnalyticsSection, options: &ChartOptions) -> Vec<ChartContainer> {
    let mut out = Vec::new();

    if let Some(values) = &analytics.user_growth {
        let mut container = ChartContainer::new(chart_ids::USER_GROWTH);
        render_bar_chart(&mut container, values, "Users", options.height);
        out.push(container);
    }

    if let Some(values) = &analytics.revenue {
        let mut container = ChartContainer::new(chart_ids::REVENUE);
        render_line_chart(&mut container, values, "Revenue", "$", options.width, options.height);
        out.push(container);
    }

    if let Some(values) = &analytics.product_views {
        let mut container = ChartContainer::new(chart_ids::PRODUCT_VIEWS);
        render_bar_chart(&mut container, values, "Views", options.height);
        out.push(container);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;

    #[test]
    fn test_fallback_view() {
        let view = DashboardView::fallback(&ChartOptions::default());
        assert_eq!(view.source, DataSource::Fallback);
        assert_eq!(view.snapshot(), StatsSnapshot::fallback());
        assert_eq!(view.stat(stat_keys::REVENUE).unwrap().display, "$125,000");
        assert_eq!(view.stat(stat_keys::TOTAL_USERS).unwrap().display, "1,250");
        assert!(view.activity.is_none());
        assert_eq!(view.charts.len(), 3);
        assert_eq!(view.chart(chart_ids::REVENUE).unwrap().kind, Some(ChartKind::Line));
    }

    #[test]
    fn test_absent_fields_are_not_rendered() {
        let fixture = Fixture::parse(br#"{"dashboard":{"stats":{"products":0}},"analytics":{"revenue":[1,2]}}"#).unwrap();
        let view = DashboardView::render(&fixture, DataSource::Fixture, &ChartOptions::default());

        assert_eq!(view.stats.len(), 1);
        assert_eq!(view.stat(stat_keys::PRODUCTS).unwrap().display, "0");
        assert!(view.activity.is_none());
        assert_eq!(view.charts.len(), 1);
        assert!(view.chart(chart_ids::USER_GROWTH).is_none());
    }

    #[test]
    fn test_empty_activity_list_still_renders() {
        let fixture = Fixture::parse(br#"{"dashboard":{"recentActivity":[]}}"#).unwrap();
        let view = DashboardView::render(&fixture, DataSource::Fixture, &ChartOptions::default());
        assert_eq!(view.activity, Some(ActivityTable::default()));
    }

    #[test]
    fn test_chart_options_apply() {
        let options = ChartOptions {
            height: 100.0,
            width: 300.0,
        };
        let view = DashboardView::fallback(&options);
        let revenue = view.chart(chart_ids::REVENUE).unwrap();
        assert!(revenue.markup.contains(r#"width="300""#));
        assert!(revenue.markup.contains(r#"height="100""#));
    }
}
