//! Dashboard load state machine
//!
//! `Loading -> Rendered`. One fetch per load. In demo mode any failure
//! renders the hardcoded dataset instead and never reaches the user.

use super::fixture::Fixture;
use super::source::FixtureSource;
use super::view::{ChartOptions, DashboardView, DataSource};
use super::FixtureError;

/// Load progress
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Rendered(DashboardView),
}

/// Decide what to render for a fetch outcome
pub fn settle(
    outcome: Result<Fixture, FixtureError>,
    demo_mode: bool,
    options: &ChartOptions,
) -> Result<DashboardView, FixtureError> {
    match outcome {
        Ok(fixture) => {
            if !fixture.has_recognized_sections() {
                tracing::debug!("Fixture has no dashboard or analytics sections");
            }
            Ok(DashboardView::render(&fixture, DataSource::Fixture, options))
        }
        Err(e) if demo_mode => {
            tracing::warn!(error = %e, "Dashboard data unavailable, rendering defaults");
            Ok(DashboardView::fallback(options))
        }
        Err(e) => Err(e),
    }
}

/// Loads dashboard data from a fixture source
pub struct DashboardLoader<F> {
    source: F,
    demo_mode: bool,
    options: ChartOptions,
    state: LoadState,
}

impl<F: FixtureSource> DashboardLoader<F> {
    pub fn new(source: F, demo_mode: bool, options: ChartOptions) -> Self {
        Self {
            source,
            demo_mode,
            options,
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The rendered view, once loaded
    pub fn view(&self) -> Option<&DashboardView> {
        match &self.state {
            LoadState::Rendered(view) => Some(view),
            LoadState::Loading => None,
        }
    }

    /// Fetch and render. With demo mode off a failed fetch is returned and
    /// the loader stays in `Loading`.
    pub async fn load(&mut self) -> Result<&DashboardView, FixtureError> {
        self.state = LoadState::Loading;

        tracing::debug!(source = %self.source.describe(), "Loading dashboard data");
        let outcome = self.source.fetch().await;
        let view = settle(outcome, self.demo_mode, &self.options)?;

        tracing::info!(
            source = ?view.source,
            stats = view.stats.len(),
            charts = view.charts.len(),
            "Dashboard rendered"
        );

        self.state = LoadState::Rendered(view);
        match &self.state {
            LoadState::Rendered(view) => Ok(view),
            LoadState::Loading => unreachable!("state was just set to Rendered"),
        }
    }

    /// Re-run the load, e.g. after the date filter changes
    pub async fn reload(&mut self) -> Result<&DashboardView, FixtureError> {
        self.load().await
    }
}
