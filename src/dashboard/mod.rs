//! Dashboard
//!
//! Loads the fixture (or the hardcoded fallback), renders stat counters,
//! charts and the activity table, and greets the signed-in user.
//!
//! # Example
//!
//! ```rust,no_run
//! use vista::dashboard::{open, ChartOptions, DashboardLoader, FileFixtureSource};
//! use vista::store::{FileStore, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::new(FileStore::open("session.json")?);
//!     let source = FileFixtureSource::new("data/mock-data.json");
//!     let mut loader = DashboardLoader::new(source, true, ChartOptions::default());
//!
//!     let page = open(&session, &mut loader).await?;
//!     for stat in &page.view.stats {
//!         println!("{}: {}", stat.label, stat.display);
//!     }
//!     Ok(())
//! }
//! ```

pub mod activity;
pub mod fixture;
pub mod greeting;
pub mod loader;
pub mod source;
pub mod view;

pub use activity::ActivityTable;
pub use fixture::{ActivityRecord, AnalyticsSection, DashboardSection, Fixture, StatsSnapshot};
pub use greeting::Greeting;
pub use loader::{settle, DashboardLoader, LoadState};
pub use source::FixtureSource;
#[cfg(feature = "runtime")]
pub use source::{FileFixtureSource, HttpFixtureSource};
pub use view::{chart_ids, stat_keys, ChartOptions, DashboardView, DataSource, StatCard};

use serde::Serialize;
use thiserror::Error;

use crate::nav::{guard_dashboard, Redirect};
use crate::store::{Session, SessionStore};

/// Errors fetching or decoding the fixture
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed fixture: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why the dashboard could not be shown
#[derive(Error, Debug)]
pub enum OpenError {
    #[error("Not signed in")]
    Unauthenticated(Redirect),

    #[error(transparent)]
    Load(#[from] FixtureError),
}

/// Dashboard page model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub greeting: Option<Greeting>,
    pub view: DashboardView,
    pub sidebar_open: bool,
}

impl DashboardPage {
    /// Mobile sidebar toggle
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

/// Enter the dashboard: check the session, greet the user, load the data
pub async fn open<S, F>(
    session: &Session<S>,
    loader: &mut DashboardLoader<F>,
) -> Result<DashboardPage, OpenError>
where
    S: SessionStore,
    F: FixtureSource,
{
    guard_dashboard(session).map_err(OpenError::Unauthenticated)?;

    let greeting = Greeting::from_session(session);
    let view = loader.load().await?.clone();

    Ok(DashboardPage {
        greeting,
        view,
        sidebar_open: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Page;
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl FixtureSource for Unreachable {
        async fn fetch(&self) -> Result<Fixture, FixtureError> {
            Err(FixtureError::Timeout)
        }

        fn describe(&self) -> String {
            "unreachable".to_string()
        }
    }

    #[tokio::test]
    async fn test_signed_out_visitor_is_redirected() {
        let session = Session::new(MemoryStore::new());
        let mut loader = DashboardLoader::new(Unreachable, true, ChartOptions::default());

        match open(&session, &mut loader).await {
            Err(OpenError::Unauthenticated(redirect)) => assert_eq!(redirect.to, Page::Login),
            other => panic!("expected redirect, got {:?}", other),
        }
        assert_eq!(loader.state(), &LoadState::Loading);
    }

    #[tokio::test]
    async fn test_signed_in_user_sees_fallback() {
        let session = Session::new(MemoryStore::new());
        session.record_login("ada@example.com").unwrap();
        let mut loader = DashboardLoader::new(Unreachable, true, ChartOptions::default());

        let mut page = open(&session, &mut loader).await.unwrap();
        assert_eq!(page.greeting.as_ref().unwrap().name, "ada");
        assert_eq!(page.view.source, DataSource::Fallback);

        page.toggle_sidebar();
        assert!(page.sidebar_open);
    }
}
