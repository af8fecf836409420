//! # Vista
//!
//! Client-side interactivity for a VR/AR product marketing site: simulated
//! sign-in and registration, a dashboard with animated counters and charts,
//! and the small behaviours of the landing pages.
//!
//! ## Features
//!
//! - **Credential capture**: form validation, password strength scoring, and
//!   a session store standing in for browser local storage
//! - **Dashboard**: fixture load with a built-in fallback dataset, counters,
//!   bar and line charts, activity table
//! - **Page behaviours**: navbar, slider, tabs, accordion, filters, pricing,
//!   theme, generic form validation
//! - **Dev server and CLI** (feature `runtime`): Axum server over the static
//!   site and a JSON API, plus a command-line client
//!
//! ## Modules
//!
//! - [`strength`]: Password strength heuristic
//! - [`store`]: Session store and typed session accessors
//! - [`auth`]: Login and registration flows
//! - [`dashboard`]: Dashboard load, fallback and view model
//! - [`chart`]: Bar and line chart layout
//! - [`counter`]: Counter animation
//! - [`page`]: Landing page interactions
//! - [`api`]: Dev server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vista::auth::{AuthPolicy, CredentialFlow, Credentials, LoginForm};
//! use vista::dashboard::FileFixtureSource;
//! use vista::notify::NoticeBoard;
//! use vista::store::{MemoryStore, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::new(MemoryStore::new());
//!     let probe = FileFixtureSource::new("data/mock-data.json");
//!     let notices = NoticeBoard::new();
//!
//!     let flow = CredentialFlow::new(&session, &probe, &notices, AuthPolicy::default());
//!     let redirect = flow
//!         .submit(&Credentials::Login(LoginForm::new("ada@example.com", "secret")))
//!         .await?;
//!
//!     println!("Go to {} in {:?}", redirect.to.path(), redirect.delay);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod chart;
pub mod counter;
pub mod dashboard;
pub mod format;
pub mod nav;
pub mod notify;
pub mod page;
pub mod store;
pub mod strength;

#[cfg(feature = "runtime")]
pub mod api;
#[cfg(feature = "runtime")]
pub mod config;
#[cfg(feature = "runtime")]
pub mod logging;

// Re-export top-level types for convenience
pub use auth::{AuthError, AuthPolicy, Credentials, LoginForm, RegistrationForm};

pub use chart::{BarChart, ChartContainer, ChartKind, LineChart};

pub use counter::CounterPlan;

pub use dashboard::{
    DashboardLoader, DashboardPage, DashboardView, DataSource, Fixture, FixtureError,
    FixtureSource, LoadState, OpenError,
};

pub use nav::{Page, Redirect};

pub use notify::{Notice, NoticeBoard, NoticeKind, Notifier};

pub use page::{FormErrors, Theme};

pub use store::{FileStore, MemoryStore, Profile, Session, SessionStore, StoreError, StoreResult};

pub use strength::{Strength, StrengthLabel};

#[cfg(feature = "runtime")]
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

#[cfg(feature = "runtime")]
pub use auth::CredentialFlow;

#[cfg(feature = "runtime")]
pub use config::{Config, ConfigError, LoggingConfig};

#[cfg(feature = "runtime")]
pub use counter::{Animator, CounterDisplay};
