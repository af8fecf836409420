//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod stat_counter;
pub mod strength_meter;
pub mod toast;

pub use chart::ChartPanel;
pub use loading::{CardSkeleton, ChartSkeleton};
pub use nav::Nav;
pub use stat_counter::StatCounter;
pub use strength_meter::StrengthMeter;
pub use toast::Toast;
