//! Loading Component
//!
//! Skeletons shown while the dashboard is in its loading state.

use leptos::*;

/// Skeleton loader for a stat card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="stat-card skeleton">
            <div class="skeleton-line short" />
            <div class="skeleton-line tall" />
        </div>
    }
}

/// Skeleton loader for chart
#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="chart-card skeleton">
            <div class="skeleton-line short" />
            <div class="skeleton-block" />
        </div>
    }
}
