//! Dashboard Page
//!
//! Signed-in view: greeting, animated stats, charts and recent activity.
//! Data comes from one fixture fetch; any failure renders the built-in
//! dataset instead.

use leptos::*;
use leptos_router::*;
use vista::dashboard::{settle, ChartOptions, DashboardView, Greeting, LoadState};
use vista::nav::{self, guard_dashboard, Page};

use crate::components::{CardSkeleton, ChartPanel, ChartSkeleton, StatCounter};
use crate::fixture;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let session = state.session();
    if guard_dashboard(&session).is_err() {
        return view! { <Redirect path=Page::Login.route() /> }.into_view();
    }

    let greeting = Greeting::from_session(&session);
    let load_state = create_rw_signal(LoadState::Loading);
    let sidebar_open = create_rw_signal(false);
    let range = create_rw_signal("7d".to_string());

    let load = move || {
        load_state.set(LoadState::Loading);
        spawn_local(async move {
            let outcome = fixture::fetch_fixture().await;
            match settle(outcome, true, &ChartOptions::default()) {
                Ok(rendered) => load_state.set(LoadState::Rendered(rendered)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Dashboard load failed: {}", e).into());
                }
            }
        });
    };
    load();

    let navigate = use_navigate();
    let on_logout = move |_| {
        let confirmed = window()
            .confirm_with_message(nav::LOGOUT_PROMPT)
            .unwrap_or(false);
        match nav::confirm_logout(&state.session(), confirmed) {
            Ok(Some(redirect)) => navigate(redirect.to.route(), Default::default()),
            Ok(None) => {}
            Err(e) => state.show_error(&e.to_string()),
        }
    };

    view! {
        <div class="dashboard" class:sidebar-open=move || sidebar_open.get()>
            <aside class="sidebar">
                <div class="user-info">
                    {greeting.map(|g| view! {
                        <span id="user-name" class="user-name">{g.name}</span>
                        <span id="user-email" class="user-email">{g.email}</span>
                    })}
                </div>
                <nav class="sidebar-nav">
                    <a href="#overview" class="active">"Overview"</a>
                    <a href="#analytics">"Analytics"</a>
                    <a href="#activity">"Activity"</a>
                </nav>
                <button class="btn btn-secondary logout-btn" on:click=on_logout>
                    "Logout"
                </button>
            </aside>

            <div class="dashboard-main">
                <header class="dashboard-header">
                    <button
                        class="sidebar-toggle"
                        aria-label="Toggle sidebar"
                        on:click=move |_| sidebar_open.update(|o| *o = !*o)
                    >
                        "☰"
                    </button>
                    <h1>"Dashboard"</h1>
                    <select
                        class="date-filter"
                        on:change=move |ev| {
                            range.set(event_target_value(&ev));
                            load();
                        }
                    >
                        <option value="7d" selected=move || range.get() == "7d">"Last 7 days"</option>
                        <option value="30d" selected=move || range.get() == "30d">"Last 30 days"</option>
                        <option value="90d" selected=move || range.get() == "90d">"Last 90 days"</option>
                    </select>
                </header>

                {move || match load_state.get() {
                    LoadState::Loading => view! { <LoadingSections /> }.into_view(),
                    LoadState::Rendered(rendered) => view! { <Sections rendered=rendered /> }.into_view(),
                }}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn LoadingSections() -> impl IntoView {
    view! {
        <section id="overview" class="stats-grid">
            <CardSkeleton />
            <CardSkeleton />
            <CardSkeleton />
            <CardSkeleton />
        </section>
        <section id="analytics" class="charts-grid">
            <ChartSkeleton />
            <ChartSkeleton />
        </section>
    }
}

#[component]
fn Sections(rendered: DashboardView) -> impl IntoView {
    let DashboardView {
        stats,
        activity,
        charts,
        ..
    } = rendered;

    view! {
        <section id="overview" class="stats-grid">
            {stats
                .into_iter()
                .map(|card| view! { <StatCounter card=card /> })
                .collect_view()}
        </section>

        <section id="analytics" class="charts-grid">
            {charts
                .into_iter()
                .map(|container| view! { <ChartPanel container=container /> })
                .collect_view()}
        </section>

        {activity.map(|table| view! {
            <section id="activity" class="activity">
                <h2>"Recent Activity"</h2>
                <table
                    class="activity-table"
                    inner_html=format!(
                        "<thead><tr><th>Date</th><th>User</th><th>Action</th><th>Status</th></tr></thead>{}",
                        table.to_html()
                    )
                />
            </section>
        })}
    }
}
