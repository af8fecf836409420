//! Toast Notification Component
//!
//! Renders the alerts posted to [`GlobalState`].

use leptos::*;
use vista::notify::render_alert;

use crate::state::global::GlobalState;

/// Alert stack pinned to the top of the page
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="alert-stack">
            <For
                each=move || state.notices.get()
                key=|active| (active.id, active.fading)
                children=move |active| {
                    view! {
                        <div
                            class="alert-slot"
                            class:fade-out=active.fading
                            inner_html=render_alert(&active.notice)
                        />
                    }
                }
            />
        </div>
    }
}
