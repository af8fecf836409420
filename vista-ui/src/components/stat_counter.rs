//! Stat Counter Component
//!
//! Animates a dashboard stat from 0 to its target on a browser interval.

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use vista::counter::CounterPlan;
use vista::dashboard::StatCard;

/// Running interval tagged with the run that owns it
type Timer = Option<(u64, Interval)>;

/// Stat card whose value counts up whenever `card` changes
#[component]
pub fn StatCounter(#[prop(into)] card: Signal<StatCard>) -> impl IntoView {
    let (text, set_text) = create_signal("0".to_string());
    let timer: StoredValue<Timer> = store_value(None);
    let runs = store_value(0u64);

    create_effect(move |_| {
        let plan = card.with(|c| c.plan());
        let run = runs.get_value() + 1;
        runs.set_value(run);
        start(plan, run, set_text, timer);
    });

    on_cleanup(move || timer.set_value(None));

    let key = move || card.with(|c| c.key);
    let label = move || card.with(|c| c.label);

    view! {
        <div class="stat-card">
            <span class=move || format!("stat-value {}", key())>{text}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

fn start(plan: CounterPlan, run: u64, set_text: WriteSignal<String>, timer: StoredValue<Timer>) {
    // Dropping the previous interval cancels it
    timer.set_value(None);

    if plan.is_instant() {
        set_text.set(plan.final_frame());
        return;
    }

    set_text.set(plan.frame(0));

    let mut step = 0;
    let interval = Interval::new(plan.tick().as_millis() as u32, move || {
        if step >= plan.steps() {
            return;
        }
        step += 1;
        set_text.set(plan.frame(step));

        if step == plan.steps() {
            // An interval cannot be dropped from inside its own callback
            Timeout::new(0, move || {
                timer.update_value(|t| {
                    if matches!(t, Some((owner, _)) if *owner == run) {
                        *t = None;
                    }
                });
            })
            .forget();
        }
    });

    timer.set_value(Some((run, interval)));
}
