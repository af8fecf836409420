//! Shared submit path for the login and registration forms

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::NavigateOptions;
use vista::auth::{complete, AuthPolicy, Credentials};
use vista::notify::Notifier;

use crate::fixture;
use crate::state::global::GlobalState;

/// Validate, probe the fixture, record the session, then follow the
/// redirect after its delay. `busy` is held for the duration of the probe.
pub fn submit_credentials<N>(
    state: GlobalState,
    credentials: Credentials,
    busy: RwSignal<bool>,
    navigate: N,
) where
    N: Fn(&str, NavigateOptions) + 'static,
{
    if let Err(e) = credentials.validate() {
        state.notify(e.notice());
        return;
    }

    busy.set(true);
    spawn_local(async move {
        let policy = AuthPolicy::default();

        let probe = fixture::probe().await;
        if probe.is_ok() {
            TimeoutFuture::new(policy.latency.as_millis() as u32).await;
        }

        let session = state.session();
        match complete(&credentials, probe, &policy, &session, chrono::Utc::now()) {
            Ok(done) => {
                state.notify(done.notice);
                let target = done.redirect.to.route();
                Timeout::new(done.redirect.delay.as_millis() as u32, move || {
                    navigate(target, NavigateOptions::default());
                })
                .forget();
            }
            Err(e) => state.notify(e.notice()),
        }

        busy.set(false);
    });
}
