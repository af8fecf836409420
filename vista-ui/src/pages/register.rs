//! Registration Page

use leptos::*;
use leptos_router::*;
use vista::auth::{Credentials, RegistrationForm};
use vista::nav::Page;

use super::auth::submit_credentials;
use crate::components::StrengthMeter;
use crate::state::global::GlobalState;

#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = RegistrationForm::new(name.get(), email.get(), password.get(), confirm.get());
        submit_credentials(state, Credentials::Register(form), busy, navigate.clone());
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-subtitle">"Join Vista and step into your dashboard"</p>

                <form id="register-form" on:submit=on_submit>
                    <TextField id="name" label="Full Name" kind="text" value=name />
                    <TextField id="email" label="Email" kind="email" value=email />
                    <TextField id="password" label="Password" kind="password" value=password />
                    <StrengthMeter password=password />
                    <TextField id="confirm-password" label="Confirm Password" kind="password" value=confirm />

                    <button type="submit" class="btn btn-primary btn-block" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <A href=Page::Login.route()>"Login"</A>
                </p>
            </div>
        </section>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=kind
                id=id
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
