//! Login Page

use leptos::*;
use leptos_router::*;
use vista::auth::{Credentials, LoginForm};
use vista::nav::Page;

use super::auth::submit_credentials;
use crate::state::global::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm::new(email.get(), password.get());
        submit_credentials(state, Credentials::Login(form), busy, navigate.clone());
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-subtitle">"Sign in to your Vista account"</p>

                <form id="login-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <A href=Page::Register.route()>"Sign up"</A>
                </p>
            </div>
        </section>
    }
}
