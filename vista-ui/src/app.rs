//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use vista::nav::Page;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Landing, Login, Register};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Router>
            <div class=move || format!("min-h-screen flex flex-col theme-{}", state.theme.get())>
                <Nav />

                <main class="flex-1">
                    <Routes>
                        <Route path=Page::Landing.route() view=Landing />
                        <Route path=Page::Login.route() view=Login />
                        <Route path=Page::Register.route() view=Register />
                        <Route path=Page::Dashboard.route() view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <h4>"Vista"</h4>
                    <p>"Immersive VR and AR headsets for work and play."</p>
                </div>
                <div>
                    <h4>"Explore"</h4>
                    <A href=Page::Landing.route()>"Home"</A>
                    <A href=Page::Register.route()>"Create account"</A>
                    <A href=Page::Dashboard.route()>"Dashboard"</A>
                </div>
                <p class="copyright">"© Vista Reality"</p>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href=Page::Landing.route() class="btn btn-primary">
                "Back to Home"
            </A>
        </div>
    }
}
