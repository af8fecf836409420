//! Navigation Component
//!
//! Fixed header with brand, section anchors, auth links, mobile menu
//! toggle and the theme switch.

use leptos::*;
use leptos_router::*;
use vista::nav::Page;
use vista::page::navbar::{anchor_scroll_target, Navbar};
use vista::page::Theme;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navbar = create_rw_signal(Navbar::default());

    let handle = window_event_listener(ev::scroll, move |_| {
        let top = window().scroll_y().unwrap_or(0.0);
        navbar.update(|n| n.on_scroll(top));
    });
    on_cleanup(move || handle.remove());

    let location = use_location();
    let on_landing = move || location.pathname.get() == Page::Landing.route();

    view! {
        <nav class="navbar" class:scrolled=move || navbar.get().scrolled>
            <div class="container nav-inner">
                <A href=Page::Landing.route() class="brand">
                    <span class="brand-mark">"◎"</span>
                    <span class="brand-name">"Vista"</span>
                </A>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| navbar.update(|n| n.toggle_menu())
                >
                    "☰"
                </button>

                <div class="nav-links" class:active=move || navbar.get().menu_open>
                    {move || on_landing().then(|| view! {
                        <AnchorLink target="products" label="Products" />
                        <AnchorLink target="features" label="Features" />
                        <AnchorLink target="pricing" label="Pricing" />
                        <AnchorLink target="contact" label="Contact" />
                    })}

                    <NavLink href=Page::Dashboard.route() label="Dashboard" />
                    <NavLink href=Page::Login.route() label="Login" />
                    <A href=Page::Register.route() class="btn btn-primary">"Get Started"</A>

                    <button
                        class="theme-toggle"
                        aria-label="Toggle theme"
                        on:click=move |_| state.toggle_theme()
                    >
                        {move || match state.theme.get() {
                            Theme::Dark => "☀",
                            Theme::Light => "☾",
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="active">
            {label}
        </A>
    }
}

/// In-page link that scrolls smoothly to a section under the fixed navbar
#[component]
pub fn AnchorLink(target: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=format!("#{}", target)
            class="nav-link"
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section(target);
            }
        >
            {label}
        </a>
    }
}

/// Smooth-scroll so the section with `id` sits just below the navbar
pub fn scroll_to_section(id: &str) {
    let Some(element) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_target(element.offset_top() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
