//! Vista Site
//!
//! Landing page, demo sign-in and analytics dashboard for the Vista VR/AR
//! product line, built with Leptos (WASM).
//!
//! # Features
//!
//! - Product filter, testimonial slider, tabs, FAQ accordion, pricing toggle
//! - Simulated login and registration with a password strength meter
//! - Dashboard with animated counters, bar and line charts, recent activity
//! - Light/dark theme persisted in local storage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Behaviour lives in the `vista` crate; this crate binds it to
//! the DOM, local storage and `fetch`.

use leptos::*;

mod app;
mod components;
mod fixture;
mod pages;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
