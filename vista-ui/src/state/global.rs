//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use vista::notify::{Notice, Notifier, DISMISS_AFTER, FADE_OUT};
use vista::page::Theme;
use vista::store::Session;

use crate::storage::LocalStore;

/// An alert currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveNotice {
    pub id: u64,
    pub notice: Notice,
    /// Set once the dismissal timer fires; removal follows the fade
    pub fading: bool,
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Alerts, oldest first
    pub notices: RwSignal<Vec<ActiveNotice>>,
    /// Applied theme
    pub theme: RwSignal<Theme>,
    next_id: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        notices: create_rw_signal(Vec::new()),
        theme: create_rw_signal(Theme::load(&LocalStore)),
        next_id: store_value(0),
    };

    provide_context(state);
}

impl GlobalState {
    /// Session over browser local storage
    pub fn session(&self) -> Session<LocalStore> {
        Session::new(LocalStore)
    }

    /// Show an alert; it fades after three seconds and is then removed
    pub fn show(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.notices.update(|list| {
            list.push(ActiveNotice {
                id,
                notice,
                fading: false,
            })
        });

        let notices = self.notices;
        gloo_timers::callback::Timeout::new(DISMISS_AFTER.as_millis() as u32, move || {
            notices.update(|list| {
                if let Some(active) = list.iter_mut().find(|a| a.id == id) {
                    active.fading = true;
                }
            });

            gloo_timers::callback::Timeout::new(FADE_OUT.as_millis() as u32, move || {
                notices.update(|list| list.retain(|a| a.id != id));
            })
            .forget();
        })
        .forget();
    }

    pub fn show_success(&self, message: &str) {
        self.show(Notice::success(message));
    }

    pub fn show_error(&self, message: &str) {
        self.show(Notice::error(message));
    }

    /// Flip and persist the theme
    pub fn toggle_theme(&self) {
        match Theme::toggle(&LocalStore) {
            Ok(theme) => self.theme.set(theme),
            Err(e) => {
                web_sys::console::warn_1(&format!("Theme not saved: {}", e).into());
                self.theme.update(|t| *t = t.toggled());
            }
        }
    }
}

impl Notifier for GlobalState {
    fn notify(&self, notice: Notice) {
        self.show(notice);
    }
}
