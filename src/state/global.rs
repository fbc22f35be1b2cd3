//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::session::{self, UserInfo};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Signed-in user, mirrored from session storage
    pub user: RwSignal<Option<UserInfo>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree.
///
/// The user signal is seeded from session storage so a reload keeps the
/// signed-in profile visible without waiting for a fetch.
pub fn provide_global_state() {
    let state = GlobalState {
        user: create_rw_signal(session::current_user()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
