//! Quarterdeck Admin
//!
//! Application entry point: installs the panic hook, restores any session
//! that survived a reload and mounts the root component.

use leptos::*;

use quarterdeck::api;
use quarterdeck::app::App;
use quarterdeck::session;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Reinstall the bearer header for a session that survived a reload
    if let Some(token) = session::auth_token() {
        api::set_bearer_token(Some(&token));
    }

    // Mount the app to the document body
    mount_to_body(|| view! { <App /> });
}
