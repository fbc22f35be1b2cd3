//! Browser tests for the session store, bearer header wiring and the
//! API base override.
//!
//! Run with `wasm-pack test --headless --chrome` or
//! `cargo test --target wasm32-unknown-unknown`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use quarterdeck::api;
use quarterdeck::session::{self, UserInfo};

wasm_bindgen_test_configure!(run_in_browser);

fn sample_user() -> UserInfo {
    UserInfo {
        username: "mwaters".to_string(),
        display_name: "Morgan Waters".to_string(),
        email: "morgan@example.com".to_string(),
        role: "admin".to_string(),
    }
}

#[wasm_bindgen_test]
fn session_round_trips_through_storage() {
    session::clear();
    session::store("tok-123", &sample_user());

    assert_eq!(session::auth_token().as_deref(), Some("tok-123"));

    let user = session::current_user().expect("stored user should parse");
    assert_eq!(user.username, "mwaters");
    assert_eq!(user.role, "admin");

    session::clear();
    assert!(session::auth_token().is_none());
    assert!(session::current_user().is_none());
}

#[wasm_bindgen_test]
fn clear_removes_both_storage_keys() {
    session::store("tok-456", &sample_user());
    session::clear();

    let storage = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    assert!(storage.get_item("auth_token").unwrap().is_none());
    assert!(storage.get_item("user_info").unwrap().is_none());
}

#[wasm_bindgen_test]
fn garbage_profile_blob_reads_as_no_user() {
    let storage = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    storage.set_item("user_info", "{{{ not json").unwrap();

    assert!(session::current_user().is_none());

    session::clear();
}

#[wasm_bindgen_test]
fn bearer_header_follows_the_session() {
    session::store("tok-789", &sample_user());
    api::set_bearer_token(session::auth_token().as_deref());
    assert_eq!(api::authorization_header().as_deref(), Some("Bearer tok-789"));

    session::clear();
    api::set_bearer_token(session::auth_token().as_deref());
    assert_eq!(api::authorization_header(), None);
}

#[wasm_bindgen_test]
fn api_base_follows_the_stored_override() {
    assert_eq!(api::get_api_base(), api::DEFAULT_API_BASE);

    // Trailing slashes on the stored value are normalized away on read
    api::set_api_base("http://staging.example.com/api/v2/");
    assert_eq!(api::get_api_base(), "http://staging.example.com/api/v2");

    let storage = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap();
    storage.remove_item("quarterdeck_api_url").unwrap();
    assert_eq!(api::get_api_base(), api::DEFAULT_API_BASE);
}
