//! Session Store
//!
//! Browser-local persistence for the signed-in session.
//!
//! A session is two localStorage keys: the bearer token under [`TOKEN_KEY`]
//! and the serialized user profile under [`USER_KEY`]. They are written
//! together on login and removed together on logout or session expiry.

use serde::{Deserialize, Serialize};

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "auth_token";

/// Storage key holding the serialized [`UserInfo`] blob
pub const USER_KEY: &str = "user_info";

/// Profile of the signed-in user.
///
/// Every field is optional in the stored blob; missing fields read back as
/// empty strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the session token, if one is stored
pub fn auth_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Read and parse the stored user profile
pub fn current_user() -> Option<UserInfo> {
    let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
    parse_user(&raw)
}

/// Persist a full session after a successful login
pub fn store(token: &str, user: &UserInfo) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(blob) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &blob);
        }
    }
}

/// Refresh the stored user profile without touching the token
pub fn store_user(user: &UserInfo) {
    if let Some(storage) = local_storage() {
        if let Ok(blob) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &blob);
        }
    }
}

/// Remove both session keys
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// Parse a stored profile blob; anything malformed reads as no profile
fn parse_user(raw: &str) -> Option<UserInfo> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_blob_round_trips() {
        let user = UserInfo {
            username: "mwaters".to_string(),
            display_name: "Morgan Waters".to_string(),
            email: "morgan@example.com".to_string(),
            role: "admin".to_string(),
        };

        let blob = serde_json::to_string(&user).unwrap();
        assert_eq!(parse_user(&blob), Some(user));
    }

    #[test]
    fn missing_profile_fields_default_to_empty() {
        let user = parse_user(r#"{"username":"mwaters"}"#).unwrap();
        assert_eq!(user.username, "mwaters");
        assert!(user.display_name.is_empty());
        assert!(user.role.is_empty());

        let user = parse_user(r#"{"display_name":"Morgan Waters"}"#).unwrap();
        assert!(user.username.is_empty());
        assert_eq!(user.display_name, "Morgan Waters");
    }

    #[test]
    fn malformed_blob_reads_as_none() {
        assert_eq!(parse_user("not json"), None);
        assert_eq!(parse_user(""), None);
        assert_eq!(parse_user("42"), None);
    }
}
