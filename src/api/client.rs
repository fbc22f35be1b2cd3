//! HTTP API Client
//!
//! Functions for communicating with the Quarterdeck REST API. All requests
//! go out with the shared default bearer header when one is installed, and
//! all responses pass through the unauthorized-session check.

use gloo_net::http::{Request, RequestBuilder, Response};
use std::cell::RefCell;

use crate::router::paths;
use crate::session::{self, UserInfo};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8090/api/v1";

/// HTTP status treated as an expired session
const UNAUTHORIZED: u16 = 401;

thread_local! {
    // Default Authorization value shared by every outgoing request.
    // Single-threaded in the browser, so a thread local is all it takes.
    static BEARER_TOKEN: RefCell<Option<String>> = RefCell::new(None);
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("quarterdeck_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("quarterdeck_api_url", url);
        }
    }
}

/// Install or remove the default bearer token for outgoing requests
pub fn set_bearer_token(token: Option<&str>) {
    BEARER_TOKEN.with(|slot| {
        *slot.borrow_mut() = token.map(|t| t.to_string());
    });
}

/// Current default Authorization header value, if a token is installed
pub fn authorization_header() -> Option<String> {
    BEARER_TOKEN.with(|slot| {
        slot.borrow().as_ref().map(|token| format!("Bearer {}", token))
    })
}

fn is_session_expired(status: u16) -> bool {
    status == UNAUTHORIZED
}

/// Attach the default Authorization header, when one is installed
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match authorization_header() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Whether an expired session at `current_path` still needs to be sent to
/// the login page
fn needs_login_redirect(current_path: &str) -> bool {
    current_path != paths::LOGIN
}

/// Invalidate the stored session and force navigation back to login.
///
/// Navigation goes through `window.location` because this runs outside any
/// component context. Already being on the login page is left alone.
fn expire_session() {
    session::clear();
    set_bearer_token(None);

    web_sys::console::warn_1(&"Session expired, redirecting to login".into());

    if let Some(window) = web_sys::window() {
        let location = window.location();
        let redirect = location
            .pathname()
            .map(|path| needs_login_redirect(&path))
            .unwrap_or(true);
        if redirect {
            let _ = location.set_href(paths::LOGIN);
        }
    }
}

/// Send a request and apply the shared response handling.
///
/// A 401 response expires the session and surfaces as
/// [`Error::Unauthorized`]; every other error status maps to [`Error::Api`]
/// and is otherwise left to the caller.
async fn execute(request: Request) -> Result<Response, Error> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if is_session_expired(response.status()) {
        expire_session();
        return Err(Error::Unauthorized);
    }

    if !response.ok() {
        let status = response.status();
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(Error::Api {
            status,
            message: error.error,
        });
    }

    Ok(response)
}

// ============ Error & Response Types ============

/// Errors returned by API calls
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request build error: {0}")]
    Build(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Decode(String),

    /// The session was rejected and has been invalidated
    #[error("Unauthorized")]
    Unauthorized,

    /// Any non-401 error status, passed through unchanged
    #[error("{message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct DashboardSummary {
    pub revenue_mtd: f64,
    pub active_users: u64,
    pub open_orders: u64,
    pub support_tickets: u64,
}

// ============ API Functions ============

/// Authenticate and obtain a session token
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, Error> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    let api_base = get_api_base();

    let request = authorize(Request::post(&format!("{}/auth/login", api_base)))
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| Error::Build(e.to_string()))?;

    let response = execute(request).await?;

    response
        .json()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

/// Fetch the signed-in user's profile
pub async fn fetch_profile() -> Result<UserInfo, Error> {
    let api_base = get_api_base();

    let request = authorize(Request::get(&format!("{}/auth/profile", api_base)))
        .build()
        .map_err(|e| Error::Build(e.to_string()))?;

    let response = execute(request).await?;

    response
        .json()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

/// Fetch the dashboard summary figures
pub async fn fetch_summary() -> Result<DashboardSummary, Error> {
    let api_base = get_api_base();

    let request = authorize(Request::get(&format!("{}/dashboard/summary", api_base)))
        .build()
        .map_err(|e| Error::Build(e.to_string()))?;

    let response = execute(request).await?;

    response
        .json()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_matches_installed_token() {
        set_bearer_token(Some("tok-abc"));
        assert_eq!(authorization_header().as_deref(), Some("Bearer tok-abc"));
    }

    #[test]
    fn bearer_header_absent_without_token() {
        set_bearer_token(None);
        assert_eq!(authorization_header(), None);
    }

    #[test]
    fn reinstalling_replaces_the_previous_token() {
        set_bearer_token(Some("first"));
        set_bearer_token(Some("second"));
        assert_eq!(authorization_header().as_deref(), Some("Bearer second"));
    }

    #[test]
    fn only_unauthorized_status_expires_the_session() {
        assert!(is_session_expired(401));

        assert!(!is_session_expired(200));
        assert!(!is_session_expired(204));
        assert!(!is_session_expired(400));
        assert!(!is_session_expired(403));
        assert!(!is_session_expired(404));
        assert!(!is_session_expired(500));
    }

    #[test]
    fn expired_sessions_redirect_unless_already_on_login() {
        assert!(needs_login_redirect("/dashboard"));
        assert!(needs_login_redirect("/ui-components/buttons"));
        assert!(needs_login_redirect("/does-not-exist"));

        assert!(!needs_login_redirect("/login"));
    }
}
