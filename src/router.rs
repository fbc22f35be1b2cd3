//! Route Table & Navigation Guard
//!
//! Central route definitions plus the session check that runs on every
//! navigation before it settles.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::session;

/// Route path constants used across the app
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const ROOT: &str = "/";
    pub const DASHBOARD: &str = "/dashboard";
    pub const UI_BUTTONS: &str = "/ui-components/buttons";
    pub const UI_CARDS: &str = "/ui-components/cards";
    pub const UI_MENUS: &str = "/ui-components/menus";
    pub const UI_TABLES: &str = "/ui-components/tables";
}

/// Entries of the route table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Root,
    Dashboard,
    UiButtons,
    UiCards,
    UiMenus,
    UiTables,
}

impl Route {
    /// All routes, in navigation order
    pub const ALL: [Route; 7] = [
        Route::Login,
        Route::Root,
        Route::Dashboard,
        Route::UiButtons,
        Route::UiCards,
        Route::UiMenus,
        Route::UiTables,
    ];

    /// Canonical path for this route
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => paths::LOGIN,
            Route::Root => paths::ROOT,
            Route::Dashboard => paths::DASHBOARD,
            Route::UiButtons => paths::UI_BUTTONS,
            Route::UiCards => paths::UI_CARDS,
            Route::UiMenus => paths::UI_MENUS,
            Route::UiTables => paths::UI_TABLES,
        }
    }

    /// Whether the route sits behind the session check
    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Resolve a location pathname against the route table.
    ///
    /// Trailing slashes are insignificant. Unknown paths resolve to `None`
    /// and are picked up by the catch-all redirect.
    pub fn match_path(path: &str) -> Option<Route> {
        let normalized = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

/// Outcome of the navigation guard for a single navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Let the navigation settle
    Allow,
    /// Send the visitor somewhere else instead
    Redirect(&'static str),
}

/// Decide whether a navigation may settle on `path`.
///
/// Guarded routes bounce signed-out visitors to the login page and the
/// login page bounces signed-in visitors to the dashboard. Unknown paths
/// fall back to login, so a signed-in visitor on one lands on the
/// dashboard directly.
pub fn decide(path: &str, authenticated: bool) -> Decision {
    match Route::match_path(path) {
        Some(route) => {
            if route.requires_auth() && !authenticated {
                Decision::Redirect(paths::LOGIN)
            } else if route == Route::Login && authenticated {
                Decision::Redirect(paths::DASHBOARD)
            } else {
                Decision::Allow
            }
        }
        None => {
            if authenticated {
                Decision::Redirect(paths::DASHBOARD)
            } else {
                Decision::Redirect(paths::LOGIN)
            }
        }
    }
}

/// Session check that runs before every route transition settles.
///
/// Re-synchronizes the API client's default bearer header with session
/// storage, then applies [`decide`] to the target path and performs any
/// redirect it asks for.
#[component]
pub fn NavigationGuard() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    create_effect(move |_| {
        let path = location.pathname.get();

        let token = session::auth_token();
        api::set_bearer_token(token.as_deref());

        if let Decision::Redirect(target) = decide(&path, token.is_some()) {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_unique_and_rooted() {
        let mut seen = std::collections::HashSet::new();
        for route in Route::ALL {
            assert!(route.path().starts_with('/'), "{:?}", route);
            assert!(seen.insert(route.path()), "duplicate path {:?}", route);
        }
    }

    #[test]
    fn match_path_resolves_the_route_table() {
        assert_eq!(Route::match_path("/login"), Some(Route::Login));
        assert_eq!(Route::match_path("/"), Some(Route::Root));
        assert_eq!(Route::match_path("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::match_path("/ui-components/buttons"), Some(Route::UiButtons));
        assert_eq!(Route::match_path("/ui-components/tables"), Some(Route::UiTables));
        assert_eq!(Route::match_path("/nope"), None);
        assert_eq!(Route::match_path("/ui-components"), None);
    }

    #[test]
    fn trailing_slashes_are_insignificant() {
        assert_eq!(Route::match_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::match_path("/ui-components/menus/"), Some(Route::UiMenus));
        assert_eq!(Route::match_path("/"), Some(Route::Root));
    }

    #[test]
    fn guarded_routes_bounce_signed_out_visitors() {
        assert_eq!(decide(paths::DASHBOARD, false), Decision::Redirect(paths::LOGIN));
        assert_eq!(decide(paths::ROOT, false), Decision::Redirect(paths::LOGIN));
        assert_eq!(decide(paths::UI_BUTTONS, false), Decision::Redirect(paths::LOGIN));
        assert_eq!(decide(paths::UI_TABLES, false), Decision::Redirect(paths::LOGIN));
    }

    #[test]
    fn guarded_routes_allow_signed_in_visitors() {
        assert_eq!(decide(paths::DASHBOARD, true), Decision::Allow);
        assert_eq!(decide(paths::ROOT, true), Decision::Allow);
        assert_eq!(decide(paths::UI_MENUS, true), Decision::Allow);
    }

    #[test]
    fn login_is_open_when_signed_out() {
        assert_eq!(decide(paths::LOGIN, false), Decision::Allow);
    }

    #[test]
    fn login_bounces_signed_in_visitors_to_dashboard() {
        assert_eq!(decide(paths::LOGIN, true), Decision::Redirect(paths::DASHBOARD));
    }

    #[test]
    fn unknown_paths_redirect_to_login() {
        assert_eq!(decide("/does-not-exist", false), Decision::Redirect(paths::LOGIN));
        assert_eq!(decide("/a/b/c", false), Decision::Redirect(paths::LOGIN));
    }

    #[test]
    fn unknown_paths_land_signed_in_visitors_on_dashboard() {
        assert_eq!(decide("/does-not-exist", true), Decision::Redirect(paths::DASHBOARD));
    }

    #[test]
    fn only_login_is_outside_the_session_check() {
        for route in Route::ALL {
            assert_eq!(route.requires_auth(), route != Route::Login);
        }
    }
}
