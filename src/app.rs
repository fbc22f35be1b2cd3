//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{Buttons, Cards, Dashboard, Login, Menus, Tables};
use crate::router::{paths, NavigationGuard};
use crate::session;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                // Session check on every navigation
                <NavigationGuard />

                <Routes>
                    // Login stands alone, outside the shell
                    <Route path=paths::LOGIN view=Login />

                    // Everything else renders inside the authenticated shell
                    <Route path=paths::ROOT view=Shell>
                        <Route path="" view=|| view! { <Redirect path=paths::DASHBOARD /> } />
                        <Route path="dashboard" view=Dashboard />
                        <Route path="ui-components/buttons" view=Buttons />
                        <Route path="ui-components/cards" view=Cards />
                        <Route path="ui-components/menus" view=Menus />
                        <Route path="ui-components/tables" view=Tables />
                    </Route>

                    // Unknown paths land on login
                    <Route path="/*any" view=|| view! { <Redirect path=paths::LOGIN /> } />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Authenticated layout: navigation header over the routed page body
#[component]
fn Shell() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // The guard redirects unauthenticated visitors; this check only decides
    // what to paint while that navigation is in flight.
    let authenticated = session::auth_token().is_some();

    // Refresh the signed-in profile once on mount
    create_effect(move |_| {
        if session::auth_token().is_none() {
            return;
        }

        let state = state.clone();
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(user) => {
                    session::store_user(&user);
                    state.user.set(Some(user));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to refresh profile: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="flex flex-col min-h-screen">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                {if authenticated {
                    view! { <Outlet /> }.into_view()
                } else {
                    view! {
                        <p class="text-gray-400">"Redirecting to login..."</p>
                    }.into_view()
                }}
            </main>

            <Footer />
        </div>
    }
}

/// Footer with session status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let year = chrono::Utc::now().format("%Y").to_string();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-gray-400">{format!("Quarterdeck Admin {}", year)}</div>

                // Session indicator
                <div class="flex items-center space-x-2">
                    {move || {
                        if state.user.get().is_some() {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>"Signed in"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-500 rounded-full" />
                                    <span>"Signed out"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Loading indicator
                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}
