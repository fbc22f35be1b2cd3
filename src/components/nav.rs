//! Navigation Component
//!
//! Header navigation bar with brand, page links and session controls.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::router::paths;
use crate::session;
use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let state_for_logout = state.clone();
    let log_out = move |_| {
        session::clear();
        api::set_bearer_token(None);
        state_for_logout.user.set(None);
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=paths::DASHBOARD class="flex items-center space-x-3">
                        <span class="text-2xl">"⚓"</span>
                        <span class="text-xl font-bold text-white">"Quarterdeck"</span>
                    </A>

                    // Navigation links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink href=paths::DASHBOARD label="Dashboard" />
                        <NavLink href=paths::UI_BUTTONS label="Buttons" />
                        <NavLink href=paths::UI_CARDS label="Cards" />
                        <NavLink href=paths::UI_MENUS label="Menus" />
                        <NavLink href=paths::UI_TABLES label="Tables" />
                    </div>

                    // Session controls
                    <div class="flex items-center space-x-3">
                        <span class="text-sm text-gray-400">
                            {move || {
                                state.user.get()
                                    .map(|u| u.display_name)
                                    .unwrap_or_default()
                            }}
                        </span>
                        <button
                            on:click=log_out
                            class="px-3 py-2 rounded-lg text-sm text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Log out"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
