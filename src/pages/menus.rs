//! Menus Page
//!
//! Showcase of dropdown and list menus.

use leptos::*;

const DROPDOWN_ACTIONS: [&str; 4] = ["Edit", "Duplicate", "Archive", "Delete"];

/// Menu showcase page
#[component]
pub fn Menus() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Menus"</h1>
                <p class="text-gray-400 mt-1">"Dropdown and list menus"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Dropdown"</h2>
                <Dropdown />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"List menu"</h2>
                <div class="max-w-xs bg-gray-700 rounded-lg overflow-hidden divide-y divide-gray-600">
                    <MenuItem label="Profile" hint="Account details" />
                    <MenuItem label="Notifications" hint="Email and in-app alerts" />
                    <MenuItem label="Billing" hint="Plans and invoices" />
                    <MenuItem label="Team" hint="Members and roles" />
                </div>
            </section>
        </div>
    }
}

/// Click-to-open dropdown with an action list
#[component]
fn Dropdown() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (last_action, set_last_action) = create_signal(None::<&'static str>);

    view! {
        <div class="relative inline-block">
            <button
                on:click=move |_| set_open.update(|o| *o = !*o)
                class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors flex items-center space-x-2"
            >
                <span>"Actions"</span>
                <span class="text-xs">{move || if open.get() { "▲" } else { "▼" }}</span>
            </button>

            {move || {
                if open.get() {
                    view! {
                        <div class="absolute left-0 mt-2 w-44 bg-gray-700 rounded-lg shadow-lg overflow-hidden z-10">
                            {DROPDOWN_ACTIONS.into_iter().map(|action| view! {
                                <button
                                    on:click=move |_| {
                                        set_last_action.set(Some(action));
                                        set_open.set(false);
                                    }
                                    class="block w-full text-left px-4 py-2 text-sm text-gray-300 hover:bg-gray-600 hover:text-white transition-colors"
                                >
                                    {action}
                                </button>
                            }).collect_view()}
                        </div>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <div class="mt-3 text-sm text-gray-400">
                {move || {
                    last_action.get()
                        .map(|action| format!("Last action: {}", action))
                        .unwrap_or_else(|| "No action selected".to_string())
                }}
            </div>
        </div>
    }
}

#[component]
fn MenuItem(
    label: &'static str,
    hint: &'static str,
) -> impl IntoView {
    view! {
        <button class="block w-full text-left px-4 py-3 hover:bg-gray-600 transition-colors">
            <div class="font-medium text-sm">{label}</div>
            <div class="text-xs text-gray-400 mt-0.5">{hint}</div>
        </button>
    }
}
