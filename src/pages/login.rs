//! Login Page
//!
//! Credential form that opens a session: on success the token and profile
//! are persisted, the bearer header is installed and navigation moves on
//! to the dashboard.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::InlineLoading;
use crate::router::paths;
use crate::session;
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            state.show_error("Username and password are required");
            return;
        }

        set_submitting.set(true);

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(login) => {
                    session::store(&login.token, &login.user);
                    api::set_bearer_token(Some(&login.token));
                    state.user.set(Some(login.user));
                    state.show_success("Signed in");
                    navigate(paths::DASHBOARD, Default::default());
                }
                Err(api::Error::Unauthorized) => {
                    state.show_error("Invalid username or password");
                }
                Err(e) => {
                    state.show_error(&e.to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="w-full max-w-md">
                // Brand
                <div class="flex items-center justify-center space-x-3 mb-8">
                    <span class="text-4xl">"⚓"</span>
                    <span class="text-3xl font-bold">"Quarterdeck"</span>
                </div>

                <form on:submit=on_submit class="bg-gray-800 rounded-xl p-8 space-y-6">
                    <div>
                        <h1 class="text-2xl font-bold">"Sign in"</h1>
                        <p class="text-gray-400 mt-1 text-sm">"Use your administrator account"</p>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors
                               flex items-center justify-center space-x-2"
                    >
                        {move || {
                            if submitting.get() {
                                view! {
                                    <InlineLoading />
                                    <span>"Signing in..."</span>
                                }.into_view()
                            } else {
                                view! { <span>"Sign in"</span> }.into_view()
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
