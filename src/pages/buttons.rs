//! Buttons Page
//!
//! Showcase of the button styles used across the dashboard.

use leptos::*;

use crate::components::InlineLoading;

/// Button showcase page
#[component]
pub fn Buttons() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Buttons"</h1>
                <p class="text-gray-400 mt-1">"Button variants, sizes and states"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Variants"</h2>
                <div class="flex flex-wrap gap-3">
                    <button class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors">
                        "Primary"
                    </button>
                    <button class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors">
                        "Secondary"
                    </button>
                    <button class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors">
                        "Success"
                    </button>
                    <button class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-medium transition-colors">
                        "Danger"
                    </button>
                    <button class="px-4 py-2 border border-gray-600 hover:border-gray-500 text-gray-300 rounded-lg font-medium transition-colors">
                        "Outline"
                    </button>
                </div>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Sizes"</h2>
                <div class="flex flex-wrap items-center gap-3">
                    <button class="px-3 py-1.5 text-sm bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors">
                        "Small"
                    </button>
                    <button class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors">
                        "Default"
                    </button>
                    <button class="px-6 py-3 text-lg bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors">
                        "Large"
                    </button>
                </div>
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"States"</h2>
                <div class="flex flex-wrap items-center gap-3">
                    <button
                        disabled=true
                        class="px-4 py-2 bg-gray-700 text-gray-500 rounded-lg font-medium cursor-not-allowed"
                    >
                        "Disabled"
                    </button>
                    <button class="px-4 py-2 bg-primary-600 rounded-lg font-medium flex items-center space-x-2">
                        <InlineLoading />
                        <span>"Loading..."</span>
                    </button>
                </div>
            </section>
        </div>
    }
}
