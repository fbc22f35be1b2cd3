//! Cards Page
//!
//! Showcase of the card layouts used across the dashboard.

use leptos::*;

/// Card showcase page
#[component]
pub fn Cards() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Cards"</h1>
                <p class="text-gray-400 mt-1">"Card layouts for grouping content"</p>
            </div>

            <section>
                <h2 class="text-lg font-semibold mb-4">"Basic"</h2>
                <div class="grid md:grid-cols-3 gap-4">
                    <ShowcaseCard
                        title="Plain card"
                        body="Content grouped under a short heading. The default surface for most dashboard sections."
                    />
                    <ShowcaseCard
                        title="Bordered card"
                        body="Same surface with a visible border, used where cards sit on the page background."
                        bordered=true
                    />
                    <div class="bg-gray-800 rounded-lg overflow-hidden">
                        <div class="h-32 bg-gradient-to-r from-primary-600 to-primary-400" />
                        <div class="p-4">
                            <h3 class="font-medium">"Media card"</h3>
                            <p class="text-sm text-gray-400 mt-1">
                                "A banner region above the body, for charts or imagery."
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section>
                <h2 class="text-lg font-semibold mb-4">"With actions"</h2>
                <div class="grid md:grid-cols-2 gap-4">
                    <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                        <h3 class="font-medium">"Weekly report"</h3>
                        <p class="text-sm text-gray-400 mt-1">
                            "Summary of orders, refunds and new signups for the current week."
                        </p>
                        <div class="flex justify-end space-x-2 mt-4 pt-4 border-t border-gray-700">
                            <button class="px-3 py-2 text-sm text-gray-300 hover:text-white transition-colors">
                                "Dismiss"
                            </button>
                            <button class="px-3 py-2 text-sm bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors">
                                "Open report"
                            </button>
                        </div>
                    </div>

                    <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                        <div class="flex items-center justify-between">
                            <h3 class="font-medium">"Storage usage"</h3>
                            <span class="text-xs px-2 py-1 rounded bg-yellow-600/20 text-yellow-400">
                                "82% full"
                            </span>
                        </div>
                        <div class="w-full bg-gray-700 rounded-full h-2 mt-4">
                            <div class="bg-primary-500 h-2 rounded-full" style="width: 82%" />
                        </div>
                        <div class="flex justify-end mt-4 pt-4 border-t border-gray-700">
                            <button class="px-3 py-2 text-sm bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors">
                                "Manage"
                            </button>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ShowcaseCard(
    title: &'static str,
    body: &'static str,
    #[prop(default = false)]
    bordered: bool,
) -> impl IntoView {
    let class = if bordered {
        "bg-gray-800 rounded-lg p-4 border border-gray-700"
    } else {
        "bg-gray-800 rounded-lg p-4"
    };

    view! {
        <div class=class>
            <h3 class="font-medium">{title}</h3>
            <p class="text-sm text-gray-400 mt-1">{body}</p>
        </div>
    }
}
