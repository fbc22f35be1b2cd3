//! Dashboard Page
//!
//! Landing page with summary figures and the sales overview chart.

use leptos::*;

use crate::api;
use crate::components::chart::{ChartConfig, ChartSeries};
use crate::components::{BarChart, Loading};
use crate::state::global::GlobalState;

/// Weekly sales figures shown on the overview chart.
///
/// Static display configuration: one series over a week of categories on a
/// fixed 100..400 axis.
pub fn sales_overview() -> ChartConfig {
    ChartConfig {
        series: vec![ChartSeries {
            name: "Quarterdeck".to_string(),
            data: vec![355.0, 390.0, 300.0, 350.0, 390.0, 180.0, 355.0],
        }],
        categories: vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        colors: vec!["#fb9778", "#03c9d7"],
        y_min: 100.0,
        y_max: 400.0,
        y_tick_count: 3,
        column_width_pct: 42.0,
        corner_radius: 5.0,
        height: 270,
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (summary, set_summary) = create_signal(None::<api::DashboardSummary>);

    // Fetch the summary figures on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_summary().await {
                Ok(summary) => {
                    set_summary.set(Some(summary));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch summary: {}", e).into());
                }
            }

            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Store activity at a glance"</p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || {
                        state.user.get()
                            .map(|u| format!("Signed in as {}", u.username))
                            .unwrap_or_default()
                    }}
                </div>
            </div>

            // Summary row
            <section>
                <h2 class="text-lg font-semibold mb-4">"This Month"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <StatCard
                        label="Revenue"
                        value=Signal::derive(move || {
                            summary.get().map(|s| format!("${:.0}", s.revenue_mtd))
                        })
                    />
                    <StatCard
                        label="Active users"
                        value=Signal::derive(move || {
                            summary.get().map(|s| s.active_users.to_string())
                        })
                    />
                    <StatCard
                        label="Open orders"
                        value=Signal::derive(move || {
                            summary.get().map(|s| s.open_orders.to_string())
                        })
                    />
                    <StatCard
                        label="Support tickets"
                        value=Signal::derive(move || {
                            summary.get().map(|s| s.support_tickets.to_string())
                        })
                    />
                </div>
            </section>

            // Sales overview chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Sales Overview"</h2>

                {move || {
                    if state.loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <BarChart config=sales_overview() /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Single summary figure with a placeholder until data arrives
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_series_matches_category_count() {
        let config = sales_overview();
        assert_eq!(config.series.len(), 1);
        assert_eq!(config.series[0].data.len(), config.categories.len());
    }

    #[test]
    fn sales_axis_is_fixed_with_three_ticks() {
        let config = sales_overview();
        assert_eq!(config.y_min, 100.0);
        assert_eq!(config.y_max, 400.0);
        assert_eq!(config.y_tick_count, 3);
        assert!(config.series[0].data.iter().all(|v| *v >= config.y_min && *v <= config.y_max));
    }

    #[test]
    fn sales_palette_and_bar_shape() {
        let config = sales_overview();
        assert_eq!(config.colors, vec!["#fb9778", "#03c9d7"]);
        assert_eq!(config.column_width_pct, 42.0);
        assert_eq!(config.corner_radius, 5.0);
        assert_eq!(config.height, 270);
    }
}
