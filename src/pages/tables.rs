//! Tables Page
//!
//! Showcase of the data table styling.

use leptos::*;

struct Order {
    id: &'static str,
    customer: &'static str,
    status: &'static str,
    total: &'static str,
}

const ORDERS: [Order; 5] = [
    Order { id: "QD-1042", customer: "Harbor Supply Co.", status: "Paid", total: "$1,284.00" },
    Order { id: "QD-1041", customer: "Mistral Traders", status: "Pending", total: "$412.50" },
    Order { id: "QD-1040", customer: "Northlight Goods", status: "Paid", total: "$2,090.00" },
    Order { id: "QD-1039", customer: "Beacon & Sons", status: "Refunded", total: "$158.75" },
    Order { id: "QD-1038", customer: "Windward Outfitters", status: "Paid", total: "$733.20" },
];

fn status_class(status: &str) -> &'static str {
    match status {
        "Paid" => "bg-green-600/20 text-green-400",
        "Pending" => "bg-yellow-600/20 text-yellow-400",
        "Refunded" => "bg-red-600/20 text-red-400",
        _ => "bg-gray-600/20 text-gray-300",
    }
}

/// Table showcase page
#[component]
pub fn Tables() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Tables"</h1>
                <p class="text-gray-400 mt-1">"Data table styling with status badges"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Recent orders"</h2>

                <div class="overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-400 border-b border-gray-700">
                                <th class="py-3 pr-4 font-medium">"Order"</th>
                                <th class="py-3 pr-4 font-medium">"Customer"</th>
                                <th class="py-3 pr-4 font-medium">"Status"</th>
                                <th class="py-3 font-medium text-right">"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {ORDERS.iter().map(|order| view! {
                                <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-750">
                                    <td class="py-3 pr-4 font-mono text-gray-300">{order.id}</td>
                                    <td class="py-3 pr-4">{order.customer}</td>
                                    <td class="py-3 pr-4">
                                        <span class=format!(
                                            "text-xs px-2 py-1 rounded {}",
                                            status_class(order.status)
                                        )>
                                            {order.status}
                                        </span>
                                    </td>
                                    <td class="py-3 text-right font-semibold">{order.total}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}
