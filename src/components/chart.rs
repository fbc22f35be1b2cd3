//! Chart Component
//!
//! Bar chart rendering on HTML5 Canvas, driven by a static configuration.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// A named series of numeric values
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<f64>,
}

/// Display configuration for a bar chart.
///
/// Built once and never mutated at runtime. Series values are plotted
/// against a fixed y axis; categories label the x axis groups.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub series: Vec<ChartSeries>,
    pub categories: Vec<&'static str>,
    pub colors: Vec<&'static str>,
    pub y_min: f64,
    pub y_max: f64,
    pub y_tick_count: usize,
    pub column_width_pct: f64,
    pub corner_radius: f64,
    pub height: u32,
}

/// Fallback series color when the palette runs out
const FALLBACK_COLOR: &str = "#9ca3af";

/// Bar chart component
#[component]
pub fn BarChart(config: ChartConfig) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let height = config.height;

    // Draw once the canvas node is mounted
    let draw_config = config.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &draw_config);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height=height
                class="w-full rounded-lg"
            />

            <ChartLegend config=config />
        </div>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend(config: ChartConfig) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {config.series.iter().enumerate().map(|(idx, series)| {
                let color = config.colors.get(idx).copied().unwrap_or(FALLBACK_COLOR);
                view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-sm text-gray-300">{series.name.clone()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Evenly spaced axis tick values from `min` to `max` inclusive
pub fn y_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || max <= min {
        return vec![min];
    }

    (0..=count)
        .map(|i| min + (max - min) * i as f64 / count as f64)
        .collect()
}

/// Draw the bars on canvas
fn draw_bars(canvas: &HtmlCanvasElement, config: &ChartConfig) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style_str("#1f2937"); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let y_span = config.y_max - config.y_min;
    if y_span <= 0.0 || config.categories.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 25.0, height / 2.0);
        return;
    }

    // Grid lines with y-axis labels at each tick
    ctx.set_stroke_style_str("#374151"); // gray-700
    ctx.set_line_width(1.0);

    for tick in y_ticks(config.y_min, config.y_max, config.y_tick_count) {
        let y = margin_top + ((config.y_max - tick) / y_span) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style_str("#9ca3af"); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", tick), 5.0, y + 4.0);
    }

    // Bars, grouped per category
    let group_width = chart_width / config.categories.len() as f64;
    let series_count = config.series.len().max(1) as f64;
    let bar_width = group_width * (config.column_width_pct / 100.0) / series_count;

    for (series_idx, series) in config.series.iter().enumerate() {
        let color = config
            .colors
            .get(series_idx)
            .copied()
            .unwrap_or(FALLBACK_COLOR);
        ctx.set_fill_style_str(color);

        for (cat_idx, value) in series.data.iter().take(config.categories.len()).enumerate() {
            let clamped = value.clamp(config.y_min, config.y_max);
            let bar_height = ((clamped - config.y_min) / y_span) * chart_height;

            let group_left = margin_left + cat_idx as f64 * group_width;
            let x = group_left
                + (group_width - bar_width * series_count) / 2.0
                + series_idx as f64 * bar_width;
            let y = margin_top + chart_height - bar_height;

            fill_rounded_bar(&ctx, x, y, bar_width, bar_height, config.corner_radius);
        }
    }

    // Category labels along the x axis
    ctx.set_fill_style_str("#9ca3af");
    ctx.set_font("12px sans-serif");

    for (idx, label) in config.categories.iter().enumerate() {
        let x = margin_left + (idx as f64 + 0.5) * group_width - 12.0;
        let _ = ctx.fill_text(label, x, height - 10.0);
    }
}

/// Fill a bar with rounded top corners
fn fill_rounded_bar(
    ctx: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    radius: f64,
) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    let r = radius.min(w / 2.0).min(h);

    ctx.begin_path();
    ctx.move_to(x, y + h);
    ctx.line_to(x, y + r);
    let _ = ctx.arc_to(x, y, x + r, y, r);
    ctx.line_to(x + w - r, y);
    let _ = ctx.arc_to(x + w, y, x + w, y + r, r);
    ctx.line_to(x + w, y + h);
    ctx.close_path();
    ctx.fill();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_span_the_axis_inclusively() {
        assert_eq!(y_ticks(100.0, 400.0, 3), vec![100.0, 200.0, 300.0, 400.0]);
        assert_eq!(y_ticks(0.0, 10.0, 2), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn degenerate_axis_yields_a_single_tick() {
        assert_eq!(y_ticks(5.0, 5.0, 4), vec![5.0]);
        assert_eq!(y_ticks(5.0, 1.0, 4), vec![5.0]);
        assert_eq!(y_ticks(0.0, 10.0, 0), vec![0.0]);
    }
}
