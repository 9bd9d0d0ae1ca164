//! Bar Chart Component
//!
//! Weekly consumption chart drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Fixed drawing height in logical pixels.
const CHART_HEIGHT: u32 = 200;
/// Padding around the plot area.
const PADDING: f64 = 30.0;
/// Fraction of a slot taken by the bar; the rest is gap.
const BAR_FRACTION: f64 = 0.6;
const GAP_FRACTION: f64 = 0.4;
/// Headroom above the tallest value.
const SCALE_HEADROOM: f64 = 1.2;

/// Bar chart over a fixed-length value sequence.
///
/// Fully clears and redraws after mount and on every viewport resize,
/// so repeated draws never accumulate.
#[component]
pub fn BarChart(
    /// One value per slot.
    values: Vec<f64>,
    /// One label per slot, drawn under the baseline.
    labels: Vec<&'static str>,
    /// Unit suffix drawn next to each value.
    #[prop(default = "kWh")]
    unit: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Initial draw once the canvas is mounted
    let draw_values = values.clone();
    let draw_labels = labels.clone();
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &draw_values, &draw_labels, unit);
        }
    });

    // Redraw at the new layout width whenever the viewport resizes
    let resize = window_event_listener(ev::resize, move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            draw_bars(&canvas, &values, &labels, unit);
        }
    });
    on_cleanup(move || resize.remove());

    view! {
        <canvas node_ref=canvas_ref height=CHART_HEIGHT class="w-full rounded-lg" />
    }
}

/// One laid-out bar in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BarRect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

/// Vertical scale with headroom over the tallest value, clamped so an
/// all-zero week never divides by zero.
fn scale_max(values: &[f64]) -> f64 {
    let max = values.iter().fold(0.0_f64, |a, &b| a.max(b));
    let scaled = max * SCALE_HEADROOM;
    if scaled > 0.0 {
        scaled
    } else {
        1.0
    }
}

/// Lays the values out as bars in a surface of the given size. Each bar
/// is centered in its slot.
fn layout_bars(width: f64, height: f64, values: &[f64]) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let inner_w = width - PADDING * 2.0;
    let inner_h = height - PADDING * 2.0;
    let slot = inner_w / values.len() as f64;
    let bar_w = slot * BAR_FRACTION;
    let gap = slot * GAP_FRACTION;
    let max = scale_max(values);

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = PADDING + i as f64 * (bar_w + gap) + gap / 2.0;
            let h = (value / max) * inner_h;
            BarRect {
                x,
                y: height - PADDING - h,
                w: bar_w,
                h,
            }
        })
        .collect()
}

/// Clears and redraws the whole chart.
fn draw_bars(canvas: &HtmlCanvasElement, values: &[f64], labels: &[&'static str], unit: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    // Match the backing store to the layout width before drawing
    canvas.set_width(canvas.client_width().max(0) as u32);
    canvas.set_height(CHART_HEIGHT);

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    if width <= PADDING * 2.0 {
        // Not laid out yet; skip the frame
        return;
    }

    // Baseline axis
    ctx.set_stroke_style(&"rgba(255,255,255,0.2)".into());
    ctx.begin_path();
    ctx.move_to(PADDING, height - PADDING);
    ctx.line_to(width - PADDING, height - PADDING);
    ctx.stroke();

    ctx.set_font("12px Inter, sans-serif");
    ctx.set_text_align("center");

    for (i, bar) in layout_bars(width, height, values).into_iter().enumerate() {
        // Gradient fill, bright at the top
        let grad = ctx.create_linear_gradient(0.0, bar.y, 0.0, bar.y + bar.h);
        let _ = grad.add_color_stop(0.0, "#00ff88");
        let _ = grad.add_color_stop(1.0, "#00d4ff");
        ctx.set_fill_style(&grad);
        ctx.fill_rect(bar.x, bar.y, bar.w, bar.h);

        // Labels under the baseline, values above the bar
        ctx.set_fill_style(&"rgba(255,255,255,0.7)".into());
        let center = bar.x + bar.w / 2.0;
        if let Some(label) = labels.get(i) {
            let _ = ctx.fill_text(label, center, height - PADDING + 16.0);
        }
        let _ = ctx.fill_text(&format!("{} {}", values[i], unit), center, bar.y - 6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scale_leaves_headroom_over_the_tallest_value() {
        assert!(close(scale_max(&[2.0, 5.0, 3.0]), 6.0));
    }

    #[test]
    fn scale_clamps_when_no_value_is_positive() {
        assert!(close(scale_max(&[0.0, 0.0, 0.0]), 1.0));
        assert!(close(scale_max(&[]), 1.0));
    }

    #[test]
    fn bars_split_each_slot_into_bar_and_gap() {
        let bars = layout_bars(100.0, 200.0, &[5.0, 10.0]);

        // Inner width 40 over two slots of 20: bar 12, gap 8
        assert_eq!(bars.len(), 2);
        assert!(close(bars[0].w, 12.0));
        assert!(close(bars[0].x, 34.0));
        assert!(close(bars[1].x, 54.0));
    }

    #[test]
    fn bar_heights_scale_against_the_padded_max() {
        let bars = layout_bars(100.0, 200.0, &[5.0, 10.0]);

        // Inner height 140, max 12: the tallest bar stays below the top
        assert!(close(bars[1].h, 10.0 / 12.0 * 140.0));
        assert!(close(bars[1].y, 200.0 - 30.0 - bars[1].h));
        assert!(close(bars[0].h, bars[1].h / 2.0));
    }

    #[test]
    fn all_zero_values_draw_zero_height_bars_on_the_baseline() {
        let bars = layout_bars(100.0, 200.0, &[0.0, 0.0]);

        assert!(bars.iter().all(|b| close(b.h, 0.0)));
        assert!(bars.iter().all(|b| close(b.y, 170.0)));
    }

    #[test]
    fn empty_input_lays_out_no_bars() {
        assert!(layout_bars(100.0, 200.0, &[]).is_empty());
    }
}
