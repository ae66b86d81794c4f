//! Chart Component
//!
//! Line chart of one summary series using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use expense_tracker::{ChartKind, ChartSurface, Plot, PlotArea};

use crate::state::use_page_state;

/// Canvas for one of the summary charts, redrawn whenever its surface changes
#[component]
pub fn Chart(kind: ChartKind) -> impl IntoView {
    let state = use_page_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let surface = state.chart(kind);

    create_effect(move |_| {
        let surface = surface.get();

        if let (Some(canvas), Some(surface)) = (canvas_ref.get(), surface) {
            draw_chart(&canvas, &surface);
        }
    });

    view! {
        <canvas id=kind.canvas_id() node_ref=canvas_ref width="800" height="300" />
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, surface: &ChartSurface) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let plot = Plot::new(surface.series(), PlotArea::new(width, height));
    let style = surface.style();

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#e9ecef".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for tick in &plot.y_ticks {
        ctx.begin_path();
        ctx.move_to(plot.area.margin_left, tick.y);
        ctx.line_to(width - plot.area.margin_right, tick.y);
        ctx.stroke();

        ctx.set_fill_style(&"#6c757d".into());
        let _ = ctx.fill_text(&format!("{:.2}", tick.value), 5.0, tick.y + 4.0);
    }

    // Dataset label
    ctx.set_fill_style(&style.stroke_color.as_str().into());
    ctx.fill_rect(plot.area.margin_left, 4.0, 24.0, 10.0);
    ctx.set_fill_style(&"#212529".into());
    let _ = ctx.fill_text(surface.label(), plot.area.margin_left + 30.0, 14.0);

    if plot.is_empty() {
        return;
    }

    let segments = plot.segments(style.tension);
    let first = &plot.points[0];

    // Line
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for segment in &segments {
        ctx.bezier_curve_to(
            segment.control1.0,
            segment.control1.1,
            segment.control2.0,
            segment.control2.1,
            segment.to.0,
            segment.to.1,
        );
    }
    ctx.set_stroke_style(&style.stroke_color.as_str().into());
    ctx.set_line_width(2.0);
    ctx.stroke();

    // Area under the line
    if style.fill && !segments.is_empty() {
        let last = &plot.points[plot.points.len() - 1];
        ctx.line_to(last.x, plot.area.baseline());
        ctx.line_to(first.x, plot.area.baseline());
        ctx.close_path();
        ctx.set_global_alpha(0.2);
        ctx.set_fill_style(&style.stroke_color.as_str().into());
        ctx.fill();
        ctx.set_global_alpha(1.0);
    }

    // Points and x-axis labels
    let label_step = (plot.points.len() / 10).max(1);
    for (i, point) in plot.points.iter().enumerate() {
        ctx.set_fill_style(&style.stroke_color.as_str().into());
        ctx.begin_path();
        let _ = ctx.arc(point.x, point.y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        if i % label_step == 0 {
            ctx.set_fill_style(&"#6c757d".into());
            let _ = ctx.fill_text(&point.label, point.x - 20.0, height - 10.0);
        }
    }
}
