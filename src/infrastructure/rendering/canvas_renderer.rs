use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::application::ChartSnapshot;
use crate::domain::{
    chart::PlotArea,
    errors::{AppError, AppResult},
    logging::LogComponent,
    time_series::{DataPoint, Timestamp},
};
use crate::log_trace;

const LINE_COLOR: &str = "#2563eb";
const FILL_COLOR: &str = "rgba(37, 99, 235, 0.25)";
const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#6b7280";
const SELECTION_COLOR: &str = "rgba(15, 23, 42, 0.08)";

/// Canvas 2D area-chart painter.
pub struct CanvasRenderer {
    width: f64,
    height: f64,
    plot: PlotArea,
}

impl CanvasRenderer {
    pub fn new(width: u32, height: u32, plot: PlotArea) -> Self {
        Self { width: width as f64, height: height as f64, plot }
    }

    pub fn context(canvas: &HtmlCanvasElement) -> AppResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(|_| AppError::Browser("getContext(\"2d\") threw".to_string()))?
            .ok_or_else(|| AppError::Browser("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Browser("context is not a 2D context".to_string()))
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d, snapshot: &ChartSnapshot) -> AppResult<()> {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        let max_value = snapshot.max_value() * 1.1;
        self.draw_grid(ctx);
        self.draw_area(ctx, &snapshot.points, max_value);
        if let Some((left, right)) = snapshot.selection {
            self.draw_selection(ctx, &snapshot.points, left, right);
        }
        self.draw_ticks(ctx, snapshot)?;
        log_trace!(
            LogComponent::Infrastructure("CanvasRenderer"),
            "painted {} points",
            snapshot.points.len()
        );
        Ok(())
    }

    fn draw_grid(&self, ctx: &CanvasRenderingContext2d) {
        ctx.set_stroke_style_str(GRID_COLOR);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        for step in 0..=4 {
            let y = self.plot.top + self.plot.height * step as f64 / 4.0;
            ctx.move_to(self.plot.left, y);
            ctx.line_to(self.plot.right(), y);
        }
        ctx.stroke();
    }

    fn draw_area(&self, ctx: &CanvasRenderingContext2d, points: &[DataPoint], max_value: f64) {
        if points.is_empty() {
            return;
        }
        let count = points.len();
        let coords: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (self.plot.x_for_index(i, count), self.plot.y_for_value(p.value, max_value)))
            .collect();

        ctx.begin_path();
        ctx.move_to(coords[0].0, self.plot.bottom());
        for &(x, y) in &coords {
            ctx.line_to(x, y);
        }
        ctx.line_to(coords[count - 1].0, self.plot.bottom());
        ctx.close_path();
        ctx.set_fill_style_str(FILL_COLOR);
        ctx.fill();

        ctx.begin_path();
        ctx.move_to(coords[0].0, coords[0].1);
        for &(x, y) in &coords[1..] {
            ctx.line_to(x, y);
        }
        ctx.set_stroke_style_str(LINE_COLOR);
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    fn draw_selection(&self, ctx: &CanvasRenderingContext2d, points: &[DataPoint], left: Timestamp, right: Timestamp) {
        let count = points.len();
        if count == 0 {
            return;
        }
        let index_of = |ts: Timestamp| points.partition_point(|p| p.timestamp < ts).min(count - 1);
        let x1 = self.plot.x_for_index(index_of(left), count);
        let x2 = self.plot.x_for_index(index_of(right), count);
        ctx.set_fill_style_str(SELECTION_COLOR);
        ctx.fill_rect(x1, self.plot.top, (x2 - x1).max(1.0), self.plot.height);
    }

    fn draw_ticks(&self, ctx: &CanvasRenderingContext2d, snapshot: &ChartSnapshot) -> AppResult<()> {
        let count = snapshot.points.len();
        ctx.set_fill_style_str(LABEL_COLOR);
        ctx.set_font("12px sans-serif");
        ctx.set_text_align("center");
        let y = self.plot.bottom() + 16.0;
        for tick in &snapshot.ticks {
            let x = self.plot.x_for_index(tick.index, count);
            ctx.fill_text(&tick.label, x, y)
                .map_err(|_| AppError::Browser("fillText failed".to_string()))?;
        }
        Ok(())
    }
}
