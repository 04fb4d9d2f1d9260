use super::events::WheelInput;
use crate::domain::time_series::{DataPoint, Timestamp};
use serde::Deserialize;

/// Space reserved around the plot inside the canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self { top: 20.0, right: 30.0, bottom: 5.0, left: 20.0 }
    }
}

/// The data-bearing rectangle of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// `axis_height` is kept free below the plot for tick labels.
    pub fn from_canvas(width: f64, height: f64, margins: PlotMargins, axis_height: f64) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            width: (width - margins.left - margins.right).max(0.0),
            height: (height - margins.top - margins.bottom - axis_height).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left && x <= self.right()
    }

    /// X of the `index`-th of `count` evenly spaced points.
    pub fn x_for_index(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (count - 1) as f64
    }

    /// Y for `value` on a scale from zero to `max_value`.
    pub fn y_for_value(&self, value: f64, max_value: f64) -> f64 {
        if max_value <= 0.0 {
            return self.bottom();
        }
        self.bottom() - self.height * (value / max_value).clamp(0.0, 1.0)
    }

    /// Index of the point nearest to `x`, or `None` off the plot.
    pub fn index_at(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 || self.width <= 0.0 || !self.contains_x(x) {
            return None;
        }
        if count == 1 {
            return Some(0);
        }
        let fraction = (x - self.left) / self.width;
        Some(((fraction * (count - 1) as f64).round() as usize).min(count - 1))
    }

    /// Active label under the pointer: the timestamp of the nearest visible point.
    pub fn timestamp_at(&self, x: f64, visible: &[DataPoint]) -> Option<Timestamp> {
        self.index_at(x, visible.len()).map(|i| visible[i].timestamp)
    }

    pub fn wheel_input(&self, delta_y: f64, pointer_x: f64) -> WheelInput {
        WheelInput {
            delta_y,
            pointer_x,
            plot_left: self.left,
            plot_width: self.width,
        }
    }
}
