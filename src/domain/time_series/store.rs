use super::entities::{DataPoint, Series};
use super::value_objects::{Timestamp, Window};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

/// Fewest points the rendering layer is ever handed for a non-empty series.
pub const MIN_VISIBLE_POINTS: usize = 2;

/// Transitions accepted by [`TimeSeriesStore::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    SetSeries(Series),
    SetWindow { start: Timestamp, end: Timestamp },
    Reset,
}

/// Master series plus the requested window.
///
/// The visible subsequence is never stored: it is derived from both fields on
/// every call, so the two can not drift apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeriesStore {
    series: Series,
    window: Window,
}

impl TimeSeriesStore {
    pub fn new(series: Series) -> Self {
        Self { series, window: Window::Full }
    }

    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::SetSeries(series) => {
                log_debug!(
                    LogComponent::Domain("Store"),
                    "series replaced: {} points",
                    series.len()
                );
                self.series = series;
                self.window = Window::Full;
            }
            StoreAction::SetWindow { start, end } => {
                self.window = Window::range(start, end);
                if self.is_degenerate() {
                    log_debug!(
                        LogComponent::Domain("Store"),
                        "window {}..{} matches fewer than {} points, showing series head",
                        start,
                        end,
                        MIN_VISIBLE_POINTS
                    );
                } else {
                    log_trace!(LogComponent::Domain("Store"), "window set to {}..{}", start, end);
                }
            }
            StoreAction::Reset => {
                self.window = Window::Full;
                log_trace!(LogComponent::Domain("Store"), "window reset to full range");
            }
        }
    }

    /// Replace the master data; the window returns to full range.
    pub fn set_series(&mut self, series: Series) {
        self.apply(StoreAction::SetSeries(series));
    }

    /// Record a requested window. Reversed bounds are swapped.
    pub fn set_window(&mut self, start: Timestamp, end: Timestamp) {
        self.apply(StoreAction::SetWindow { start, end });
    }

    pub fn reset(&mut self) {
        self.apply(StoreAction::Reset);
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    /// The window as requested, even when the degenerate fallback is in effect.
    pub fn window(&self) -> Window {
        self.window
    }

    pub fn is_full_range(&self) -> bool {
        self.window.is_full()
    }

    /// True when the requested range matches fewer than [`MIN_VISIBLE_POINTS`].
    pub fn is_degenerate(&self) -> bool {
        match self.window {
            Window::Full => false,
            Window::Range { start, end } => {
                self.series.range_slice(start, end).len() < MIN_VISIBLE_POINTS
            }
        }
    }

    pub fn visible_data(&self) -> &[DataPoint] {
        match self.window {
            Window::Full => self.series.points(),
            Window::Range { start, end } => {
                let candidate = self.series.range_slice(start, end);
                if candidate.len() < MIN_VISIBLE_POINTS {
                    self.series.head(MIN_VISIBLE_POINTS)
                } else {
                    candidate
                }
            }
        }
    }

    pub fn total_of_visible(&self) -> f64 {
        self.visible_data().iter().map(|p| p.value).sum()
    }

    /// Effective bounds: the requested range, or the series extent when the
    /// window is full. `None` only for an empty series at full range.
    pub fn window_bounds(&self) -> Option<(Timestamp, Timestamp)> {
        match self.window {
            Window::Full => self.series.extent(),
            Window::Range { start, end } => Some((start, end)),
        }
    }
}
