use crate::domain::time_series::Timestamp;
use std::time::Duration;

/// Raw wheel input, already expressed in plot-relative pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    /// Vertical scroll delta; negative scrolls up (zoom in).
    pub delta_y: f64,
    pub pointer_x: f64,
    pub plot_left: f64,
    pub plot_width: f64,
}

impl WheelInput {
    /// Horizontal pointer position as a fraction of the plot width, clamped to
    /// `0.0..=1.0`. `None` when the plot has no usable width.
    pub fn cursor_fraction(&self) -> Option<f64> {
        if !(self.plot_width.is_finite() && self.plot_width > 0.0) {
            return None;
        }
        let fraction = (self.pointer_x - self.plot_left) / self.plot_width;
        fraction.is_finite().then(|| fraction.clamp(0.0, 1.0))
    }

    pub fn direction(&self) -> Option<ZoomDirection> {
        ZoomDirection::from_delta(self.delta_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scrolling up zooms in; anything else, zero included, zooms out.
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if delta_y.is_nan() {
            None
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            Some(Self::Out)
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Every input the interaction controller understands.
///
/// `timestamp` is the active label under the pointer, `None` when the pointer
/// is not over a data-bearing position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    PointerDown { timestamp: Option<Timestamp> },
    PointerMove { timestamp: Option<Timestamp> },
    PointerUp,
    PointerLeave,
    Wheel(WheelInput),
    Reset,
    /// The wheel settle timer fired.
    SettleElapsed,
}

/// Side effects the host must carry out after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionOutcome {
    pub window_changed: bool,
    /// Suppress the host surface's default scrolling.
    pub prevent_default: bool,
    /// Schedule `ChartEvent::SettleElapsed` after this delay.
    pub settle_after: Option<Duration>,
}

impl InteractionOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn window_changed() -> Self {
        Self { window_changed: true, ..Self::default() }
    }
}
