use super::events::{ChartEvent, InteractionOutcome, WheelInput, ZoomDirection};
use crate::domain::logging::LogComponent;
use crate::domain::time_series::{TimeSeriesStore, Timestamp};
use crate::{log_debug, log_trace};
use std::time::Duration;

/// Share of the current range removed (or added) by one wheel step.
pub const ZOOM_FACTOR: f64 = 0.1;

/// How long a wheel zoom keeps window-driven recomputation suppressed.
pub const WHEEL_SETTLE: Duration = Duration::from_millis(300);

/// In-progress drag selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionDraft {
    pub anchor: Option<Timestamp>,
    pub cursor: Option<Timestamp>,
}

impl SelectionDraft {
    pub fn anchored_at(anchor: Timestamp) -> Self {
        Self { anchor: Some(anchor), cursor: None }
    }

    /// Sorted `(left, right)` once both ends are known.
    pub fn bounds(&self) -> Option<(Timestamp, Timestamp)> {
        let (anchor, cursor) = (self.anchor?, self.cursor?);
        Some((anchor.min(cursor), anchor.max(cursor)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Selecting(SelectionDraft),
}

/// Turns pointer and wheel input into window changes on a [`TimeSeriesStore`].
///
/// Drag selection is a two-state machine (`Idle`, `Selecting`). Wheel zoom and
/// reset sit beside it: a wheel step never touches the draft, so it can land
/// in the middle of a drag without disturbing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    state: InteractionState,
    settling: bool,
    zoom_factor: f64,
    settle_delay: Duration,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomController {
    pub fn new() -> Self {
        Self::with_settings(ZOOM_FACTOR, WHEEL_SETTLE)
    }

    pub fn with_settings(zoom_factor: f64, settle_delay: Duration) -> Self {
        Self {
            state: InteractionState::Idle,
            settling: false,
            zoom_factor,
            settle_delay,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn draft(&self) -> Option<SelectionDraft> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Selecting(draft) => Some(draft),
        }
    }

    /// Range to highlight while dragging.
    pub fn selection(&self) -> Option<(Timestamp, Timestamp)> {
        self.draft()?.bounds()
    }

    /// True between a wheel zoom and the matching `SettleElapsed`.
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// Reset is offered only when the window is narrowed.
    pub fn can_reset(&self, store: &TimeSeriesStore) -> bool {
        !store.is_full_range()
    }

    pub fn handle(&mut self, event: ChartEvent, store: &mut TimeSeriesStore) -> InteractionOutcome {
        match event {
            ChartEvent::PointerDown { timestamp } => self.pointer_down(timestamp),
            ChartEvent::PointerMove { timestamp } => self.pointer_move(timestamp),
            ChartEvent::PointerUp | ChartEvent::PointerLeave => self.finish_selection(store),
            ChartEvent::Wheel(input) => self.wheel(input, store),
            ChartEvent::Reset => self.reset(store),
            ChartEvent::SettleElapsed => {
                self.settling = false;
                InteractionOutcome::ignored()
            }
        }
    }

    fn pointer_down(&mut self, timestamp: Option<Timestamp>) -> InteractionOutcome {
        let Some(anchor) = timestamp else {
            log_trace!(LogComponent::Domain("Zoom"), "pointer down without a label ignored");
            return InteractionOutcome::ignored();
        };
        self.state = InteractionState::Selecting(SelectionDraft::anchored_at(anchor));
        InteractionOutcome::ignored()
    }

    fn pointer_move(&mut self, timestamp: Option<Timestamp>) -> InteractionOutcome {
        if let (InteractionState::Selecting(draft), Some(cursor)) = (&mut self.state, timestamp) {
            draft.cursor = Some(cursor);
        }
        InteractionOutcome::ignored()
    }

    fn finish_selection(&mut self, store: &mut TimeSeriesStore) -> InteractionOutcome {
        let InteractionState::Selecting(draft) = std::mem::take(&mut self.state) else {
            return InteractionOutcome::ignored();
        };
        match draft.bounds() {
            Some((left, right)) => {
                log_debug!(LogComponent::Domain("Zoom"), "drag selected {}..{}", left, right);
                store.set_window(left, right);
                InteractionOutcome::window_changed()
            }
            None => InteractionOutcome::ignored(),
        }
    }

    fn wheel(&mut self, input: WheelInput, store: &mut TimeSeriesStore) -> InteractionOutcome {
        let mut outcome = InteractionOutcome { prevent_default: true, ..InteractionOutcome::default() };
        let (Some(direction), Some(fraction), Some((start, end))) =
            (input.direction(), input.cursor_fraction(), store.window_bounds())
        else {
            log_trace!(LogComponent::Domain("Zoom"), "unusable wheel input ignored: {:?}", input);
            return outcome;
        };
        if direction == ZoomDirection::In && store.is_degenerate() {
            log_trace!(LogComponent::Domain("Zoom"), "already at the fallback view, zoom in ignored");
            return outcome;
        }

        let (new_start, new_end) = zoom_window(start, end, direction, self.zoom_factor, fraction);
        log_trace!(
            LogComponent::Domain("Zoom"),
            "wheel {:?} at {:.3}: {}..{} -> {}..{}",
            direction,
            fraction,
            start,
            end,
            new_start,
            new_end
        );
        store.set_window(new_start, new_end);
        self.settling = true;
        outcome.window_changed = true;
        outcome.settle_after = Some(self.settle_delay);
        outcome
    }

    fn reset(&mut self, store: &mut TimeSeriesStore) -> InteractionOutcome {
        if !self.can_reset(store) {
            return InteractionOutcome::ignored();
        }
        store.reset();
        self.state = InteractionState::Idle;
        InteractionOutcome::window_changed()
    }
}

/// One wheel step applied to `start..end`, anchored at `fraction` of the width.
///
/// Zooming in removes `zoom_factor` of the range, split so that the share
/// taken from each side is proportional to the distance from the cursor.
/// A zoom-out step that would round away widens by one millisecond per side.
pub fn zoom_window(
    start: Timestamp,
    end: Timestamp,
    direction: ZoomDirection,
    zoom_factor: f64,
    fraction: f64,
) -> (Timestamp, Timestamp) {
    let (start, end) = (start.as_f64(), end.as_f64());
    let zoom_amount = (end - start) * zoom_factor * direction.sign();
    let new_start = start + zoom_amount * fraction;
    let new_end = end - zoom_amount * (1.0 - fraction);
    let (new_start, new_end) = (Timestamp::from_f64_rounded(new_start), Timestamp::from_f64_rounded(new_end));
    if direction == ZoomDirection::Out && new_end.value() - new_start.value() <= (end - start) as i64 {
        return (
            Timestamp::from(new_start.value().min(start as i64 - 1)),
            Timestamp::from(new_end.value().max(end as i64 + 1)),
        );
    }
    (new_start, new_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::time_series::{DataPoint, Series, Window};

    fn store() -> TimeSeriesStore {
        let points = (0..=10).map(|i| DataPoint::from((i * 100, 1.0))).collect();
        TimeSeriesStore::new(Series::new(points).unwrap())
    }

    fn at(ms: i64) -> Option<Timestamp> {
        Some(Timestamp::from(ms))
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut store = store();
        let mut controller = ZoomController::new();
        controller.handle(ChartEvent::PointerMove { timestamp: at(300) }, &mut store);
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn move_without_label_keeps_cursor() {
        let mut store = store();
        let mut controller = ZoomController::new();
        controller.handle(ChartEvent::PointerDown { timestamp: at(100) }, &mut store);
        controller.handle(ChartEvent::PointerMove { timestamp: at(400) }, &mut store);
        controller.handle(ChartEvent::PointerMove { timestamp: None }, &mut store);
        assert_eq!(controller.selection(), Some((Timestamp::from(100), Timestamp::from(400))));
    }

    #[test]
    fn second_pointer_down_restarts_draft() {
        let mut store = store();
        let mut controller = ZoomController::new();
        controller.handle(ChartEvent::PointerDown { timestamp: at(100) }, &mut store);
        controller.handle(ChartEvent::PointerMove { timestamp: at(400) }, &mut store);
        controller.handle(ChartEvent::PointerDown { timestamp: at(700) }, &mut store);
        assert_eq!(controller.draft(), Some(SelectionDraft::anchored_at(Timestamp::from(700))));
    }

    #[test]
    fn disabled_reset_keeps_draft() {
        let mut store = store();
        let mut controller = ZoomController::new();
        controller.handle(ChartEvent::PointerDown { timestamp: at(100) }, &mut store);
        let outcome = controller.handle(ChartEvent::Reset, &mut store);
        assert_eq!(outcome, InteractionOutcome::ignored());
        assert!(controller.draft().is_some());
    }

    #[test]
    fn reset_clears_draft_and_window() {
        let mut store = store();
        let mut controller = ZoomController::new();
        store.set_window(Timestamp::from(200), Timestamp::from(500));
        controller.handle(ChartEvent::PointerDown { timestamp: at(100) }, &mut store);
        let outcome = controller.handle(ChartEvent::Reset, &mut store);
        assert!(outcome.window_changed);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(store.window(), Window::Full);
    }

    #[test]
    fn tiny_zoom_out_still_widens() {
        let (start, end) = zoom_window(
            Timestamp::from(100),
            Timestamp::from(109),
            ZoomDirection::Out,
            ZOOM_FACTOR,
            0.5,
        );
        assert_eq!((start.value(), end.value()), (99, 110));
    }

    #[test]
    fn zoom_out_expands_both_sides() {
        let (start, end) = zoom_window(
            Timestamp::from(0),
            Timestamp::from(1000),
            ZoomDirection::Out,
            ZOOM_FACTOR,
            0.5,
        );
        assert_eq!((start.value(), end.value()), (-50, 1050));
    }
}
