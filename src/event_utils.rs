use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, WheelEvent};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

impl EventOptions {
    /// Options for handlers that call `prevent_default`.
    pub fn blocking() -> Self {
        Self { passive: false, ..Self::default() }
    }

    fn to_gloo(&self) -> EventListenerOptions {
        EventListenerOptions {
            phase: if self.capture { EventListenerPhase::Capture } else { EventListenerPhase::Bubble },
            passive: self.passive,
        }
    }
}

/// Attach `cb` to `target`; the listener is removed when the handle drops.
pub fn listen_with_options(
    target: &EventTarget,
    event_name: &'static str,
    options: &EventOptions,
    cb: impl FnMut(&Event) + 'static,
) -> EventListener {
    EventListener::new_with_options(target, event_name, options.to_gloo(), cb)
}

/// Non-passive wheel listener, so the handler may cancel page scrolling.
///
/// Browsers treat wheel listeners as passive by default on some targets,
/// which makes `prevent_default` a silent no-op.
pub fn wheel_listener(target: &EventTarget, mut cb: impl FnMut(&WheelEvent) + 'static) -> EventListener {
    listen_with_options(target, "wheel", &EventOptions::blocking(), move |event| {
        if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
            cb(wheel);
        }
    })
}
