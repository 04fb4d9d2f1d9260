use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use leptos::html::Canvas;
use leptos::*;
use web_sys::MouseEvent;

use crate::{
    application::{ChartConfig, ChartSession, ChartSnapshot},
    domain::{
        chart::{ChartEvent, InteractionOutcome},
        logging::LogComponent,
        time_series::Window,
    },
    event_utils::wheel_listener,
    infrastructure::{data_source::SimulatedSource, rendering::CanvasRenderer},
    time_utils::{format_tooltip_label, format_total},
};
use crate::{log_debug, log_error, log_trace};

const STYLE: &str = r#"
.zoomable-chart { font-family: ui-sans-serif, system-ui, sans-serif; border: 1px solid #e5e7eb; border-radius: 12px; }
.chart-header { display: flex; justify-content: space-between; border-bottom: 1px solid #e5e7eb; padding: 16px 24px; }
.chart-title { font-weight: 600; }
.chart-window { color: #6b7280; font-size: 12px; }
.chart-total { display: flex; flex-direction: column; text-align: left; }
.chart-total .label { color: #6b7280; font-size: 12px; }
.chart-total .value { font-size: 24px; font-weight: 700; }
.chart-body { padding: 16px 24px; }
.chart-actions { display: flex; justify-content: flex-end; margin-bottom: 12px; }
.chart-canvas { user-select: none; cursor: crosshair; }
"#;

/// Single-series area chart with drag-to-zoom, wheel zoom and reset.
#[component]
pub fn ZoomableChart(#[prop(optional)] config: Option<ChartConfig>) -> impl IntoView {
    let config = match config.map(|c| c.validate().map(|()| c)) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log_error!(LogComponent::Presentation("ZoomableChart"), "{}, using defaults", e);
            ChartConfig::default()
        }
        None => ChartConfig::default(),
    };
    let mut initial = ChartSession::new(config.clone());
    match SimulatedSource::from_config(&config.simulation) {
        Ok(source) => {
            if let Err(e) = initial.load(&source) {
                log_error!(LogComponent::Presentation("ZoomableChart"), "series load failed: {}", e);
            }
        }
        Err(e) => log_error!(LogComponent::Presentation("ZoomableChart"), "bad simulation config: {}", e),
    }

    let plot = initial.plot_area();
    let session = store_value(initial);
    let snapshot = create_rw_signal::<ChartSnapshot>(session.with_value(ChartSession::snapshot));
    let window = create_rw_signal::<Window>(session.with_value(|s| s.store().window()));
    let settle_timer = store_value::<Option<Timeout>>(None);
    let wheel_handle = store_value::<Option<EventListener>>(None);
    let canvas_ref = create_node_ref::<Canvas>();

    let publish = move || snapshot.set(session.with_value(ChartSession::snapshot));

    let apply = move |event: ChartEvent| -> InteractionOutcome {
        let outcome = session
            .try_update_value(|s| s.dispatch(event))
            .unwrap_or_default();
        if let Some(delay) = outcome.settle_after {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            // Replacing the handle drops, and so cancels, the previous timer.
            settle_timer.set_value(Some(Timeout::new(millis, move || {
                session.update_value(|s| {
                    s.dispatch(ChartEvent::SettleElapsed);
                });
                publish();
            })));
        }
        if outcome.window_changed {
            window.set(session.with_value(|s| s.store().window()));
        }
        if session.with_value(|s| s.publish_directly(&outcome)) {
            publish();
        }
        outcome
    };

    // Window-driven recomputation, held back while a wheel zoom settles.
    create_effect(move |_| {
        let current = window.get();
        if session.with_value(|s| s.controller().is_settling()) {
            log_trace!(LogComponent::Presentation("ZoomableChart"), "window effect suppressed while settling");
            return;
        }
        log_debug!(LogComponent::Presentation("ZoomableChart"), "window is now {:?}", current);
        publish();
    });

    let zone = config.label_zone;
    let renderer = CanvasRenderer::new(config.width, config.height, plot);
    create_effect(move |_| {
        let current = snapshot.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let painted = CanvasRenderer::context(&canvas).and_then(|ctx| renderer.render(&ctx, &current));
        if let Err(e) = painted {
            log_error!(LogComponent::Presentation("ZoomableChart"), "render failed: {}", e);
        }
    });

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let listener = wheel_listener(&canvas, move |ev| {
            let input = plot.wheel_input(ev.delta_y(), ev.offset_x() as f64);
            if apply(ChartEvent::Wheel(input)).prevent_default {
                ev.prevent_default();
            }
        });
        wheel_handle.set_value(Some(listener));
    });

    on_cleanup(move || {
        wheel_handle.set_value(None);
        settle_timer.set_value(None);
    });

    let label_at = move |ev: &MouseEvent| session.with_value(|s| s.timestamp_at(ev.offset_x() as f64));

    let window_label = move || {
        snapshot.with(|s| match s.bounds {
            Some((start, end)) => format!("{} to {}", format_tooltip_label(start, zone), format_tooltip_label(end, zone)),
            None => "No data".to_string(),
        })
    };

    view! {
        <style>{STYLE}</style>
        <div class="zoomable-chart">
            <div class="chart-header">
                <div>
                    <div class="chart-title">{config.title.clone()}</div>
                    <div class="chart-window">{window_label}</div>
                </div>
                <div class="chart-total">
                    <span class="label">"Events"</span>
                    <span class="value">{move || snapshot.with(|s| format_total(s.total))}</span>
                </div>
            </div>
            <div class="chart-body">
                <div class="chart-actions">
                    <button
                        on:click=move |_| {
                            apply(ChartEvent::Reset);
                        }
                        disabled=move || snapshot.with(|s| !s.can_reset)
                    >
                        "Reset"
                    </button>
                </div>
                <canvas
                    class="chart-canvas"
                    node_ref=canvas_ref
                    width=config.width
                    height=config.height
                    on:mousedown=move |ev: MouseEvent| {
                        apply(ChartEvent::PointerDown { timestamp: label_at(&ev) });
                    }
                    on:mousemove=move |ev: MouseEvent| {
                        apply(ChartEvent::PointerMove { timestamp: label_at(&ev) });
                    }
                    on:mouseup=move |_| {
                        apply(ChartEvent::PointerUp);
                    }
                    on:mouseleave=move |_| {
                        apply(ChartEvent::PointerLeave);
                    }
                />
            </div>
        </div>
    }
}
