//! Zoomable time-series chart for the browser.
//!
//! The interaction core lives in [`domain`]: a [`TimeSeriesStore`] that
//! derives the visible points from a master series and a window, and a
//! [`ZoomController`] that turns pointer and wheel events into window changes.
//! Everything else adapts that core to Leptos and a 2D canvas.
//!
//! [`TimeSeriesStore`]: domain::time_series::TimeSeriesStore
//! [`ZoomController`]: domain::chart::ZoomController

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod time_utils;

#[cfg(feature = "render")]
pub mod app;
#[cfg(feature = "render")]
pub mod event_utils;

#[cfg(feature = "render")]
use wasm_bindgen::prelude::*;

/// Install logging and mount the chart.
#[cfg(feature = "render")]
#[wasm_bindgen(start)]
pub fn initialize() {
    use app::ZoomableChart;
    use application::ChartConfig;
    use domain::logging::{LogComponent, LogLevel, install_clock, install_logger};
    use infrastructure::services::{BrowserClock, ConsoleLogger};
    use leptos::view;

    console_error_panic_hook::set_once();

    let config = ChartConfig::default();
    install_clock(BrowserClock);
    install_logger(ConsoleLogger::new(config.level().unwrap_or(LogLevel::Debug)));

    crate::log_info!(LogComponent::Presentation("Initialize"), "mounting zoomable chart");
    leptos::mount_to_body(move || view! { <ZoomableChart config=config /> });
}
