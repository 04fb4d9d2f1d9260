use crate::application::config::ChartConfig;
use crate::domain::{
    chart::{ChartEvent, InteractionOutcome, PlotArea, ZoomController},
    errors::AppResult,
    logging::LogComponent,
    time_series::{DataPoint, Series, SeriesSource, TimeSeriesStore, Timestamp, Window},
};
use crate::log_info;
use crate::time_utils::{AxisTick, axis_ticks};

/// Everything the rendering layer needs after a state change.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSnapshot {
    pub points: Vec<DataPoint>,
    pub total: f64,
    pub window: Window,
    pub bounds: Option<(Timestamp, Timestamp)>,
    pub can_reset: bool,
    /// Range being dragged, for the reference-area overlay.
    pub selection: Option<(Timestamp, Timestamp)>,
    pub ticks: Vec<AxisTick>,
}

impl ChartSnapshot {
    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }
}

/// One mounted chart: the store, its controller and their settings.
#[derive(Debug, Clone)]
pub struct ChartSession {
    store: TimeSeriesStore,
    controller: ZoomController,
    config: ChartConfig,
}

impl ChartSession {
    pub fn new(config: ChartConfig) -> Self {
        let controller = ZoomController::with_settings(config.zoom_factor, config.wheel_settle());
        Self {
            store: TimeSeriesStore::default(),
            controller,
            config,
        }
    }

    pub fn with_series(config: ChartConfig, series: Series) -> Self {
        let mut session = Self::new(config);
        session.store.set_series(series);
        session
    }

    /// Pull a fresh series from `source`. On error the current data stays.
    pub fn load(&mut self, source: &dyn SeriesSource) -> AppResult<()> {
        let series = source.load()?;
        log_info!(
            LogComponent::Application("ChartSession"),
            "loaded series with {} points",
            series.len()
        );
        self.store.set_series(series);
        Ok(())
    }

    pub fn dispatch(&mut self, event: ChartEvent) -> InteractionOutcome {
        self.controller.handle(event, &mut self.store)
    }

    /// Whether the host must push a snapshot itself after `outcome`.
    ///
    /// Window changes normally reach the screen through the host's
    /// window-driven effect, which stays silent while a wheel zoom settles.
    /// Wheel steps, changes made during that pause and draft-only updates
    /// are published directly.
    pub fn publish_directly(&self, outcome: &InteractionOutcome) -> bool {
        !outcome.window_changed || outcome.settle_after.is_some() || self.controller.is_settling()
    }

    pub fn store(&self) -> &TimeSeriesStore {
        &self.store
    }

    pub fn controller(&self) -> &ZoomController {
        &self.controller
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn plot_area(&self) -> PlotArea {
        PlotArea::from_canvas(
            self.config.width as f64,
            self.config.height as f64,
            self.config.margins,
            self.config.axis_height,
        )
    }

    /// Active label at canvas x, resolved against what is currently drawn.
    pub fn timestamp_at(&self, x: f64) -> Option<Timestamp> {
        self.plot_area().timestamp_at(x, self.store.visible_data())
    }

    pub fn snapshot(&self) -> ChartSnapshot {
        let visible = self.store.visible_data();
        ChartSnapshot {
            points: visible.to_vec(),
            total: self.store.total_of_visible(),
            window: self.store.window(),
            bounds: self.store.window_bounds(),
            can_reset: self.controller.can_reset(&self.store),
            selection: self.controller.selection(),
            ticks: axis_ticks(visible, self.config.max_ticks, self.config.label_zone),
        }
    }
}
