use crate::domain::chart::{PlotMargins, WHEEL_SETTLE, ZOOM_FACTOR};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogLevel;
use crate::infrastructure::data_source::SimulationConfig;
use crate::time_utils::LabelZone;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// Longest accepted wheel settle delay.
pub const MAX_WHEEL_SETTLE_MS: u64 = 10_000;

/// Widget settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub zoom_factor: f64,
    pub wheel_settle_ms: u64,
    pub log_level: String,
    pub width: u32,
    pub height: u32,
    pub axis_height: f64,
    pub max_ticks: usize,
    pub label_zone: LabelZone,
    pub margins: PlotMargins,
    pub simulation: SimulationConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Zoomable Chart".to_string(),
            zoom_factor: ZOOM_FACTOR,
            wheel_settle_ms: WHEEL_SETTLE.as_millis() as u64,
            log_level: "debug".to_string(),
            width: 800,
            height: 400,
            axis_height: 24.0,
            max_ticks: 8,
            label_zone: LabelZone::Local,
            margins: PlotMargins::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl ChartConfig {
    pub fn from_json(payload: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(payload)
            .map_err(|e| AppError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            return Err(AppError::Configuration(format!(
                "zoom_factor must be in (0, 1), got {}",
                self.zoom_factor
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(AppError::Configuration(format!(
                "canvas must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }
        if self.wheel_settle_ms > MAX_WHEEL_SETTLE_MS {
            return Err(AppError::Configuration(format!(
                "wheel_settle_ms must be at most {}, got {}",
                MAX_WHEEL_SETTLE_MS, self.wheel_settle_ms
            )));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> AppResult<LogLevel> {
        LogLevel::from_str(&self.log_level)
            .map_err(|_| AppError::Configuration(format!("unknown log level {:?}", self.log_level)))
    }

    pub fn wheel_settle(&self) -> Duration {
        Duration::from_millis(self.wheel_settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = ChartConfig::from_json("{}").unwrap();
        assert_eq!(config, ChartConfig::default());
        assert_eq!(config.wheel_settle(), Duration::from_millis(300));
    }

    #[test]
    fn partial_override() {
        let config =
            ChartConfig::from_json(r#"{ "zoom_factor": 0.25, "margins": { "left": 40 } }"#).unwrap();
        assert_eq!(config.zoom_factor, 0.25);
        assert_eq!(config.margins.left, 40.0);
        assert_eq!(config.margins.right, 30.0);
    }

    #[test]
    fn rejects_out_of_range_zoom() {
        let err = ChartConfig::from_json(r#"{ "zoom_factor": 1.5 }"#).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn rejects_overlong_settle_delay() {
        let err = ChartConfig::from_json(r#"{ "wheel_settle_ms": 4294967596 }"#).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
        let config = ChartConfig::from_json(r#"{ "wheel_settle_ms": 10000 }"#).unwrap();
        assert_eq!(config.wheel_settle(), Duration::from_millis(MAX_WHEEL_SETTLE_MS));
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(ChartConfig::from_json(r#"{ "log_level": "loud" }"#).is_err());
    }
}
