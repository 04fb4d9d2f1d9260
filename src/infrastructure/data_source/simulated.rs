use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::domain::time_series::{DataPoint, Series, SeriesSource, Timestamp};
use crate::log_info;
use crate::time_utils::parse_timestamp;
use serde::Deserialize;

/// Parameters of the synthetic event-count series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub start: String,
    pub end: String,
    pub step_ms: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start: "2024-01-01T00:00:00Z".to_string(),
            end: "2024-01-02T00:00:00Z".to_string(),
            step_ms: 10 * 60 * 1000,
        }
    }
}

/// Deterministic pseudo-random counter series.
///
/// The same bounds always produce the same points: every sample is seeded by
/// its own timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSource {
    start: Timestamp,
    end: Timestamp,
    step_ms: i64,
}

impl SimulatedSource {
    pub fn new(start: Timestamp, end: Timestamp, step_ms: i64) -> AppResult<Self> {
        if step_ms <= 0 {
            return Err(AppError::Configuration(format!(
                "simulation step must be positive, got {}",
                step_ms
            )));
        }
        if end < start {
            return Err(AppError::Configuration(format!(
                "simulation ends at {} before it starts at {}",
                end, start
            )));
        }
        Ok(Self { start, end, step_ms })
    }

    pub fn from_config(config: &SimulationConfig) -> AppResult<Self> {
        let start = parse_timestamp(&config.start)?;
        let end = parse_timestamp(&config.end)?;
        Self::new(start, end, config.step_ms)
    }

    pub fn generate(&self) -> Vec<DataPoint> {
        let start = self.start.as_f64();
        let span = self.end.as_f64() - start;
        let mut base = 50.0_f64;
        let mut points = Vec::new();
        let mut t = self.start.value();
        while t <= self.end.value() {
            let seed = t as f64;
            let progress = if span > 0.0 { (seed - start) / span } else { 0.0 };
            let spike = if seed_random(seed + 1.0) < 0.1 {
                (seed_random(seed + 2.0) - 0.5) * 50.0
            } else {
                0.0
            };
            base = ((base
                + 0.5 * progress * 100.0
                + (seed_random(seed) - 0.5) * 20.0
                + spike
                + (seed / 3_600_000.0).sin() * 10.0)
                * (1.0 + (seed_random(seed + 3.0) - 0.5) * 0.2))
                .max(1.0);
            points.push(DataPoint::new(Timestamp::from(t), base.floor().max(1.0)));
            t += self.step_ms;
        }
        points
    }
}

impl SeriesSource for SimulatedSource {
    fn load(&self) -> AppResult<Series> {
        let series = Series::new(self.generate())?;
        log_info!(
            LogComponent::Infrastructure("SimulatedSource"),
            "generated {} points from {} to {}",
            series.len(),
            self.start,
            self.end
        );
        Ok(series)
    }
}

/// Fractional part of `sin(seed) * 10000`, in `0.0..1.0`.
pub fn seed_random(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}
