use crate::domain::errors::{AppResult, ValidationError};
use crate::domain::logging::LogComponent;
use crate::domain::time_series::{DataPoint, Series, SeriesSource, Timestamp};
use crate::log_debug;
use crate::time_utils::parse_timestamp;
use serde::Deserialize;

/// Timestamp as sent by upstream: epoch millis or an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(i64),
    Iso(String),
}

impl RawTimestamp {
    pub fn resolve(&self) -> Result<Timestamp, ValidationError> {
        match self {
            RawTimestamp::Millis(ms) => Ok(Timestamp::from(*ms)),
            RawTimestamp::Iso(raw) => parse_timestamp(raw),
        }
    }
}

/// One upstream record, `{ "date": ..., "events": ... }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "timestamp")]
    pub date: RawTimestamp,
    #[serde(alias = "value")]
    pub events: f64,
}

/// Series loaded from a JSON array of records. Input order does not matter.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonSource {
    payload: String,
}

impl JsonSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }
}

impl SeriesSource for JsonSource {
    fn load(&self) -> AppResult<Series> {
        parse_series_json(&self.payload)
    }
}

pub fn parse_series_json(payload: &str) -> AppResult<Series> {
    let records: Vec<RawRecord> = serde_json::from_str(payload)?;
    let points = records
        .iter()
        .map(|record| Ok(DataPoint::new(record.date.resolve()?, record.events)))
        .collect::<Result<Vec<_>, ValidationError>>()?;
    let series = Series::from_unsorted(points)?;
    log_debug!(
        LogComponent::Infrastructure("JsonSource"),
        "parsed {} records",
        series.len()
    );
    Ok(series)
}
