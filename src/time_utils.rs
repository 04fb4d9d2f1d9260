use crate::domain::errors::ValidationError;
use crate::domain::time_series::{DataPoint, Timestamp};
use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Time zone labels are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelZone {
    /// The viewer's zone; in the browser this is the offset `Date` reports.
    #[default]
    Local,
    Utc,
}

/// Tick label under the x axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisTick {
    pub index: usize,
    pub label: String,
}

fn format_in(timestamp: Timestamp, zone: LabelZone, pattern: &str) -> String {
    let Some(date) = DateTime::<Utc>::from_timestamp_millis(timestamp.value()) else {
        return timestamp.to_string();
    };
    match zone {
        LabelZone::Utc => date.format(pattern).to_string(),
        LabelZone::Local => date.with_timezone(&Local).format(pattern).to_string(),
    }
}

/// Format a timestamp for the x axis, choosing precision from the visible span.
///
/// - `span <= 2 days` -> `HH:MM`
/// - `span <= 90 days` -> `DD.MM`
/// - otherwise -> `MM.YYYY`
pub fn format_time_label(timestamp: Timestamp, span_ms: i64, zone: LabelZone) -> String {
    let pattern = if span_ms <= 2 * DAY_MS {
        "%H:%M"
    } else if span_ms <= 90 * DAY_MS {
        "%d.%m"
    } else {
        "%m.%Y"
    };
    format_in(timestamp, zone, pattern)
}

/// Full date and time, used for the tooltip and window bounds.
pub fn format_tooltip_label(timestamp: Timestamp, zone: LabelZone) -> String {
    match zone {
        LabelZone::Utc => format_in(timestamp, zone, "%Y-%m-%d %H:%M:%S UTC"),
        LabelZone::Local => format_in(timestamp, zone, "%Y-%m-%d %H:%M:%S"),
    }
}

/// Whole number with thousands separators, e.g. `12,345`.
pub fn format_total(total: f64) -> String {
    let rounded = total.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Parse an RFC 3339 / ISO-8601 date-time into epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, ValidationError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|date| Timestamp::from(date.timestamp_millis()))
        .map_err(|_| ValidationError::InvalidTimestamp(raw.to_string()))
}

/// Evenly thinned tick labels for the visible points, at most `max_ticks`.
pub fn axis_ticks(visible: &[DataPoint], max_ticks: usize, zone: LabelZone) -> Vec<AxisTick> {
    let (Some(first), Some(last)) = (visible.first(), visible.last()) else {
        return Vec::new();
    };
    if max_ticks == 0 {
        return Vec::new();
    }
    let span = last.timestamp.value() - first.timestamp.value();
    let step = visible.len().div_ceil(max_ticks).max(1);
    visible
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(index, point)| AxisTick {
            index,
            label: format_time_label(point.timestamp, span, zone),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_precision_follows_span() {
        let ts = Timestamp::from(0);
        assert_eq!(format_time_label(ts, DAY_MS, LabelZone::Utc), "00:00");
        assert_eq!(format_time_label(ts, 10 * DAY_MS, LabelZone::Utc), "01.01");
        assert_eq!(format_time_label(ts, 365 * DAY_MS, LabelZone::Utc), "01.1970");
    }

    #[test]
    fn total_is_grouped() {
        assert_eq!(format_total(0.0), "0");
        assert_eq!(format_total(999.0), "999");
        assert_eq!(format_total(1000.0), "1,000");
        assert_eq!(format_total(1234567.4), "1,234,567");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(
            parse_timestamp("yesterday"),
            Err(ValidationError::InvalidTimestamp("yesterday".to_string()))
        );
    }
}
