use zoom_chart_wasm::domain::time_series::{DataPoint, Timestamp};
use zoom_chart_wasm::time_utils::{
    LabelZone, axis_ticks, format_time_label, format_tooltip_label, parse_timestamp,
};

const JAN_1_2024: i64 = 1_704_067_200_000;
const DAY_MS: i64 = 86_400_000;

#[test]
fn format_time_label_utc() {
    let ts = Timestamp::from(JAN_1_2024 + 13 * 3_600_000 + 5 * 60_000);
    assert_eq!(format_time_label(ts, DAY_MS, LabelZone::Utc), "13:05");
    assert_eq!(format_time_label(ts, 2 * DAY_MS, LabelZone::Utc), "13:05");
    assert_eq!(format_time_label(ts, 2 * DAY_MS + 1, LabelZone::Utc), "01.01");
    assert_eq!(format_time_label(ts, 90 * DAY_MS, LabelZone::Utc), "01.01");
    assert_eq!(format_time_label(ts, 91 * DAY_MS, LabelZone::Utc), "01.2024");
}

#[test]
fn tooltip_label_is_full_utc() {
    assert_eq!(
        format_tooltip_label(Timestamp::from(JAN_1_2024 + 600_000), LabelZone::Utc),
        "2024-01-01 00:10:00 UTC"
    );
}

#[test]
fn parses_offsets_to_utc_millis() {
    assert_eq!(parse_timestamp("2024-01-01T00:00:00Z"), Ok(Timestamp::from(JAN_1_2024)));
    assert_eq!(
        parse_timestamp("2024-01-01T02:00:00+02:00"),
        Ok(Timestamp::from(JAN_1_2024))
    );
}

#[test]
fn day_of_ten_minute_samples() {
    let visible: Vec<DataPoint> = (0..145)
        .map(|i| DataPoint::from((JAN_1_2024 + i * 600_000, 1.0)))
        .collect();
    let labels: Vec<String> = axis_ticks(&visible, 8, LabelZone::Utc).into_iter().map(|t| t.label).collect();
    insta::assert_snapshot!(labels.join(" "), @"00:00 03:10 06:20 09:30 12:40 15:50 19:00 22:10");
}

#[test]
fn ticks_never_exceed_the_limit() {
    let visible: Vec<DataPoint> = (0..3).map(|i| DataPoint::from((i * 1000, 1.0))).collect();
    let ticks = axis_ticks(&visible, 8, LabelZone::Utc);
    assert_eq!(ticks.iter().map(|t| t.index).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert!(axis_ticks(&[], 8, LabelZone::Utc).is_empty());
    assert!(axis_ticks(&visible, 0, LabelZone::Utc).is_empty());
}

#[test]
fn local_zone_follows_the_viewer_offset() {
    use chrono::{DateTime, Local, Utc};
    let ts = Timestamp::from(JAN_1_2024 + 13 * 3_600_000 + 5 * 60_000);
    let local = DateTime::<Utc>::from_timestamp_millis(ts.value())
        .unwrap()
        .with_timezone(&Local);
    assert_eq!(format_time_label(ts, DAY_MS, LabelZone::Local), local.format("%H:%M").to_string());
    assert_eq!(
        format_tooltip_label(ts, LabelZone::Local),
        local.format("%Y-%m-%d %H:%M:%S").to_string()
    );
}

#[test]
fn zone_comes_from_config() {
    use zoom_chart_wasm::application::ChartConfig;
    assert_eq!(ChartConfig::default().label_zone, LabelZone::Local);
    let config = ChartConfig::from_json(r#"{ "label_zone": "utc" }"#).unwrap();
    assert_eq!(config.label_zone, LabelZone::Utc);
}
