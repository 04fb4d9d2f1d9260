use quickcheck_macros::quickcheck;
use zoom_chart_wasm::domain::chart::{ChartEvent, ZOOM_FACTOR, ZoomController, ZoomDirection, zoom_window};
use zoom_chart_wasm::domain::time_series::{DataPoint, Series, TimeSeriesStore, Timestamp, Window};

fn series_from(raw: Vec<(i16, u16)>) -> Series {
    let points = raw
        .into_iter()
        .map(|(t, v)| DataPoint::from((t as i64, v as f64)))
        .collect();
    Series::from_unsorted(points).unwrap()
}

#[quickcheck]
fn visible_is_filter_or_head(raw: Vec<(i16, u16)>, a: i16, b: i16) -> bool {
    let series = series_from(raw);
    let (start, end) = (a.min(b) as i64, a.max(b) as i64);
    let mut store = TimeSeriesStore::new(series.clone());
    store.set_window(Timestamp::from(start), Timestamp::from(end));

    let filtered: Vec<DataPoint> = series
        .points()
        .iter()
        .copied()
        .filter(|p| (start..=end).contains(&p.timestamp.value()))
        .collect();
    let expected: Vec<DataPoint> = if filtered.len() >= 2 {
        filtered
    } else {
        series.points().iter().copied().take(2).collect()
    };
    store.visible_data() == expected.as_slice()
}

#[quickcheck]
fn set_window_twice_equals_once(raw: Vec<(i16, u16)>, a: i16, b: i16) -> bool {
    let series = series_from(raw);
    let (start, end) = (Timestamp::from(a.min(b) as i64), Timestamp::from(a.max(b) as i64));
    let mut once = TimeSeriesStore::new(series.clone());
    once.set_window(start, end);
    let mut twice = TimeSeriesStore::new(series);
    twice.set_window(start, end);
    twice.set_window(start, end);
    once == twice
}

#[quickcheck]
fn reset_restores_fresh_view(raw: Vec<(i16, u16)>, a: i16, b: i16) -> bool {
    let series = series_from(raw);
    let fresh = TimeSeriesStore::new(series.clone());
    let mut store = TimeSeriesStore::new(series);
    store.set_window(Timestamp::from(a as i64), Timestamp::from(b as i64));
    store.reset();
    store.visible_data() == fresh.visible_data()
}

#[quickcheck]
fn drag_window_is_sorted_endpoints(t1: i32, t2: i32) -> bool {
    let mut store = TimeSeriesStore::default();
    let mut controller = ZoomController::new();
    let (t1, t2) = (Timestamp::from(t1 as i64), Timestamp::from(t2 as i64));
    controller.handle(ChartEvent::PointerDown { timestamp: Some(t1) }, &mut store);
    controller.handle(ChartEvent::PointerMove { timestamp: Some(t2) }, &mut store);
    controller.handle(ChartEvent::PointerUp, &mut store);
    store.window() == Window::Range { start: t1.min(t2), end: t1.max(t2) } && controller.draft().is_none()
}

#[quickcheck]
fn click_leaves_window_alone(t1: i32, existing: Option<(i32, i32)>) -> bool {
    let mut store = TimeSeriesStore::default();
    if let Some((a, b)) = existing {
        store.set_window(Timestamp::from(a as i64), Timestamp::from(b as i64));
    }
    let before = store.window();
    let mut controller = ZoomController::new();
    controller.handle(ChartEvent::PointerDown { timestamp: Some(Timestamp::from(t1 as i64)) }, &mut store);
    controller.handle(ChartEvent::PointerUp, &mut store);
    store.window() == before
}

#[quickcheck]
fn zoom_in_stays_inside_current_range(a: i32, b: i32, fraction: u8) -> bool {
    let (start, end) = (a.min(b) as i64, a.max(b) as i64);
    let fraction = fraction as f64 / u8::MAX as f64;
    let (new_start, new_end) = zoom_window(
        Timestamp::from(start),
        Timestamp::from(end),
        ZoomDirection::In,
        ZOOM_FACTOR,
        fraction,
    );
    start <= new_start.value() && new_start <= new_end && new_end.value() <= end
}
