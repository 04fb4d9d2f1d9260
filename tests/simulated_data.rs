use zoom_chart_wasm::domain::errors::AppError;
use zoom_chart_wasm::domain::time_series::{SeriesSource, Timestamp};
use zoom_chart_wasm::infrastructure::data_source::{SimulatedSource, SimulationConfig};

#[test]
fn default_day_has_145_samples() {
    let source = SimulatedSource::from_config(&SimulationConfig::default()).unwrap();
    let series = source.load().unwrap();
    assert_eq!(series.len(), 145);
    assert_eq!(series.first().unwrap().timestamp, Timestamp::from(1_704_067_200_000));
    assert_eq!(series.last().unwrap().timestamp, Timestamp::from(1_704_153_600_000));
}

#[test]
fn values_are_positive_whole_counts() {
    let source = SimulatedSource::from_config(&SimulationConfig::default()).unwrap();
    for point in source.generate() {
        assert!(point.value >= 1.0, "{:?}", point);
        assert_eq!(point.value.fract(), 0.0, "{:?}", point);
    }
}

#[test]
fn generation_is_deterministic() {
    let source = SimulatedSource::from_config(&SimulationConfig::default()).unwrap();
    assert_eq!(source.generate(), source.generate());
}

#[test]
fn reversed_bounds_are_rejected() {
    let config = SimulationConfig {
        start: "2024-01-02T00:00:00Z".to_string(),
        end: "2024-01-01T00:00:00Z".to_string(),
        ..SimulationConfig::default()
    };
    assert!(matches!(
        SimulatedSource::from_config(&config),
        Err(AppError::Configuration(_))
    ));
}

#[test]
fn unparsable_bound_is_a_validation_error() {
    let config = SimulationConfig { start: "soon".to_string(), ..SimulationConfig::default() };
    assert!(matches!(
        SimulatedSource::from_config(&config),
        Err(AppError::Validation(_))
    ));
}
