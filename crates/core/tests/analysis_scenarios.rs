//! End-to-end analytics over small hand-built datasets
//!
//! The prediction dataset is built so both regressions are exact lines,
//! which makes the extrapolated intensity known in closed form.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use chrono::{NaiveDate, NaiveDateTime};
use wildfire_climate_core::intensity::{intensity, temperature_intensity_points};
use wildfire_climate_core::{
    Acres, AnalysisError, AnalysisSession, ClimateTable, EventCatalog, Extremum, Fahrenheit,
    FireEvent, Location, Month, Observation, Point, RegressionModel,
};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn fire(start: NaiveDateTime, end: NaiveDateTime, size: f64) -> FireEvent {
    FireEvent::new(
        start,
        end,
        Acres::new(size),
        "C",
        Location {
            latitude: 36.7,
            longitude: -119.7,
        },
    )
    .unwrap()
}

fn observation(year: i32, month: Month, day: u32, max: f64, min: f64) -> Observation {
    Observation {
        year,
        month,
        day,
        max_temp: Fahrenheit::new(max),
        min_temp: Fahrenheit::new(min),
    }
}

/// Daily high on January `day` of `year`: yearly mean is 60 + 2(year − 2008),
/// individual days spread ±10 around it. Lows are always 20 below.
fn high(year: i32, day: u32) -> f64 {
    60.0 + 2.0 * f64::from(year - 2008) + (f64::from(day) - 2.0) * 10.0
}

/// Five years, three January days each, one fire per recorded day whose
/// `intensity^0.1` is exactly `high / 10`.
fn linear_session() -> AnalysisSession {
    let mut observations = Vec::new();
    let mut fires = Vec::new();
    for year in 2008..=2012 {
        for day in 1..=3 {
            let max = high(year, day);
            observations.push(observation(year, Month::January, day, max, max - 20.0));
            fires.push(fire(
                midnight(year, 1, day),
                midnight(year, 1, day + 1),
                (max / 10.0).powi(10),
            ));
        }
        // Contained the moment it was found: zero intensity, never a point
        fires.push(fire(midnight(year, 1, 2), midnight(year, 1, 2), 900.0));
    }
    AnalysisSession::new(
        ClimateTable::from_observations(observations).unwrap(),
        EventCatalog::from_events(2008..=2012, fires),
    )
}

#[test]
fn scenario_a_zero_duration_fire_is_filtered() {
    let events = vec![
        fire(midnight(2010, 1, 1), midnight(2010, 1, 3), 10.0),
        fire(midnight(2010, 1, 5), midnight(2010, 1, 5), 5.0),
    ];
    let intensities: Vec<f64> = events.iter().map(intensity).collect();
    assert_eq!(intensities, vec![20.0, 0.0]);

    let climate = ClimateTable::from_observations(
        (1..=31).map(|d| observation(2010, Month::January, d, 60.0, 40.0)),
    )
    .unwrap();
    let catalog = EventCatalog::from_events(2010..=2010, events);
    let points = temperature_intensity_points(&climate, &catalog, Extremum::Max).unwrap();
    assert_eq!(points.len(), 1);
}

#[test]
fn scenario_b_constant_january_average() {
    let climate = ClimateTable::from_observations(
        (1..=31).map(|d| observation(2010, Month::January, d, 60.0, 35.0)),
    )
    .unwrap();
    assert_eq!(
        climate.yearly_average(2010, Extremum::Max).unwrap(),
        Fahrenheit::new(60.0)
    );
    assert_eq!(
        climate.yearly_average_points(Extremum::Max),
        vec![Point::new(2010.0, 60.0)]
    );
}

#[test]
fn scenario_c_simple_regression() {
    let model = RegressionModel::fit(&[
        Point::new(1.0, 2.0),
        Point::new(2.0, 4.0),
        Point::new(3.0, 6.0),
    ])
    .unwrap();
    assert_abs_diff_eq!(model.intercept(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(model.slope(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_year_trend_charts() {
    let session = linear_session();

    let max_chart = session.year_temperature_trend(Extremum::Max).unwrap();
    assert_eq!(max_chart.points.len(), 5);
    assert_abs_diff_eq!(max_chart.model.slope(), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max_chart.model.predict(2008.0), 60.0, epsilon = 1e-9);

    let min_chart = session.year_temperature_trend(Extremum::Min).unwrap();
    assert_abs_diff_eq!(min_chart.model.predict(2008.0), 40.0, epsilon = 1e-9);
    assert_eq!(min_chart.x_label, "year");
}

#[test]
fn test_intensity_trend_charts() {
    let session = linear_session();

    let chart = session.temperature_intensity_trend(Extremum::Max).unwrap();
    // 15 burning fires, the five instant ones are excluded
    assert_eq!(chart.points.len(), 15);
    assert_abs_diff_eq!(chart.model.slope(), 0.1, epsilon = 1e-9);
    assert_abs_diff_eq!(chart.model.intercept(), 0.0, epsilon = 1e-7);

    let chart = session.temperature_intensity_trend(Extremum::Min).unwrap();
    assert_abs_diff_eq!(chart.model.intercept(), 2.0, epsilon = 1e-7);
}

#[test]
fn test_prediction_inside_window() {
    let prediction = linear_session().predict(2010).unwrap();
    // T_max = 64, I = (64 / 10)^10, same from the min side
    let expected = 6.4f64.powi(10);
    assert_relative_eq!(prediction.intensity, expected, max_relative = 1e-9);
    assert_eq!(prediction.estimates.len(), 2);
    assert_eq!(prediction.estimates[0].extremum, Extremum::Min);
    assert_abs_diff_eq!(*prediction.estimates[0].temperature, 44.0, epsilon = 1e-9);
    assert_abs_diff_eq!(*prediction.estimates[1].temperature, 64.0, epsilon = 1e-9);
}

#[test]
fn test_prediction_extrapolates_outside_window() {
    let session = linear_session();

    let future = session.predict(2030).unwrap();
    assert_relative_eq!(future.intensity, 10.4f64.powi(10), max_relative = 1e-9);

    let past = session.predict(1990).unwrap();
    assert_relative_eq!(past.intensity, 2.4f64.powi(10), max_relative = 1e-9);
}

#[test]
fn test_prediction_is_deterministic() {
    let session = linear_session();
    let first = session.predict(2021).unwrap();
    let second = session.predict(2021).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_prediction_fails_when_fire_day_has_no_temperature() {
    let climate = ClimateTable::from_observations([
        observation(2010, Month::June, 1, 80.0, 60.0),
        observation(2011, Month::June, 1, 82.0, 61.0),
    ])
    .unwrap();
    let events = EventCatalog::from_events(
        2010..=2011,
        vec![fire(midnight(2010, 7, 4), midnight(2010, 7, 6), 50.0)],
    );
    let err = AnalysisSession::new(climate, events).predict(2012).unwrap_err();
    assert!(matches!(err, AnalysisError::DataLookup(_)), "got {err:?}");
}

#[test]
fn test_prediction_fails_on_single_year() {
    let climate = ClimateTable::from_observations(
        (1..=3).map(|d| observation(2010, Month::January, d, 60.0 + f64::from(d), 40.0)),
    )
    .unwrap();
    let events = EventCatalog::from_events(
        2010..=2010,
        vec![
            fire(midnight(2010, 1, 1), midnight(2010, 1, 2), 5.0),
            fire(midnight(2010, 1, 2), midnight(2010, 1, 3), 7.0),
        ],
    );
    let err = AnalysisSession::new(climate, events).predict(2011).unwrap_err();
    assert!(matches!(err, AnalysisError::DegenerateRegression(_)));
}

#[test]
fn test_period_map_for_session() {
    let session = linear_session();
    let map = session.period_map(2009, Month::January).unwrap();
    assert_eq!(map.len(), 4);
    assert_eq!(map.intensities[3], 0.0);
    assert!(map.marker_sizes[..3].iter().all(|&m| m > 0.0));
    assert_abs_diff_eq!(*map.average_max_temp, 62.0, epsilon = 1e-9);

    assert!(matches!(
        session.period_map(2009, Month::February),
        Err(AnalysisError::DataLookup(_))
    ));
}
