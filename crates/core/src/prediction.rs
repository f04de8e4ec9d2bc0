//! Two-stage intensity extrapolation for an arbitrary year
//!
//! For each extremum kind:
//! 1. fit year → yearly average temperature and evaluate it at the
//!    requested year, giving a predicted temperature `T`;
//! 2. fit day temperature → `intensity^0.1` and evaluate it at `T`, then
//!    raise the result to the 10th power to get an intensity `I`.
//!
//! The prediction is the mean of the min and max estimates. Years outside
//! the observed window are extrapolated, never clamped.

use crate::climate::ClimateTable;
use crate::core_types::{Extremum, Fahrenheit};
use crate::error::AnalysisError;
use crate::events::EventCatalog;
use crate::intensity::{inverse_transform, temperature_intensity_points};
use crate::regression::RegressionModel;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Intermediate values of one extremum's chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtremumEstimate {
    pub extremum: Extremum,
    /// Predicted yearly average of this extremum
    pub temperature: Fahrenheit,
    /// Intensity predicted from that temperature
    pub intensity: f64,
}

/// Predicted intensity of a fire occurring in `year`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub year: i32,
    /// Mean of the per-extremum intensities, unrounded
    pub intensity: f64,
    pub estimates: Vec<ExtremumEstimate>,
}

impl Prediction {
    /// Intensity rounded to 3 decimal places for display
    pub fn rounded(&self) -> f64 {
        (self.intensity * 1000.0).round() / 1000.0
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "If wildfire appears in a day in {}, its intensity is expected to be about {} \
             where intensity = fire_size(acres) * duration(day)",
            self.year,
            self.rounded()
        )
    }
}

fn estimate(
    climate: &ClimateTable,
    events: &EventCatalog,
    extremum: Extremum,
    year: i32,
) -> Result<ExtremumEstimate, AnalysisError> {
    let year_model = RegressionModel::fit(&climate.yearly_average_points(extremum))?;
    let temperature = year_model.predict(f64::from(year));

    let intensity_model =
        RegressionModel::fit(&temperature_intensity_points(climate, events, extremum)?)?;
    let intensity = inverse_transform(intensity_model.predict(temperature));

    debug!(%extremum, year, temperature, intensity, "Extremum estimate");
    Ok(ExtremumEstimate {
        extremum,
        temperature: Fahrenheit::new(temperature),
        intensity,
    })
}

/// Predict the intensity of a wildfire in `year`.
///
/// # Errors
/// Propagates [`AnalysisError::DegenerateRegression`] from either fit and
/// [`AnalysisError::DataLookup`] from the temperature join.
pub fn predict_intensity(
    climate: &ClimateTable,
    events: &EventCatalog,
    year: i32,
) -> Result<Prediction, AnalysisError> {
    let estimates = Extremum::ALL
        .into_iter()
        .map(|extremum| estimate(climate, events, extremum, year))
        .collect::<Result<Vec<_>, _>>()?;

    let intensity =
        estimates.iter().map(|e| e.intensity).sum::<f64>() / estimates.len() as f64;

    Ok(Prediction {
        year,
        intensity,
        estimates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_to_three_places() {
        let p = Prediction {
            year: 2020,
            intensity: 12.345_67,
            estimates: Vec::new(),
        };
        assert_eq!(p.rounded(), 12.346);
        assert!(p.to_string().contains("about 12.346 "));
        assert!(p.to_string().contains("in 2020,"));
    }

    #[test]
    fn test_empty_tables_are_degenerate() {
        let err = predict_intensity(&ClimateTable::default(), &EventCatalog::default(), 2010)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateRegression(_)));
    }
}
