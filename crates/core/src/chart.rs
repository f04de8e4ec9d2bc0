//! Payloads for the external 2-D chart renderer
//!
//! A [`TrendChart`] is everything the renderer needs to draw a scatter of the
//! point set with its fitted line: titles, axis labels, points and model.

use crate::core_types::Extremum;
use crate::error::AnalysisError;
use crate::regression::{Point, RegressionModel};
use serde::Serialize;

/// Scatter plot with a fitted regression line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<Point>,
    pub model: RegressionModel,
}

impl TrendChart {
    /// Fit `points` and label the chart.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DegenerateRegression`] if the points cannot be fit.
    pub fn fit(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        points: Vec<Point>,
    ) -> Result<Self, AnalysisError> {
        let model = RegressionModel::fit(&points)?;
        Ok(Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            points,
            model,
        })
    }

    /// Year → yearly average temperature chart
    ///
    /// # Errors
    /// Returns [`AnalysisError::DegenerateRegression`] if the points cannot be fit.
    pub fn year_temperature(extremum: Extremum, points: Vec<Point>) -> Result<Self, AnalysisError> {
        Self::fit(
            format!("The relationship between the average {extremum} temperature and the year"),
            "year",
            format!("The average {extremum} temperature / F"),
            points,
        )
    }

    /// Day temperature → transformed intensity chart
    ///
    /// # Errors
    /// Returns [`AnalysisError::DegenerateRegression`] if the points cannot be fit.
    pub fn temperature_intensity(
        extremum: Extremum,
        points: Vec<Point>,
    ) -> Result<Self, AnalysisError> {
        Self::fit(
            format!(
                "The relationship between the {extremum} temperature of a day and the wildfire intensity on that day if fire happened"
            ),
            format!("The {extremum} temperature of a day / F"),
            "The 10th root of wildfire intensity if fire happened",
            points,
        )
    }

    /// The fitted line between the smallest and largest x of the point set
    pub fn line_segment(&self) -> Option<(Point, Point)> {
        let x_min = self.points.iter().map(|p| p.x).min_by(f64::total_cmp)?;
        let x_max = self.points.iter().map(|p| p.x).max_by(f64::total_cmp)?;
        Some((
            Point::new(x_min, self.model.predict(x_min)),
            Point::new(x_max, self.model.predict(x_max)),
        ))
    }
}
