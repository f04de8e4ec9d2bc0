//! Ordinary least squares over a 2-D point set
//!
//! Closed-form simple linear regression, `y = a + b·x`:
//!
//! ```text
//! x̄ = mean(x), ȳ = mean(y)
//! b = Σ(xᵢ − x̄)(yᵢ − ȳ) / Σ(xᵢ − x̄)²
//! a = ȳ − b·x̄
//! ```
//!
//! Two passes over the points, no iterative solver. A fit that would divide
//! by zero (fewer than two points, or every x identical) is an error rather
//! than a NaN model.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single (x, y) pair of a regression point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Fitted line `y = intercept + slope·x`; only [`RegressionModel::fit`] makes one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionModel {
    intercept: f64,
    slope: f64,
}

impl RegressionModel {
    /// Least-squares fit over `points`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DegenerateRegression`] when there are fewer
    /// than two points, all x-values are identical, or the inputs are not
    /// finite enough to produce a finite line.
    pub fn fit(points: &[Point]) -> Result<Self, AnalysisError> {
        let n = points.len();
        if n < 2 {
            return Err(AnalysisError::DegenerateRegression(format!(
                "need at least 2 points, got {n}"
            )));
        }

        let count = n as f64;
        let x_mean = points.iter().map(|p| p.x).sum::<f64>() / count;
        let y_mean = points.iter().map(|p| p.y).sum::<f64>() / count;

        let (numerator, denominator) = points.iter().fold((0.0, 0.0), |(num, den), p| {
            let dx = p.x - x_mean;
            (num + dx * (p.y - y_mean), den + dx * dx)
        });

        if denominator == 0.0 {
            return Err(AnalysisError::DegenerateRegression(format!(
                "all {n} points share x = {x_mean}"
            )));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(AnalysisError::DegenerateRegression(format!(
                "fit over {n} points is not finite"
            )));
        }

        debug!(points = n, intercept, slope, "Fitted regression line");
        Ok(Self { intercept, slope })
    }

    /// `a` in `y = a + b·x`
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// `b` in `y = a + b·x`
    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Evaluate the line at `x`. Any `x` is accepted, including values
    /// outside the fitted range.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}
