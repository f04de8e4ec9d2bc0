//! Wildfire intensity and the temperature → intensity point sets
//!
//! intensity = size (acres) × duration (fractional days)
//!
//! Point sets regress against `intensity^0.1` to tame the heavy tail of a
//! few very large, very long fires. Zero-intensity fires are filtered out
//! before the transform, so every transformed value is the root of a
//! strictly positive number and raising it back to the 10th power recovers
//! an intensity.

use crate::climate::ClimateTable;
use crate::core_types::Extremum;
use crate::error::AnalysisError;
use crate::events::{EventCatalog, FireEvent};
use crate::regression::Point;
use tracing::debug;

/// Exponent of the forward power transform applied to intensity
pub const TRANSFORM_EXPONENT: f64 = 0.1;

/// Exponent that undoes [`TRANSFORM_EXPONENT`]
pub const INVERSE_TRANSFORM_EXPONENT: i32 = 10;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Time from discovery to containment, in fractional days
pub fn duration_days(event: &FireEvent) -> f64 {
    (event.end() - event.start()).num_seconds() as f64 / SECONDS_PER_DAY
}

/// `size × duration` for one fire
pub fn intensity(event: &FireEvent) -> f64 {
    *event.size() * duration_days(event)
}

/// `intensity^0.1`
#[inline]
pub fn transform(intensity: f64) -> f64 {
    intensity.powf(TRANSFORM_EXPONENT)
}

/// `value^10`, the inverse of [`transform`]
#[inline]
pub fn inverse_transform(value: f64) -> f64 {
    value.powi(INVERSE_TRANSFORM_EXPONENT)
}

/// Map marker scale: `(intensity × 1000)^0.1`, strictly increasing in intensity
#[inline]
pub fn marker_size(intensity: f64) -> f64 {
    (intensity * 1000.0).powf(TRANSFORM_EXPONENT)
}

/// Point set {(start-day extremum temperature, intensity^0.1)} over every
/// fire with positive intensity, in catalog order.
///
/// # Errors
/// Returns [`AnalysisError::DataLookup`] if a fire's start day is missing
/// from the climate table.
pub fn temperature_intensity_points(
    climate: &ClimateTable,
    events: &EventCatalog,
    extremum: Extremum,
) -> Result<Vec<Point>, AnalysisError> {
    let mut points = Vec::with_capacity(events.len());
    for event in events.iter() {
        let value = intensity(event);
        if value <= 0.0 {
            continue;
        }
        let day = climate.lookup_date(event.start().date())?;
        points.push(Point::new(*extremum.select(&day), transform(value)));
    }
    debug!(
        extremum = %extremum,
        points = points.len(),
        excluded = events.len() - points.len(),
        "Built temperature/intensity point set"
    );
    Ok(points)
}
