//! Per-period fire map payload
//!
//! Collects parallel arrays of intensity, position and marker size for every
//! fire that started in one (year, month), plus the month's average high for
//! the map title. The external map renderer draws straight from this.

use crate::climate::ClimateTable;
use crate::core_types::{Extremum, Fahrenheit, Month};
use crate::error::AnalysisError;
use crate::events::EventCatalog;
use crate::intensity::{intensity, marker_size};
use serde::Serialize;

/// Map data for one month; the four vectors are index-aligned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodMap {
    pub year: i32,
    pub month: Month,
    pub intensities: Vec<f64>,
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
    pub marker_sizes: Vec<f64>,
    /// Label only
    pub average_max_temp: Fahrenheit,
}

impl PeriodMap {
    /// Number of fires on the map
    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    /// Map title
    pub fn title(&self) -> String {
        format!(
            "Wildfires in California in {}, {}, Average Max.Temp = {:.2}",
            self.month, self.year, *self.average_max_temp
        )
    }
}

/// Build the map payload for `(year, month)`.
///
/// # Errors
/// Returns [`AnalysisError::DataLookup`] if the year is not in the event
/// catalog or the month is not in the climate table.
pub fn aggregate_period(
    climate: &ClimateTable,
    events: &EventCatalog,
    year: i32,
    month: Month,
) -> Result<PeriodMap, AnalysisError> {
    let fires = events.period(year, month)?;
    let average_max_temp = climate.monthly_average(year, month, Extremum::Max)?;

    let mut map = PeriodMap {
        year,
        month,
        intensities: Vec::with_capacity(fires.len()),
        latitudes: Vec::with_capacity(fires.len()),
        longitudes: Vec::with_capacity(fires.len()),
        marker_sizes: Vec::with_capacity(fires.len()),
        average_max_temp,
    };
    for fire in fires {
        let value = intensity(fire);
        let location = fire.location();
        map.intensities.push(value);
        map.latitudes.push(location.latitude);
        map.longitudes.push(location.longitude);
        map.marker_sizes.push(marker_size(value));
    }
    Ok(map)
}
