//! Which daily temperature extreme an analysis concerns

use crate::core_types::units::Fahrenheit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One day's high and low readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperature {
    /// Daily high
    pub max: Fahrenheit,
    /// Daily low
    pub min: Fahrenheit,
}

impl DailyTemperature {
    /// Create a reading pair. `max >= min` is expected but not enforced.
    pub fn new(max: Fahrenheit, min: Fahrenheit) -> Self {
        Self { max, min }
    }
}

/// Daily maximum or daily minimum temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    /// Order in which the prediction pipeline visits the two kinds
    pub const ALL: [Extremum; 2] = [Extremum::Min, Extremum::Max];

    /// Pick this extremum's reading out of a day's pair
    #[inline]
    #[must_use]
    pub fn select(self, day: &DailyTemperature) -> Fahrenheit {
        match self {
            Extremum::Max => day.max,
            Extremum::Min => day.min,
        }
    }

    /// Lowercase label used in chart titles ("max" / "min")
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Extremum::Max => "max",
            Extremum::Min => "min",
        }
    }
}

impl fmt::Display for Extremum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_picks_matching_reading() {
        let day = DailyTemperature::new(Fahrenheit::new(88.0), Fahrenheit::new(61.0));
        assert_eq!(Extremum::Max.select(&day), Fahrenheit::new(88.0));
        assert_eq!(Extremum::Min.select(&day), Fahrenheit::new(61.0));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Extremum::Max.to_string(), "max");
        assert_eq!(Extremum::Min.label(), "min");
    }
}
