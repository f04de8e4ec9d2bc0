//! Parsing and validation of what the analyst types at the menu
//!
//! Every failure here is an [`AnalysisError::InputValidation`]; the menu
//! reports it and prompts again.

use crate::core_types::{Extremum, Month};
use crate::error::AnalysisError;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// The six analyses offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Year → average daily temperature trend
    YearTrend(Extremum),
    /// Day temperature → fire intensity trend
    IntensityTrend(Extremum),
    /// Intensity prediction for a year
    Prediction,
    /// Fire map for one month
    PeriodMap,
}

impl MenuOption {
    /// Menu order, numbered from 1
    pub const ALL: [MenuOption; 6] = [
        MenuOption::YearTrend(Extremum::Max),
        MenuOption::YearTrend(Extremum::Min),
        MenuOption::IntensityTrend(Extremum::Max),
        MenuOption::IntensityTrend(Extremum::Min),
        MenuOption::Prediction,
        MenuOption::PeriodMap,
    ];

    /// Menu line describing the option
    pub fn description(self) -> String {
        match self {
            MenuOption::YearTrend(k) => {
                let word = if k == Extremum::Max { "maximum" } else { "minimum" };
                format!("The relationship between the year and average {word} temperature")
            }
            MenuOption::IntensityTrend(k) => {
                let word = if k == Extremum::Max { "maximum" } else { "minimum" };
                format!("The relationship between {word} temperature of a day and fire intensity")
            }
            MenuOption::Prediction => "The prediction of wildfire intensity in a year".into(),
            MenuOption::PeriodMap => "The visual map of wildfire in a certain month".into(),
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

impl FromStr for MenuOption {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                AnalysisError::InputValidation(format!("'{}' is not an option (1-6)", s.trim()))
            })
    }
}

/// Parse a year, optionally requiring it to fall in `window`.
///
/// # Errors
/// Returns [`AnalysisError::InputValidation`] for non-numeric input or a year
/// outside the window.
pub fn parse_year(input: &str, window: Option<&RangeInclusive<i32>>) -> Result<i32, AnalysisError> {
    let trimmed = input.trim();
    let year: i32 = trimmed
        .parse()
        .map_err(|_| AnalysisError::InputValidation(format!("'{trimmed}' is not a year")))?;
    match window {
        Some(range) if !range.contains(&year) => Err(AnalysisError::InputValidation(format!(
            "{year} is outside {} - {}",
            range.start(),
            range.end()
        ))),
        _ => Ok(year),
    }
}

/// Parse a full English month name.
///
/// # Errors
/// Returns [`AnalysisError::InputValidation`] for anything but the twelve names.
pub fn parse_month(input: &str) -> Result<Month, AnalysisError> {
    input
        .parse::<Month>()
        .map_err(|e| AnalysisError::InputValidation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_numbered_from_one() {
        assert_eq!("1".parse::<MenuOption>(), Ok(MenuOption::YearTrend(Extremum::Max)));
        assert_eq!(" 4\n".parse::<MenuOption>(), Ok(MenuOption::IntensityTrend(Extremum::Min)));
        assert_eq!("6".parse::<MenuOption>(), Ok(MenuOption::PeriodMap));
    }

    #[test]
    fn test_invalid_options() {
        for bad in ["0", "7", "", "five", "-1", "1.0"] {
            let err = bad.parse::<MenuOption>().unwrap_err();
            assert!(err.is_recoverable(), "{bad:?} should be an input error");
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            MenuOption::YearTrend(Extremum::Min).to_string(),
            "The relationship between the year and average minimum temperature"
        );
        assert_eq!(
            MenuOption::IntensityTrend(Extremum::Max).to_string(),
            "The relationship between maximum temperature of a day and fire intensity"
        );
    }

    #[test]
    fn test_parse_year_with_and_without_window() {
        let window = 2007..=2015;
        assert_eq!(parse_year("2010", Some(&window)), Ok(2010));
        assert_eq!(parse_year(" 2050 ", None), Ok(2050));
        assert!(matches!(
            parse_year("2050", Some(&window)),
            Err(AnalysisError::InputValidation(_))
        ));
        assert!(matches!(
            parse_year("twenty", None),
            Err(AnalysisError::InputValidation(_))
        ));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("September"), Ok(Month::September));
        assert!(matches!(
            parse_month("Sept"),
            Err(AnalysisError::InputValidation(_))
        ));
    }
}
