//! Session configuration
//!
//! Read from a JSON file; every field has a default so an empty object `{}`
//! (or no file at all) describes the standard California 2007–2015 study.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Where the datasets live and which window/region to analyse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// First year of the study window (inclusive)
    pub begin_year: i32,
    /// Last year of the study window (inclusive)
    pub end_year: i32,
    /// Region code fire records are filtered by
    pub region: String,
    /// JSON array of daily observations
    pub climate_path: PathBuf,
    /// JSON array of wildfire rows
    pub events_path: PathBuf,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            begin_year: 2007,
            end_year: 2015,
            region: "CA".to_string(),
            climate_path: PathBuf::from("data/climate.json"),
            events_path: PathBuf::from("data/wildfires.json"),
        }
    }
}

/// Command-line replacements for individual [`AnalysisConfig`] fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub begin_year: Option<i32>,
    pub end_year: Option<i32>,
    pub climate_path: Option<PathBuf>,
    pub events_path: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Load `path` (or start from defaults), apply `overrides` and validate
    /// the result.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Config`] if the file cannot be loaded or the
    /// overridden configuration is invalid.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, AnalysisError> {
        let base = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        base.with_overrides(overrides)
    }

    /// Replace every field `overrides` sets, then validate.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Config`] if the result fails
    /// [`AnalysisConfig::validate`].
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, AnalysisError> {
        if let Some(year) = overrides.begin_year {
            self.begin_year = year;
        }
        if let Some(year) = overrides.end_year {
            self.end_year = year;
        }
        if let Some(path) = overrides.climate_path {
            self.climate_path = path;
        }
        if let Some(path) = overrides.events_path {
            self.events_path = path;
        }
        self.validate()?;
        Ok(self)
    }

    /// Load configuration from a JSON file
    ///
    /// # Errors
    /// Returns [`AnalysisError::Config`] if the file cannot be read, parsed,
    /// or fails [`AnalysisConfig::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| AnalysisError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| AnalysisError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the window and region are usable
    ///
    /// # Errors
    /// Returns [`AnalysisError::Config`] if `begin_year > end_year` or the
    /// region code is empty.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.begin_year > self.end_year {
            return Err(AnalysisError::Config(format!(
                "begin_year {} is after end_year {}",
                self.begin_year, self.end_year
            )));
        }
        if self.region.trim().is_empty() {
            return Err(AnalysisError::Config("region must not be empty".into()));
        }
        Ok(())
    }

    /// The study window as an inclusive range
    pub fn years(&self) -> RangeInclusive<i32> {
        self.begin_year..=self.end_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.years(), 2007..=2015);
        assert_eq!(config.region, "CA");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"end_year": 2012}"#).unwrap();
        assert_eq!(config.begin_year, 2007);
        assert_eq!(config.end_year, 2012);
        assert_eq!(config.events_path, PathBuf::from("data/wildfires.json"));
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let config = AnalysisConfig {
            begin_year: 2015,
            end_year: 2007,
            ..AnalysisConfig::default()
        };
        assert!(matches!(config.validate(), Err(AnalysisError::Config(_))));

        let config = AnalysisConfig {
            region: "  ".into(),
            ..AnalysisConfig::default()
        };
        assert!(matches!(config.validate(), Err(AnalysisError::Config(_))));
    }

    #[test]
    fn test_overrides_replace_only_set_fields() {
        let config = AnalysisConfig::default()
            .with_overrides(ConfigOverrides {
                end_year: Some(2011),
                events_path: Some(PathBuf::from("fires.json")),
                ..ConfigOverrides::default()
            })
            .unwrap();
        assert_eq!(config.years(), 2007..=2011);
        assert_eq!(config.events_path, PathBuf::from("fires.json"));
        assert_eq!(config.climate_path, PathBuf::from("data/climate.json"));

        let unchanged = AnalysisConfig::default()
            .with_overrides(ConfigOverrides::default())
            .unwrap();
        assert_eq!(unchanged, AnalysisConfig::default());
    }

    #[test]
    fn test_overrides_are_validated() {
        let err = AnalysisConfig::resolve(
            None,
            ConfigOverrides {
                begin_year: Some(2016),
                ..ConfigOverrides::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_load_and_missing_file() {
        let path = std::env::temp_dir().join("wildfire_climate_config_test.json");
        fs::write(&path, r#"{"begin_year": 2009, "region": "OR"}"#).unwrap();

        let config = AnalysisConfig::load(&path).unwrap();
        assert_eq!(config.years(), 2009..=2015);
        assert_eq!(config.region, "OR");

        let _ = fs::remove_file(&path);
        assert!(matches!(
            AnalysisConfig::load(&path),
            Err(AnalysisError::Config(_))
        ));
    }
}
