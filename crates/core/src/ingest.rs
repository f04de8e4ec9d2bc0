//! Ingestion collaborators
//!
//! The analytics only ever see finished [`ClimateTable`]s and
//! [`EventCatalog`]s. Anything that can produce them for a year window
//! implements [`ClimateSource`] / [`EventSource`]. The JSON file sources here
//! read exports of the station history and of the wildfire database.

use crate::climate::{ClimateTable, Observation};
use crate::error::AnalysisError;
use crate::events::{EventCatalog, EventRow};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supplies daily temperatures for a window of years
pub trait ClimateSource {
    /// # Errors
    /// Any failure is fatal to session startup.
    fn fetch_climate(&self, begin_year: i32, end_year: i32) -> Result<ClimateTable, AnalysisError>;
}

/// Supplies wildfire events for a window of years
pub trait EventSource {
    /// # Errors
    /// Any failure is fatal to session startup.
    fn fetch_events(&self, begin_year: i32, end_year: i32) -> Result<EventCatalog, AnalysisError>;
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AnalysisError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AnalysisError::Ingestion(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&contents)
        .map_err(|e| AnalysisError::Ingestion(format!("{}: {e}", path.display())))
}

/// Daily observations stored as a JSON array of
/// `{"year", "month", "day", "max_temp", "min_temp"}` objects
#[derive(Debug, Clone)]
pub struct JsonClimateFile {
    path: PathBuf,
}

impl JsonClimateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClimateSource for JsonClimateFile {
    fn fetch_climate(&self, begin_year: i32, end_year: i32) -> Result<ClimateTable, AnalysisError> {
        let observations: Vec<Observation> = read_json_array(&self.path)?;
        let total = observations.len();
        let table = ClimateTable::from_observations(
            observations
                .into_iter()
                .filter(|o| (begin_year..=end_year).contains(&o.year)),
        )?;
        info!(
            path = %self.path.display(),
            kept = table.len(),
            total,
            "Loaded temperature observations"
        );
        Ok(table)
    }
}

/// Wildfire rows stored as a JSON array using the database column names
/// (`DISCOVERY_DATE`, `DISCOVERY_TIME`, `CONT_DATE`, ...)
#[derive(Debug, Clone)]
pub struct JsonEventFile {
    path: PathBuf,
    region: String,
}

impl JsonEventFile {
    /// Rows are kept only if their `STATE` equals `region`
    pub fn new(path: impl Into<PathBuf>, region: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            region: region.into(),
        }
    }
}

impl EventSource for JsonEventFile {
    fn fetch_events(&self, begin_year: i32, end_year: i32) -> Result<EventCatalog, AnalysisError> {
        let rows: Vec<EventRow> = read_json_array(&self.path)?;
        let total = rows.len();
        let in_region: Vec<EventRow> = rows
            .into_iter()
            .filter(|row| row.state.as_deref() == Some(self.region.as_str()))
            .collect();
        debug!(region = %self.region, rows = in_region.len(), "Filtered wildfire rows by region");

        let catalog = EventCatalog::from_rows(begin_year..=end_year, in_region)?;
        info!(
            path = %self.path.display(),
            kept = catalog.len(),
            total,
            "Loaded wildfire events"
        );
        Ok(catalog)
    }
}
