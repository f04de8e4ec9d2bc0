//! The analysis session: both datasets, loaded once, read by every query

use crate::chart::TrendChart;
use crate::climate::ClimateTable;
use crate::config::AnalysisConfig;
use crate::core_types::{Extremum, Month};
use crate::error::AnalysisError;
use crate::events::EventCatalog;
use crate::ingest::{ClimateSource, EventSource, JsonClimateFile, JsonEventFile};
use crate::intensity::temperature_intensity_points;
use crate::prediction::{predict_intensity, Prediction};
use crate::spatial::{aggregate_period, PeriodMap};
use std::ops::RangeInclusive;
use tracing::info;

/// Immutable climate table and event catalog for one analyst session.
///
/// Every query is a pure function of these two tables and its arguments.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    climate: ClimateTable,
    events: EventCatalog,
}

impl AnalysisSession {
    pub fn new(climate: ClimateTable, events: EventCatalog) -> Self {
        info!(
            observations = climate.len(),
            events = events.len(),
            "Analysis session ready"
        );
        Self { climate, events }
    }

    /// Fetch both datasets for `[begin_year, end_year]`.
    ///
    /// # Errors
    /// Propagates the first ingestion failure.
    pub fn from_sources(
        climate: &dyn ClimateSource,
        events: &dyn EventSource,
        begin_year: i32,
        end_year: i32,
    ) -> Result<Self, AnalysisError> {
        let climate = climate.fetch_climate(begin_year, end_year)?;
        let events = events.fetch_events(begin_year, end_year)?;
        Ok(Self::new(climate, events))
    }

    /// Load the JSON datasets named by `config`.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Config`] for an invalid config and
    /// [`AnalysisError::Ingestion`] if either dataset fails to load.
    pub fn load(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Self::from_sources(
            &JsonClimateFile::new(&config.climate_path),
            &JsonEventFile::new(&config.events_path, &config.region),
            config.begin_year,
            config.end_year,
        )
    }

    pub fn climate(&self) -> &ClimateTable {
        &self.climate
    }

    pub fn events(&self) -> &EventCatalog {
        &self.events
    }

    /// Years the event catalog covers, or `None` when it is empty
    pub fn years(&self) -> Option<RangeInclusive<i32>> {
        let mut years = self.events.years();
        let first = years.next()?;
        Some(first..=years.last().unwrap_or(first))
    }

    /// Year → average daily `extremum` chart.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DegenerateRegression`] with fewer than two years.
    pub fn year_temperature_trend(&self, extremum: Extremum) -> Result<TrendChart, AnalysisError> {
        TrendChart::year_temperature(extremum, self.climate.yearly_average_points(extremum))
    }

    /// Day `extremum` temperature → `intensity^0.1` chart.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DataLookup`] if a fire's start day has no
    /// temperatures, [`AnalysisError::DegenerateRegression`] if the point set
    /// cannot be fit.
    pub fn temperature_intensity_trend(
        &self,
        extremum: Extremum,
    ) -> Result<TrendChart, AnalysisError> {
        let points = temperature_intensity_points(&self.climate, &self.events, extremum)?;
        TrendChart::temperature_intensity(extremum, points)
    }

    /// Predicted fire intensity in `year` (any year, extrapolated if needed).
    ///
    /// # Errors
    /// See [`predict_intensity`].
    pub fn predict(&self, year: i32) -> Result<Prediction, AnalysisError> {
        predict_intensity(&self.climate, &self.events, year)
    }

    /// Map payload for one month.
    ///
    /// # Errors
    /// See [`aggregate_period`].
    pub fn period_map(&self, year: i32, month: Month) -> Result<PeriodMap, AnalysisError> {
        aggregate_period(&self.climate, &self.events, year, month)
    }
}
