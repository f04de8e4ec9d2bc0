//! Daily temperature observations indexed by year → month → day
//!
//! The table is built once from ingested observations and only read
//! afterwards. Lookups never interpolate: a day that was not ingested is a
//! [`AnalysisError::DataLookup`].

use crate::core_types::{DailyTemperature, Extremum, Fahrenheit, Month};
use crate::error::AnalysisError;
use crate::regression::Point;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One calendar day's high and low, as delivered by the climate source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub month: Month,
    /// Day of month, 1-based
    pub day: u32,
    pub max_temp: Fahrenheit,
    pub min_temp: Fahrenheit,
}

impl Observation {
    /// Calendar date, or `None` if (year, month, day) does not exist
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number(), self.day)
    }

    /// The day's reading pair
    pub fn readings(&self) -> DailyTemperature {
        DailyTemperature::new(self.max_temp, self.min_temp)
    }
}

type MonthDays = BTreeMap<u32, DailyTemperature>;

/// Immutable year → month → day temperature index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateTable {
    years: BTreeMap<i32, BTreeMap<Month, MonthDays>>,
    observation_count: usize,
}

impl ClimateTable {
    /// Build a table from observations in any order.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Ingestion`] for an impossible calendar date
    /// (e.g. February 30) or a second observation for an already-seen day.
    pub fn from_observations<I>(observations: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut table = ClimateTable::default();
        for obs in observations {
            if obs.date().is_none() {
                return Err(AnalysisError::Ingestion(format!(
                    "{} {} {} is not a calendar date",
                    obs.month, obs.day, obs.year
                )));
            }
            let days = table
                .years
                .entry(obs.year)
                .or_default()
                .entry(obs.month)
                .or_default();
            if days.insert(obs.day, obs.readings()).is_some() {
                return Err(AnalysisError::Ingestion(format!(
                    "duplicate observation for {} {} {}",
                    obs.month, obs.day, obs.year
                )));
            }
            table.observation_count += 1;
        }
        debug!(
            years = table.years.len(),
            observations = table.observation_count,
            "Built climate table"
        );
        Ok(table)
    }

    /// Number of daily observations held
    pub fn len(&self) -> usize {
        self.observation_count
    }

    pub fn is_empty(&self) -> bool {
        self.observation_count == 0
    }

    /// Years present, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    fn month_days(&self, year: i32, month: Month) -> Result<&MonthDays, AnalysisError> {
        self.years
            .get(&year)
            .ok_or_else(|| AnalysisError::DataLookup(format!("no temperatures for year {year}")))?
            .get(&month)
            .ok_or_else(|| {
                AnalysisError::DataLookup(format!("no temperatures for {month} {year}"))
            })
    }

    /// The (max, min) pair recorded for one day.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DataLookup`] if the year, month or day is absent.
    pub fn lookup(
        &self,
        year: i32,
        month: Month,
        day: u32,
    ) -> Result<DailyTemperature, AnalysisError> {
        self.month_days(year, month)?
            .get(&day)
            .copied()
            .ok_or_else(|| {
                AnalysisError::DataLookup(format!("no temperatures for {month} {day} {year}"))
            })
    }

    /// [`ClimateTable::lookup`] keyed by a calendar date.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DataLookup`] if the date is absent.
    pub fn lookup_date(&self, date: NaiveDate) -> Result<DailyTemperature, AnalysisError> {
        let month = Month::from_number(date.month())
            .ok_or_else(|| AnalysisError::DataLookup(format!("bad month in {date}")))?;
        self.lookup(date.year(), month, date.day())
    }

    /// Mean of one extremum over every recorded day of a year.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DataLookup`] if the year is absent.
    pub fn yearly_average(
        &self,
        year: i32,
        extremum: Extremum,
    ) -> Result<Fahrenheit, AnalysisError> {
        let months = self
            .years
            .get(&year)
            .ok_or_else(|| AnalysisError::DataLookup(format!("no temperatures for year {year}")))?;
        mean(
            months
                .values()
                .flat_map(BTreeMap::values)
                .map(|day| *extremum.select(day)),
        )
        .map(Fahrenheit::new)
        .ok_or_else(|| AnalysisError::DataLookup(format!("no temperatures for year {year}")))
    }

    /// Mean of one extremum over a single month.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DataLookup`] if the year or month is absent.
    pub fn monthly_average(
        &self,
        year: i32,
        month: Month,
        extremum: Extremum,
    ) -> Result<Fahrenheit, AnalysisError> {
        let days = self.month_days(year, month)?;
        mean(days.values().map(|day| *extremum.select(day)))
            .map(Fahrenheit::new)
            .ok_or_else(|| AnalysisError::DataLookup(format!("no temperatures for {month} {year}")))
    }

    /// Point set {(year, yearly average)} over every year in the table
    pub fn yearly_average_points(&self, extremum: Extremum) -> Vec<Point> {
        self.years
            .keys()
            .filter_map(|&year| {
                self.yearly_average(year, extremum)
                    .ok()
                    .map(|avg| Point::new(f64::from(year), *avg))
            })
            .collect()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}
