//! Wildfire event records indexed by year → month
//!
//! Raw rows arrive with every column nullable. A row becomes a
//! [`FireEvent`] only when all columns are present, both timestamps decode,
//! the size is non-negative and the fire was contained no earlier than it
//! was discovered.

use crate::core_types::{Acres, Month};
use crate::error::AnalysisError;
use crate::temporal::decode_timestamp;
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Geographic position of a fire's point of origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A single wildfire, from discovery to containment.
///
/// Only built through [`FireEvent::new`]; raw data enters as [`EventRow`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FireEvent {
    start: NaiveDateTime,
    end: NaiveDateTime,
    size: Acres,
    size_class: String,
    location: Location,
}

impl FireEvent {
    /// Create an event.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Ingestion`] if `end` precedes `start`.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        size: Acres,
        size_class: impl Into<String>,
        location: Location,
    ) -> Result<Self, AnalysisError> {
        if end < start {
            return Err(AnalysisError::Ingestion(format!(
                "fire contained at {end} before discovery at {start}"
            )));
        }
        Ok(Self {
            start,
            end,
            size,
            size_class: size_class.into(),
            location,
        })
    }

    /// Discovery timestamp
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Containment timestamp
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Final burned area
    pub fn size(&self) -> Acres {
        self.size
    }

    /// Size class letter (A smallest … G largest)
    pub fn size_class(&self) -> &str {
        &self.size_class
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Calendar month of discovery
    pub fn start_month(&self) -> Month {
        // chrono months are always 1..=12
        Month::from_number(self.start.month()).unwrap_or(Month::January)
    }
}

/// One row of the wildfire table, every column nullable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EventRow {
    pub discovery_date: Option<f64>,
    pub discovery_time: Option<String>,
    pub cont_date: Option<f64>,
    pub cont_time: Option<String>,
    pub fire_size: Option<f64>,
    pub fire_size_class: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Region code the row was reported under (e.g. "CA")
    pub state: Option<String>,
}

impl EventRow {
    /// Convert the row into an event.
    ///
    /// Returns `Ok(None)` when any column is null, or when the size is
    /// negative or containment precedes discovery; those rows are skipped.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Parse`] if a date/time column cannot be decoded.
    pub fn into_event(self) -> Result<Option<FireEvent>, AnalysisError> {
        let (
            Some(discovery_date),
            Some(discovery_time),
            Some(cont_date),
            Some(cont_time),
            Some(fire_size),
            Some(size_class),
            Some(latitude),
            Some(longitude),
        ) = (
            self.discovery_date,
            self.discovery_time,
            self.cont_date,
            self.cont_time,
            self.fire_size,
            self.fire_size_class,
            self.latitude,
            self.longitude,
        )
        else {
            return Ok(None);
        };

        let start = decode_timestamp(discovery_date, &discovery_time)?;
        let end = decode_timestamp(cont_date, &cont_time)?;

        let Some(size) = Acres::try_new(fire_size) else {
            warn!(fire_size, %start, "Skipping fire with invalid size");
            return Ok(None);
        };

        match FireEvent::new(start, end, size, size_class, Location { latitude, longitude }) {
            Ok(event) => Ok(Some(event)),
            Err(e) => {
                warn!("Skipping fire: {e}");
                Ok(None)
            }
        }
    }
}

/// Immutable year → month index of fire events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCatalog {
    years: BTreeMap<i32, BTreeMap<Month, Vec<FireEvent>>>,
    event_count: usize,
}

impl EventCatalog {
    /// Build a catalog covering `years`. Every year in the range is present
    /// (with empty months) even if no fire started in it; events starting
    /// outside the range are dropped.
    pub fn from_events<I>(years: RangeInclusive<i32>, events: I) -> Self
    where
        I: IntoIterator<Item = FireEvent>,
    {
        let mut catalog = EventCatalog {
            years: years
                .clone()
                .map(|y| (y, Month::ALL.into_iter().map(|m| (m, Vec::new())).collect()))
                .collect(),
            event_count: 0,
        };

        for event in events {
            let year = event.start.year();
            if !years.contains(&year) {
                debug!(year, "Dropping fire outside the catalog window");
                continue;
            }
            catalog
                .years
                .entry(year)
                .or_default()
                .entry(event.start_month())
                .or_default()
                .push(event);
            catalog.event_count += 1;
        }

        debug!(
            years = catalog.years.len(),
            events = catalog.event_count,
            "Built event catalog"
        );
        catalog
    }

    /// Build a catalog straight from raw rows, skipping incomplete ones.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Parse`] if a row's date/time columns are malformed.
    pub fn from_rows<I>(years: RangeInclusive<i32>, rows: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = EventRow>,
    {
        let mut events = Vec::new();
        let mut skipped = 0usize;
        for row in rows {
            match row.into_event()? {
                Some(event) => events.push(event),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!(skipped, "Discarded incomplete wildfire rows");
        }
        Ok(Self::from_events(years, events))
    }

    /// Total number of events held
    pub fn len(&self) -> usize {
        self.event_count
    }

    pub fn is_empty(&self) -> bool {
        self.event_count == 0
    }

    /// Years covered, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Events that started in the given month.
    ///
    /// # Errors
    /// Returns [`AnalysisError::DataLookup`] if the year is not covered.
    pub fn period(&self, year: i32, month: Month) -> Result<&[FireEvent], AnalysisError> {
        let months = self
            .years
            .get(&year)
            .ok_or_else(|| AnalysisError::DataLookup(format!("no wildfire data for year {year}")))?;
        Ok(months.get(&month).map_or(&[][..], Vec::as_slice))
    }

    /// Every event, year → month → ingestion order
    pub fn iter(&self) -> impl Iterator<Item = &FireEvent> + '_ {
        self.years
            .values()
            .flat_map(BTreeMap::values)
            .flat_map(|events| events.iter())
    }
}
