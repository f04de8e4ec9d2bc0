//! Wildfire / Temperature Correlation Core Library
//!
//! Analytics for studying how daily temperature extremes relate to wildfire
//! behaviour in California. Fire records and station temperatures are loaded
//! once into an [`AnalysisSession`]; every query after that is a pure
//! function of the two tables.
//!
//! ## Pipeline
//!
//! - Decode the fire database's day-count + `HHMM` columns into timestamps
//! - Join each fire to the temperatures of its discovery day
//! - Derive intensity = size (acres) × duration (days)
//! - Fit ordinary-least-squares lines over derived point sets
//! - Chain year → temperature and temperature → intensity fits into a
//!   prediction for any year
//! - Build per-month map payloads for an external renderer

// Core types and utilities
pub mod core_types;
pub mod error;

// Data model
pub mod climate;
pub mod events;
pub mod temporal;

// Analytics
pub mod chart;
pub mod intensity;
pub mod prediction;
pub mod regression;
pub mod spatial;

// Session, ingestion and the analyst's surface
pub mod config;
pub mod ingest;
pub mod menu;
pub mod session;

// Re-export core types
pub use core_types::{Acres, DailyTemperature, Extremum, Fahrenheit, Month};
pub use error::AnalysisError;

// Re-export data model
pub use climate::{ClimateTable, Observation};
pub use events::{EventCatalog, EventRow, FireEvent, Location};

// Re-export analytics
pub use chart::TrendChart;
pub use prediction::{ExtremumEstimate, Prediction};
pub use regression::{Point, RegressionModel};
pub use spatial::PeriodMap;

// Re-export session types
pub use config::{AnalysisConfig, ConfigOverrides};
pub use ingest::{ClimateSource, EventSource, JsonClimateFile, JsonEventFile};
pub use menu::MenuOption;
pub use session::AnalysisSession;
