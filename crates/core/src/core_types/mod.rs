//! Core types and utilities

pub mod extremum;
pub mod month;
pub mod units;

pub use extremum::{DailyTemperature, Extremum};
pub use month::{Month, UnknownMonth};
pub use units::{Acres, Fahrenheit, InvalidAcres};
