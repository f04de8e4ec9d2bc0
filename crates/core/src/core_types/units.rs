//! Semantic unit types for the quantities the analysis works with
//!
//! Newtype wrappers keep temperatures and burned areas from being mixed up
//! with the plain `f64` coordinates that regression point sets use.
//!
//! # Design Philosophy
//! - Both types wrap `f64`, the precision every derived point set uses
//! - `Deref` to the raw value so arithmetic reads naturally (`*temp * 2.0`)
//! - Total ordering via `Ord` (NaN handled as greater than all values)
//! - Serde support; both serialize as the bare number
//!
//! # Usage
//! ```
//! use wildfire_climate_core::core_types::units::{Acres, Fahrenheit};
//!
//! let high = Fahrenheit::new(98.6);
//! assert!((high.to_celsius() - 37.0).abs() < 1e-9);
//!
//! let burned = Acres::new(12.5);
//! assert_eq!(*burned, 12.5);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Air temperature in degrees Fahrenheit, as published by the station history
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Fahrenheit(f64);

impl Eq for Fahrenheit {}

impl PartialOrd for Fahrenheit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fahrenheit {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Fahrenheit {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Fahrenheit {
    /// Create a new Fahrenheit temperature
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Fahrenheit(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to degrees Celsius
    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> f64 {
        (self.0 - 32.0) * 5.0 / 9.0
    }
}

impl From<f64> for Fahrenheit {
    fn from(v: f64) -> Self {
        Fahrenheit(v)
    }
}

impl From<Fahrenheit> for f64 {
    fn from(t: Fahrenheit) -> f64 {
        t.0
    }
}

impl fmt::Display for Fahrenheit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°F", self.0)
    }
}

// ============================================================================
// AREA
// ============================================================================

/// Burned area in acres (always >= 0)
///
/// Deserializes from a bare number through [`Acres::try_new`], so negative
/// or non-finite input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
#[repr(transparent)]
pub struct Acres(f64);

impl Eq for Acres {}

impl PartialOrd for Acres {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Acres {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Acres {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Acres {
    /// Zero burned area
    pub const ZERO: Acres = Acres(0.0);

    /// Create a new area. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Acres::new: value must be non-negative");
        Acres(value)
    }

    /// Create an area, returning `None` for negative or non-finite input
    #[inline]
    #[must_use]
    pub fn try_new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Acres(value))
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Acres> for f64 {
    fn from(a: Acres) -> f64 {
        a.0
    }
}

/// Error for an area that is negative or not a finite number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidAcres(pub f64);

impl fmt::Display for InvalidAcres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid burned area (must be finite and >= 0)", self.0)
    }
}

impl std::error::Error for InvalidAcres {}

impl TryFrom<f64> for Acres {
    type Error = InvalidAcres;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Acres::try_new(value).ok_or(InvalidAcres(value))
    }
}

impl fmt::Display for Acres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ac", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_to_celsius() {
        let t = Fahrenheit(212.0);
        assert!((t.to_celsius() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_fahrenheit_ordering() {
        let cool = Fahrenheit::new(45.0);
        let hot = Fahrenheit::new(102.0);
        assert!(cool < hot);
        assert_eq!(cool.max(hot), hot);
    }

    #[test]
    fn test_fahrenheit_serializes_as_number() {
        let json = serde_json::to_string(&Fahrenheit::new(60.5)).unwrap();
        assert_eq!(json, "60.5");
        let back: Fahrenheit = serde_json::from_str("71.0").unwrap();
        assert_eq!(back, Fahrenheit::new(71.0));
    }

    #[test]
    fn test_acres_try_new_rejects_negative() {
        assert!(Acres::try_new(-1.0).is_none());
        assert!(Acres::try_new(f64::NAN).is_none());
        assert_eq!(Acres::try_new(0.0), Some(Acres::ZERO));
    }

    #[test]
    fn test_acres_deserialize_validates() {
        let area: Acres = serde_json::from_str("12.5").unwrap();
        assert_eq!(area, Acres::new(12.5));
        assert_eq!(serde_json::to_string(&area).unwrap(), "12.5");

        let err = serde_json::from_str::<Acres>("-5.0").unwrap_err();
        assert!(err.to_string().contains("not a valid burned area"), "{err}");
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_acres_new_panics_on_negative() {
        let _ = Acres::new(-0.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Fahrenheit::new(60.0).to_string(), "60.0°F");
        assert_eq!(Acres::new(1.5).to_string(), "1.50 ac");
    }
}
