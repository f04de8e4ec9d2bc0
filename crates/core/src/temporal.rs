//! Decoding of the wildfire database's date/time columns
//!
//! Discovery and containment dates are stored as fractional day-counts
//! (Julian day numbers) and times of day as zero-padded `HHMM` strings.
//! [`decode_timestamp`] turns one such pair into a calendar timestamp.

use crate::error::AnalysisError;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Day-count of the reference instant 2008-01-01T00:00:00
pub const EPOCH_DAY_COUNT: f64 = 2_454_466.5;

/// Calendar date of [`EPOCH_DAY_COUNT`]
pub const EPOCH_YEAR: i32 = 2008;

/// The reference instant as a timestamp
fn epoch() -> Result<NaiveDateTime, AnalysisError> {
    NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AnalysisError::Parse("epoch is not a valid date".into()))
}

/// Split an `HHMM` clock string into (hours, minutes)
///
/// # Errors
/// Returns [`AnalysisError::Parse`] unless the input is exactly four ASCII
/// digits forming a time between 00:00 and 23:59.
pub fn parse_clock(clock: &str) -> Result<(u32, u32), AnalysisError> {
    let bytes = clock.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(AnalysisError::Parse(format!(
            "clock '{clock}' must be four digits (HHMM)"
        )));
    }
    let digit = |i: usize| u32::from(bytes[i] - b'0');
    let hours = digit(0) * 10 + digit(1);
    let minutes = digit(2) * 10 + digit(3);
    if hours > 23 || minutes > 59 {
        return Err(AnalysisError::Parse(format!(
            "clock '{clock}' is not a time of day"
        )));
    }
    Ok((hours, minutes))
}

/// Convert a day-count and `HHMM` clock string into a timestamp.
///
/// timestamp = 2008-01-01T00:00 + floor(`day_count` − 2454466.5) days + HH hours + MM minutes
///
/// # Errors
/// Returns [`AnalysisError::Parse`] for a malformed clock string, a
/// non-finite day-count, or a day-count outside the representable range.
pub fn decode_timestamp(day_count: f64, clock: &str) -> Result<NaiveDateTime, AnalysisError> {
    let (hours, minutes) = parse_clock(clock)?;

    if !day_count.is_finite() {
        return Err(AnalysisError::Parse(format!(
            "day-count {day_count} is not a finite number"
        )));
    }
    let whole_days = (day_count - EPOCH_DAY_COUNT).floor();
    // chrono's own limit is far inside i64, so this only screens absurd values
    if whole_days.abs() > 1.0e8 {
        return Err(AnalysisError::Parse(format!(
            "day-count {day_count} is out of range"
        )));
    }

    let days = Duration::try_days(whole_days as i64)
        .ok_or_else(|| AnalysisError::Parse(format!("day-count {day_count} is out of range")))?;
    let offset = days + Duration::hours(i64::from(hours)) + Duration::minutes(i64::from(minutes));

    epoch()?
        .checked_add_signed(offset)
        .ok_or_else(|| AnalysisError::Parse(format!("day-count {day_count} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    /// 2008 has 366 days, 2009 has 365
    const JAN_1_2010: f64 = EPOCH_DAY_COUNT + 731.0;

    #[test]
    fn test_epoch_decodes_to_reference_instant() {
        let ts = decode_timestamp(EPOCH_DAY_COUNT, "0000").unwrap();
        assert_eq!(ts, epoch().unwrap());
    }

    #[test]
    fn test_start_and_end_of_day() {
        let start = decode_timestamp(JAN_1_2010, "0000").unwrap();
        let end = decode_timestamp(JAN_1_2010, "2359").unwrap();

        assert_eq!(start.date(), NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!((start.hour(), start.minute()), (0, 0));
        assert_eq!(end.date(), start.date());
        assert_eq!((end.hour(), end.minute()), (23, 59));
    }

    #[test]
    fn test_fraction_of_day_count_is_floored() {
        let ts = decode_timestamp(JAN_1_2010 + 0.99, "1230").unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!((ts.hour(), ts.minute()), (12, 30));
    }

    #[test]
    fn test_day_count_before_epoch() {
        // 2007-12-31
        let ts = decode_timestamp(EPOCH_DAY_COUNT - 1.0, "0815").unwrap();
        assert_eq!(ts.year(), 2007);
        assert_eq!((ts.month(), ts.day()), (12, 31));
        // half a day before the epoch still floors to the previous day
        let ts = decode_timestamp(EPOCH_DAY_COUNT - 0.5, "0000").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2007, 12, 31));
    }

    #[test]
    fn test_malformed_clock_strings_fail() {
        for bad in ["", "930", "09300", "12:3", "ab12", "2400", "1260", "+123"] {
            let err = decode_timestamp(JAN_1_2010, bad).unwrap_err();
            assert!(
                matches!(err, AnalysisError::Parse(_)),
                "expected parse error for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_non_finite_day_count_fails() {
        assert!(matches!(
            decode_timestamp(f64::NAN, "0000"),
            Err(AnalysisError::Parse(_))
        ));
        assert!(matches!(
            decode_timestamp(f64::INFINITY, "0000"),
            Err(AnalysisError::Parse(_))
        ));
        assert!(matches!(
            decode_timestamp(1.0e15, "0000"),
            Err(AnalysisError::Parse(_))
        ));
    }
}
