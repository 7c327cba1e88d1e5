//! Civil-time and Julian Date handling for bodygraph charts.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - `BirthTime`, a validated local civil timestamp with its UTC offset
//! - `CivilTime`, a UT calendar instant recovered from a Julian Date
//! - ΔT (TT − UT) estimates for converting UT Julian Dates to TT
//! - Backward time-step ranges for batch chart scans

pub mod birth_time;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod range;

pub use birth_time::{BirthTime, CivilTime, days_in_month, is_leap_year};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use range::{TimeUnit, timestamp_range};

/// Julian Date (UT) of a civil birth time.
///
/// Validates the timestamp first; the offset is subtracted to reach UT.
pub fn julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    utc_offset_hours: f64,
) -> Result<f64, TimeError> {
    let birth = BirthTime::new(year, month, day, hour, minute, second, utc_offset_hours);
    birth.to_jd_ut()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn julian_date_applies_offset() {
        let local = julian_date(2000, 1, 1, 15, 0, 0, 3.0).unwrap();
        assert!((local - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn julian_date_rejects_bad_month() {
        assert!(julian_date(2000, 13, 1, 0, 0, 0, 0.0).is_err());
    }
}
