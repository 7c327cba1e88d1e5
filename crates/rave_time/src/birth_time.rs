//! Local civil birth time and UT calendar instants.
//!
//! `BirthTime` is the caller-facing timestamp: wall-clock fields plus the
//! already-resolved UTC offset in hours (e.g. 3.0 for UTC+3, 5.75 for
//! UTC+5:45). Timezone-name resolution is left to the caller.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// Largest accepted UTC offset magnitude in hours.
const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Local wall-clock birth time with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Offset of local time from UTC, in hours (east positive).
    pub utc_offset_hours: f64,
}

impl BirthTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Same wall-clock fields with a different UTC offset.
    pub fn with_offset(self, utc_offset_hours: f64) -> Self {
        Self {
            utc_offset_hours,
            ..self
        }
    }

    /// Check calendar fields and offset ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidTimestamp("month must be in 1..=12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidTimestamp("day is outside the month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidTimestamp("hour must be in 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidTimestamp("minute must be in 0..=59"));
        }
        if self.second > 59 {
            return Err(TimeError::InvalidTimestamp("second must be in 0..=59"));
        }
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(TimeError::InvalidTimestamp(
                "UTC offset must be finite and within ±14 hours",
            ));
        }
        Ok(())
    }

    /// Julian Date in UT after removing the UTC offset.
    pub fn to_jd_ut(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let hours = self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0
            - self.utc_offset_hours;
        Ok(calendar_to_jd(self.year, self.month, self.day as f64 + hours / 24.0))
    }

    /// Julian Date of the wall-clock fields, ignoring the offset.
    pub(crate) fn local_jd(&self) -> f64 {
        let hours = self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0;
        calendar_to_jd(self.year, self.month, self.day as f64 + hours / 24.0)
    }
}

impl Display for BirthTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parses `YYYY-MM-DD HH:MM[:SS]` (a `T` separator is also accepted).
/// The parsed time carries a zero offset; set it with [`BirthTime::with_offset`].
impl FromStr for BirthTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || TimeError::Parse(s.to_string());
        let trimmed = s.trim().trim_end_matches('Z');
        let (date, time) = trimmed
            .split_once(['T', ' '])
            .ok_or_else(parse_err)?;

        let mut date_parts = date.splitn(3, '-');
        let year = date_parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(parse_err)?;
        let month = date_parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(parse_err)?;
        let day = date_parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(parse_err)?;

        let fields: Vec<&str> = time.trim().split(':').collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(parse_err());
        }
        let hour = fields[0].parse::<u32>().map_err(|_| parse_err())?;
        let minute = fields[1].parse::<u32>().map_err(|_| parse_err())?;
        let second = match fields.get(2) {
            Some(sec) => sec.parse::<u32>().map_err(|_| parse_err())?,
            None => 0,
        };

        let birth = Self::new(year, month, day, hour, minute, second, 0.0);
        birth.validate()?;
        Ok(birth)
    }
}

/// A UT calendar instant at whole-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    /// Calendar instant of a Julian Date, rounded to the nearest second.
    pub fn from_jd(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let mut day_number = shifted.floor();
        let mut seconds = ((shifted - day_number) * 86_400.0).round() as u32;
        if seconds >= 86_400 {
            day_number += 1.0;
            seconds = 0;
        }
        let (year, month, day_frac) = jd_to_calendar(day_number - 0.5);
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour: seconds / 3600,
            minute: (seconds % 3600) / 60,
            second: seconds % 60,
        }
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
