//! Backward time-step ranges for batch chart scans.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::birth_time::{BirthTime, CivilTime, days_in_month};
use crate::error::TimeError;

/// Step unit for [`timestamp_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
}

impl TimeUnit {
    /// Nominal length of one unit in days, used to size the range.
    pub const fn days(self) -> f64 {
        match self {
            Self::Years => 365.2425,
            Self::Months => 365.25 / 12.0,
            Self::Days => 1.0,
            Self::Hours => 1.0 / 24.0,
            Self::Minutes => 1.0 / 1440.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "years" | "year" | "y" => Ok(Self::Years),
            "months" | "month" => Ok(Self::Months),
            "days" | "day" | "d" => Ok(Self::Days),
            "hours" | "hour" | "h" => Ok(Self::Hours),
            "minutes" | "minute" | "min" | "m" => Ok(Self::Minutes),
            _ => Err(TimeError::InvalidRange(
                "time unit must be years, months, days, hours or minutes",
            )),
        }
    }
}

/// Step `months` calendar months back from `t`, clamping the day to the
/// target month's length.
fn months_before(t: &BirthTime, months: i64) -> BirthTime {
    let index = t.year as i64 * 12 + (t.month as i64 - 1) - months;
    let year = index.div_euclid(12) as i32;
    let month = index.rem_euclid(12) as u32 + 1;
    let day = t.day.min(days_in_month(year, month));
    BirthTime::new(year, month, day, t.hour, t.minute, 0, 0.0)
}

/// Timestamps stepping backward from `end` toward `start`.
///
/// The span is measured on the wall-clock fields (offsets are ignored) and
/// divided into `unit`s; `fraction` of those units are covered at one
/// timestamp every `interval` units. The first entry is `end` itself.
/// Generated timestamps carry zero seconds and a zero UTC offset.
pub fn timestamp_range(
    start: &BirthTime,
    end: &BirthTime,
    fraction: f64,
    unit: TimeUnit,
    interval: u32,
) -> Result<Vec<BirthTime>, TimeError> {
    start.validate()?;
    end.validate()?;
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(TimeError::InvalidRange("fraction must be in (0, 1]"));
    }
    if interval == 0 {
        return Err(TimeError::InvalidRange("interval must be at least 1"));
    }

    let end_jd = end.local_jd();
    let span_units = ((end_jd - start.local_jd()) / unit.days()).trunc();
    let steps = (span_units * fraction / interval as f64).trunc();
    if steps < 1.0 {
        return Err(TimeError::InvalidRange("range produces no timestamps"));
    }
    let steps = steps as i64;

    let range = (0..steps)
        .map(|i| match unit {
            TimeUnit::Years => months_before(end, i * interval as i64 * 12),
            TimeUnit::Months => months_before(end, i * interval as i64),
            TimeUnit::Days | TimeUnit::Hours | TimeUnit::Minutes => {
                let jd = end_jd - i as f64 * interval as f64 * unit.days();
                let c = CivilTime::from_jd(jd);
                BirthTime::new(c.year, c.month, c.day, c.hour, c.minute, 0, 0.0)
            }
        })
        .collect();
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> BirthTime {
        BirthTime::new(year, month, day, hour, minute, 0, 0.0)
    }

    #[test]
    fn unit_from_str() {
        assert_eq!("Days".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
        assert_eq!("minutes".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
        assert!("weeks".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn daily_range_steps_back_from_end() {
        let range =
            timestamp_range(&t(2000, 1, 1, 12, 0), &t(2000, 1, 11, 12, 0), 1.0, TimeUnit::Days, 1)
                .unwrap();
        assert_eq!(range.len(), 10);
        assert_eq!(range[0], t(2000, 1, 11, 12, 0));
        assert_eq!(range[9], t(2000, 1, 2, 12, 0));
    }

    #[test]
    fn fraction_and_interval_shrink_range() {
        let range =
            timestamp_range(&t(2000, 1, 1, 0, 0), &t(2000, 1, 2, 0, 0), 0.5, TimeUnit::Hours, 3)
                .unwrap();
        // 24 hours * 0.5 / 3 = 4 steps
        assert_eq!(range.len(), 4);
        assert_eq!(range[1], t(2000, 1, 1, 21, 0));
        assert_eq!(range[3], t(2000, 1, 1, 15, 0));
    }

    #[test]
    fn monthly_range_clamps_day() {
        let range =
            timestamp_range(&t(2000, 1, 1, 0, 0), &t(2000, 3, 31, 8, 30), 1.0, TimeUnit::Months, 1)
                .unwrap();
        assert_eq!(range.len(), 2);
        assert_eq!(range[0], t(2000, 3, 31, 8, 30));
        assert_eq!(range[1], t(2000, 2, 29, 8, 30));
    }

    #[test]
    fn yearly_range_crosses_leap_day() {
        let range =
            timestamp_range(&t(1990, 1, 1, 0, 0), &t(2000, 2, 29, 0, 0), 1.0, TimeUnit::Years, 5)
                .unwrap();
        assert_eq!(range.len(), 2);
        assert_eq!(range[1], t(1995, 2, 28, 0, 0));
    }

    #[test]
    fn seconds_and_offset_are_zeroed() {
        let end = BirthTime::new(2000, 1, 1, 10, 30, 45, 3.0);
        let range = timestamp_range(&t(1999, 12, 31, 0, 0), &end, 1.0, TimeUnit::Hours, 1).unwrap();
        assert!(range.iter().all(|b| b.second == 0 && b.utc_offset_hours == 0.0));
    }

    #[test]
    fn empty_range_is_error() {
        let r = timestamp_range(&t(2000, 1, 2, 0, 0), &t(2000, 1, 1, 0, 0), 1.0, TimeUnit::Days, 1);
        assert!(matches!(r, Err(TimeError::InvalidRange(_))));
    }

    #[test]
    fn zero_interval_is_error() {
        let r = timestamp_range(&t(2000, 1, 1, 0, 0), &t(2000, 2, 1, 0, 0), 1.0, TimeUnit::Days, 0);
        assert!(r.is_err());
    }
}
