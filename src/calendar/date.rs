use std::fmt;
use std::str::FromStr;

use crate::error::{DatespanError, Result};

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a given year/month (handles leap years).
#[must_use]
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        // unreachable for validated dates but keeps the function total
        _ => 30,
    }
}

/// Day of week, ISO ordering (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    const fn from_index(index: i64) -> Self {
        match index {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }
}

/// A validated proleptic-Gregorian calendar date.
///
/// Construction via [`CalendarDate::new`] guarantees the day exists in the
/// given month, so every value of this type names a real calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Builds a date, rejecting anything that does not name a real calendar
    /// day (month outside 1-12, or day outside the month's length).
    ///
    /// # Errors
    /// Returns `InvalidDate` for impossible dates such as February 30.
    pub const fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if month < 1 || month > 12 {
            return Err(DatespanError::InvalidDate { year, month, day });
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(DatespanError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Days since 1970-01-01, via Howard Hinnant's `days_from_civil`.
    #[must_use]
    pub fn to_epoch_days(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let m = i64::from(self.month);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = if self.month <= 2 { m + 9 } else { m - 3 };
        let doy = (153 * mp + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Inverse of [`CalendarDate::to_epoch_days`] (`civil_from_days`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_epoch_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = if month <= 2 { y + 1 } else { y };
        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    /// 1-based ordinal of this date within its year (Dec 31 is 365 or 366).
    #[must_use]
    pub fn day_of_year(self) -> u16 {
        const CUMULATIVE: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
        let mut ordinal = CUMULATIVE[(self.month - 1) as usize] + u16::from(self.day);
        if self.month > 2 && is_leap_year(self.year) {
            ordinal += 1;
        }
        ordinal
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday (index 3, Monday first).
        Weekday::from_index((self.to_epoch_days() + 3).rem_euclid(7))
    }

    /// Shifts by whole months, clamping the day to the target month's length
    /// (Jan 31 + 1 month = Feb 28/29). This is the month arithmetic the
    /// breakdown round-trips against.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_months(self, delta: i64) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1 + delta;
        let year = total.div_euclid(12) as i32;
        let month = (total.rem_euclid(12) + 1) as u8;
        let day = self.day.min(days_in_month(year, month));
        Self { year, month, day }
    }

    /// Shifts by exact civil days.
    #[must_use]
    pub fn add_days(self, delta: i64) -> Self {
        Self::from_epoch_days(self.to_epoch_days() + delta)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DatespanError;

    fn from_str(s: &str) -> Result<Self> {
        let parse_err = |reason: &str| DatespanError::DateParse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split('-');
        let year = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .ok_or_else(|| parse_err("expected a numeric year"))?;
        let month = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(|| parse_err("expected a numeric month"))?;
        let day = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(|| parse_err("expected a numeric day"))?;
        if parts.next().is_some() {
            return Err(parse_err("expected YYYY-MM-DD"));
        }

        Self::new(year, month, day)
    }
}

/// A time of day at one-second granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// # Errors
    /// Returns `InvalidTime` when any component is out of range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(DatespanError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    #[must_use]
    pub const fn seconds_from_midnight(self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = DatespanError;

    fn from_str(s: &str) -> Result<Self> {
        let parse_err = |reason: &str| DatespanError::DateParse {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split(':');
        let hour = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(|| parse_err("expected a numeric hour"))?;
        let minute = parts
            .next()
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(|| parse_err("expected a numeric minute"))?;
        let second = match parts.next() {
            Some(p) => p
                .parse::<u8>()
                .map_err(|_| parse_err("expected a numeric second"))?,
            None => 0,
        };
        if parts.next().is_some() {
            return Err(parse_err("expected HH:MM or HH:MM:SS"));
        }

        Self::new(hour, minute, second)
    }
}

/// A calendar date with a time of day; a bare date reads as midnight.
///
/// Ordering is date-major, so `Moment` comparisons agree with chronology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moment {
    date: CalendarDate,
    time: TimeOfDay,
}

impl Moment {
    #[must_use]
    pub const fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    #[must_use]
    pub const fn midnight(date: CalendarDate) -> Self {
        Self {
            date,
            time: TimeOfDay::MIDNIGHT,
        }
    }

    #[must_use]
    pub const fn date(self) -> CalendarDate {
        self.date
    }

    #[must_use]
    pub const fn time(self) -> TimeOfDay {
        self.time
    }

    /// Whether a non-midnight time of day was supplied.
    #[must_use]
    pub fn has_time(self) -> bool {
        self.time != TimeOfDay::MIDNIGHT
    }
}

impl From<CalendarDate> for Moment {
    fn from(date: CalendarDate) -> Self {
        Self::midnight(date)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_time() {
            write!(f, "{}T{}", self.date, self.time)
        } else {
            write!(f, "{}", self.date)
        }
    }
}

impl FromStr for Moment {
    type Err = DatespanError;

    fn from_str(s: &str) -> Result<Self> {
        let separator = s.find(['T', ' ']);
        match separator {
            Some(at) => {
                let date = s[..at].parse::<CalendarDate>()?;
                let time = s[at + 1..].parse::<TimeOfDay>()?;
                Ok(Self::new(date, time))
            }
            None => Ok(Self::midnight(s.parse::<CalendarDate>()?)),
        }
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
