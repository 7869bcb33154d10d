//! The one place the process clock is read.
//!
//! The engine in `calendar` is pure; the CLI reads "now" here, once per
//! invocation, with the configured UTC offset applied explicitly instead of
//! consulting the process-local time zone.

use chrono::{Datelike, Duration, Timelike, Utc};

use crate::calendar::{CalendarDate, Moment, TimeOfDay};
use crate::error::Result;

/// Reads the current instant as a [`Moment`] at the given UTC offset.
///
/// # Errors
/// Propagates date/time validation errors, which cannot occur for a real
/// clock reading.
#[allow(clippy::cast_possible_truncation)]
pub fn current_moment(utc_offset_minutes: i64) -> Result<Moment> {
    let shifted = Utc::now() + Duration::minutes(utc_offset_minutes);
    let naive = shifted.naive_utc();

    let date = CalendarDate::new(naive.year(), naive.month() as u8, naive.day() as u8)?;
    let time = TimeOfDay::new(
        naive.hour() as u8,
        naive.minute() as u8,
        naive.second() as u8,
    )?;
    Ok(Moment::new(date, time))
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
