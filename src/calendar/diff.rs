//! Calendar-aware difference between two moments.
//!
//! The year/month/day components follow the manual borrowing rules (month
//! underflow borrows from years, day underflow borrows the length of the
//! month preceding the end date), while the running totals are derived from
//! an independent epoch-day subtraction so leap years never drift.

use super::date::{CalendarDate, Moment, days_in_month};
use crate::error::{DatespanError, Result};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;
const DAYS_PER_WEEK: u64 = 7;

/// Elapsed time between two moments, both as a calendar breakdown
/// (years/months/days plus a sub-day remainder) and as exact running totals.
///
/// The breakdown round-trips: adding `years * 12 + months` months to the
/// start date with day-clamping month arithmetic, then `days` civil days,
/// lands exactly on the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: u32,
    /// Always 0-11 after the year borrow.
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Whole elapsed days, from epoch-day subtraction.
    pub total_days: u64,
    pub total_weeks: u64,
    pub total_hours: u64,
    pub total_minutes: u64,
    pub total_seconds: u64,
}

/// Computes the breakdown from `start` to `end`.
///
/// The operands are never reordered: callers wanting a signed or swapped
/// difference must do so themselves.
///
/// # Errors
/// Returns `Ordering` when `start` is strictly later than `end`.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn between(start: Moment, end: Moment) -> Result<AgeBreakdown> {
    if start > end {
        return Err(DatespanError::Ordering {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let clock_diff = i64::from(end.time().seconds_from_midnight())
        - i64::from(start.time().seconds_from_midnight());

    // Time-of-day borrow happens first, at the finer granularity.
    let (clock, day_borrow) = if clock_diff < 0 {
        (clock_diff + SECONDS_PER_DAY, 1)
    } else {
        (clock_diff, 0)
    };

    let (years, months, days) = date_components(start.date(), end.date(), day_borrow);

    // Exact elapsed duration, independent of the borrowed breakdown.
    let epoch_days = end.date().to_epoch_days() - start.date().to_epoch_days();
    let total_seconds = (epoch_days * SECONDS_PER_DAY + clock_diff) as u64;
    let total_days = total_seconds / SECONDS_PER_DAY as u64;

    Ok(AgeBreakdown {
        years,
        months,
        days,
        hours: (clock / SECONDS_PER_HOUR) as u32,
        minutes: (clock % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u32,
        seconds: (clock % SECONDS_PER_MINUTE) as u32,
        total_days,
        total_weeks: total_days / DAYS_PER_WEEK,
        total_hours: total_seconds / SECONDS_PER_HOUR as u64,
        total_minutes: total_seconds / SECONDS_PER_MINUTE as u64,
        total_seconds,
    })
}

/// Year/month/day components via manual borrowing.
///
/// The start day is observed on the last existing day of the anchor month:
/// a Feb 29 birth is observed on Feb 28 in common years (so the year
/// counter ticks once Feb 28 has passed), and a day-31 start clamps to 30
/// when the anchor month is shorter. The clamp is what keeps the round-trip
/// law exact for every valid input.
#[allow(clippy::cast_sign_loss)]
fn date_components(start: CalendarDate, end: CalendarDate, day_borrow: i64) -> (u32, u32, u32) {
    let mut years = i64::from(end.year()) - i64::from(start.year());
    let mut months = i64::from(end.month()) - i64::from(start.month());

    let anchor_len = i64::from(days_in_month(end.year(), end.month()));
    let observed = i64::from(start.day()).min(anchor_len);
    let end_day = i64::from(end.day()) - day_borrow;
    let mut days = end_day - observed;

    if days < 0 {
        // Borrow one month: the days completed belong to the month
        // immediately preceding the end date.
        months -= 1;
        let (prev_year, prev_month) = previous_month(end.year(), end.month());
        let prev_len = i64::from(days_in_month(prev_year, prev_month));
        let observed = i64::from(start.day()).min(prev_len);
        days = end_day + prev_len - observed;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years as u32, months as u32, days as u32)
}

const fn previous_month(year: i32, month: u8) -> (i32, u8) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
