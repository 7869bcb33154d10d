//! Derived birth-date facts: pure, table-driven classifications keyed by
//! date components. Computed fresh on every call; nothing here has state.

mod cohort;
mod zodiac;

pub use cohort::{Birthstone, ChineseZodiac, Generation};
pub use zodiac::ZodiacSign;

use crate::calendar::{CalendarDate, Weekday, is_leap_year};
use crate::error::Result;

/// The full bundle of lookups for one birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFacts {
    pub zodiac: ZodiacSign,
    pub birthstone: Birthstone,
    pub chinese_zodiac: ChineseZodiac,
    pub generation: Generation,
    pub weekday: Weekday,
    pub day_of_year: u16,
    pub leap_year: bool,
}

impl DerivedFacts {
    /// # Errors
    /// Returns `InvalidInput` when the birth year predates the generation
    /// table. The date itself is already validated by construction.
    pub fn for_date(date: CalendarDate) -> Result<Self> {
        Ok(Self {
            zodiac: ZodiacSign::from_month_day(date.month(), date.day())?,
            birthstone: Birthstone::for_month(date.month())?,
            chinese_zodiac: ChineseZodiac::for_year(date.year()),
            generation: Generation::for_year(date.year())?,
            weekday: date.weekday(),
            day_of_year: date.day_of_year(),
            leap_year: is_leap_year(date.year()),
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
