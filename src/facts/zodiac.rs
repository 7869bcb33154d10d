use crate::error::{DatespanError, Result};

/// Western zodiac sign, determined by (month, day) ranges.
///
/// Ranges are inclusive on both ends and tile the year with no gaps or
/// overlaps; a boundary date belongs to the sign whose documented end date
/// it matches (Mar 20 is Pisces, Mar 21 is Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// # Errors
    /// Returns `InvalidInput` for a (month, day) pair outside any range,
    /// which only happens for impossible dates.
    pub const fn from_month_day(month: u8, day: u8) -> Result<Self> {
        let sign = match (month, day) {
            (3, 21..=31) | (4, 1..=19) => Self::Aries,
            (4, 20..=30) | (5, 1..=20) => Self::Taurus,
            (5, 21..=31) | (6, 1..=20) => Self::Gemini,
            (6, 21..=30) | (7, 1..=22) => Self::Cancer,
            (7, 23..=31) | (8, 1..=22) => Self::Leo,
            (8, 23..=31) | (9, 1..=22) => Self::Virgo,
            (9, 23..=30) | (10, 1..=22) => Self::Libra,
            (10, 23..=31) | (11, 1..=21) => Self::Scorpio,
            (11, 22..=30) | (12, 1..=21) => Self::Sagittarius,
            (12, 22..=31) | (1, 1..=19) => Self::Capricorn,
            (1, 20..=31) | (2, 1..=18) => Self::Aquarius,
            (2, 19..=29) | (3, 1..=20) => Self::Pisces,
            _ => {
                return Err(DatespanError::InvalidInput {
                    field: "month/day",
                    value: month as i64 * 100 + day as i64,
                });
            }
        };
        Ok(sign)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Documented date range, for display.
    #[must_use]
    pub const fn date_range(self) -> &'static str {
        match self {
            Self::Aries => "Mar 21 - Apr 19",
            Self::Taurus => "Apr 20 - May 20",
            Self::Gemini => "May 21 - Jun 20",
            Self::Cancer => "Jun 21 - Jul 22",
            Self::Leo => "Jul 23 - Aug 22",
            Self::Virgo => "Aug 23 - Sep 22",
            Self::Libra => "Sep 23 - Oct 22",
            Self::Scorpio => "Oct 23 - Nov 21",
            Self::Sagittarius => "Nov 22 - Dec 21",
            Self::Capricorn => "Dec 22 - Jan 19",
            Self::Aquarius => "Jan 20 - Feb 18",
            Self::Pisces => "Feb 19 - Mar 20",
        }
    }
}

#[cfg(test)]
#[path = "zodiac_tests.rs"]
mod tests;
