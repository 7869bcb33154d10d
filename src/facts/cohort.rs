use crate::error::{DatespanError, Result};

/// Traditional birthstone by calendar month. Some months carry a second,
/// equally traditional stone; those expose it via [`Birthstone::alternate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Birthstone {
    Garnet,
    Amethyst,
    Aquamarine,
    Diamond,
    Emerald,
    Pearl,
    Ruby,
    Peridot,
    Sapphire,
    Opal,
    Topaz,
    Turquoise,
}

impl Birthstone {
    /// # Errors
    /// Returns `InvalidInput` when `month` is outside 1-12.
    pub const fn for_month(month: u8) -> Result<Self> {
        let stone = match month {
            1 => Self::Garnet,
            2 => Self::Amethyst,
            3 => Self::Aquamarine,
            4 => Self::Diamond,
            5 => Self::Emerald,
            6 => Self::Pearl,
            7 => Self::Ruby,
            8 => Self::Peridot,
            9 => Self::Sapphire,
            10 => Self::Opal,
            11 => Self::Topaz,
            12 => Self::Turquoise,
            _ => {
                return Err(DatespanError::InvalidInput {
                    field: "month",
                    value: month as i64,
                });
            }
        };
        Ok(stone)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Garnet => "Garnet",
            Self::Amethyst => "Amethyst",
            Self::Aquamarine => "Aquamarine",
            Self::Diamond => "Diamond",
            Self::Emerald => "Emerald",
            Self::Pearl => "Pearl",
            Self::Ruby => "Ruby",
            Self::Peridot => "Peridot",
            Self::Sapphire => "Sapphire",
            Self::Opal => "Opal",
            Self::Topaz => "Topaz",
            Self::Turquoise => "Turquoise",
        }
    }

    /// The second traditional stone, for months that have one.
    #[must_use]
    pub const fn alternate(self) -> Option<&'static str> {
        match self {
            Self::Pearl => Some("Alexandrite"),
            Self::Opal => Some("Tourmaline"),
            Self::Topaz => Some("Citrine"),
            Self::Turquoise => Some("Tanzanite"),
            _ => None,
        }
    }
}

/// Chinese zodiac animal, a twelve-year cycle anchored at 1900 = Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChineseZodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseZodiac {
    /// Cycle position is `(year - 4) mod 12`; the Euclidean remainder keeps
    /// proleptic years before the anchor cycling correctly.
    #[must_use]
    pub const fn for_year(year: i32) -> Self {
        match (year - 4).rem_euclid(12) {
            0 => Self::Rat,
            1 => Self::Ox,
            2 => Self::Tiger,
            3 => Self::Rabbit,
            4 => Self::Dragon,
            5 => Self::Snake,
            6 => Self::Horse,
            7 => Self::Goat,
            8 => Self::Monkey,
            9 => Self::Rooster,
            10 => Self::Dog,
            _ => Self::Pig,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

/// Generation cohort by birth year, an ordered set of inclusive ranges.
/// The newest cohort is open-ended; years before the table start are
/// rejected rather than guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generation {
    Lost,
    Greatest,
    Silent,
    BabyBoomer,
    GenX,
    Millennial,
    GenZ,
    GenAlpha,
    GenBeta,
}

impl Generation {
    /// # Errors
    /// Returns `InvalidInput` for years before 1883.
    pub const fn for_year(year: i32) -> Result<Self> {
        let cohort = match year {
            1883..=1900 => Self::Lost,
            1901..=1927 => Self::Greatest,
            1928..=1945 => Self::Silent,
            1946..=1964 => Self::BabyBoomer,
            1965..=1980 => Self::GenX,
            1981..=1996 => Self::Millennial,
            1997..=2012 => Self::GenZ,
            2013..=2024 => Self::GenAlpha,
            2025.. => Self::GenBeta,
            _ => {
                return Err(DatespanError::InvalidInput {
                    field: "year",
                    value: year as i64,
                });
            }
        };
        Ok(cohort)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lost => "Lost Generation",
            Self::Greatest => "Greatest Generation",
            Self::Silent => "Silent Generation",
            Self::BabyBoomer => "Baby Boomer",
            Self::GenX => "Generation X",
            Self::Millennial => "Millennial",
            Self::GenZ => "Generation Z",
            Self::GenAlpha => "Generation Alpha",
            Self::GenBeta => "Generation Beta",
        }
    }
}

#[cfg(test)]
#[path = "cohort_tests.rs"]
mod tests;
