use serde::{Deserialize, Serialize};

use crate::error::{DatespanError, Result};

/// Widest UTC offset accepted, matching the bounds fixed-offset time
/// libraries enforce.
pub const MAX_UTC_OFFSET_MINUTES: i64 = 18 * 60;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultConfig {
    /// Include derived birth-date facts in `age` output.
    #[serde(default = "default_true")]
    pub facts: bool,

    /// UTC offset in minutes applied when reading the current instant.
    #[serde(default)]
    pub utc_offset_minutes: i64,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            facts: true,
            utc_offset_minutes: 0,
        }
    }
}

impl Config {
    /// Validates value ranges beyond what deserialization enforces.
    ///
    /// # Errors
    /// Returns a `Config` error when `utc_offset_minutes` is outside ±18 h.
    pub fn validate(&self) -> Result<()> {
        let offset = self.default.utc_offset_minutes;
        if offset.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(DatespanError::Config(format!(
                "utc_offset_minutes must be between -{MAX_UTC_OFFSET_MINUTES} and \
                 {MAX_UTC_OFFSET_MINUTES}, got {offset}"
            )));
        }
        Ok(())
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
