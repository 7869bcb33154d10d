use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatespanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },

    #[error("Cannot parse '{input}': {reason}")]
    DateParse { input: String, reason: String },

    #[error("Start date {start} is later than end date {end}")]
    Ordering { start: String, end: String },

    #[error("Invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl DatespanError {
    /// Stable category name used by the text renderer and tests.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidDate { .. } => "InvalidDate",
            Self::InvalidTime { .. } => "InvalidTime",
            Self::DateParse { .. } => "DateParse",
            Self::Ordering { .. } => "Ordering",
            Self::InvalidInput { .. } => "InvalidInput",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// The variant payload without the message prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::InvalidDate { year, month, day } => {
                format!("{year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime {
                hour,
                minute,
                second,
            } => format!("{hour:02}:{minute:02}:{second:02}"),
            Self::DateParse { input, .. } => input.clone(),
            Self::Ordering { start, end } => format!("{start} > {end}"),
            Self::InvalidInput { field, value } => format!("{field} = {value}"),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// A hint shown below the error in verbose text output.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => {
                Some("Check the config file format; `datespan init` writes a valid template")
            }
            Self::InvalidDate { .. } => {
                Some("Check the day against the month length; February has 28 or 29 days")
            }
            Self::InvalidTime { .. } => Some("Hours run 0-23, minutes and seconds 0-59"),
            Self::DateParse { .. } => {
                Some("Use ISO format: YYYY-MM-DD, optionally followed by THH:MM[:SS]")
            }
            Self::Ordering { .. } => Some("Swap the two dates or correct the later one"),
            Self::TomlParse(_) => Some("Check the TOML syntax in the configuration file"),
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Some("Check that the file path exists")
            }
            Self::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Some("Check the file permissions")
            }
            _ => None,
        }
    }

    /// Process exit code for this error kind.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidDate { .. }
            | Self::InvalidTime { .. }
            | Self::DateParse { .. }
            | Self::Ordering { .. }
            | Self::InvalidInput { .. } => crate::EXIT_INPUT_ERROR,
            _ => crate::EXIT_CONFIG_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, DatespanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
