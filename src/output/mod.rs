mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::calendar::{AgeBreakdown, CalendarDate, Moment};
use crate::error::Result;
use crate::facts::DerivedFacts;

/// Everything the `age` command computed for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct AgeReport {
    pub birth: Moment,
    pub as_of: Moment,
    pub breakdown: AgeBreakdown,
    pub facts: Option<DerivedFacts>,
}

/// Result of the general two-date `span` command.
#[derive(Debug, Clone, Copy)]
pub struct SpanReport {
    pub from: Moment,
    pub to: Moment,
    pub breakdown: AgeBreakdown,
}

/// Result of the `facts` command.
#[derive(Debug, Clone, Copy)]
pub struct FactsReport {
    pub date: CalendarDate,
    pub facts: DerivedFacts,
}

/// Trait for formatting reports into various output formats.
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_age(&self, report: &AgeReport) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_span(&self, report: &SpanReport) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_facts(&self, report: &FactsReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
