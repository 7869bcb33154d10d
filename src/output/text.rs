use std::fmt::Write;

use crate::calendar::{AgeBreakdown, Moment};
use crate::error::Result;
use crate::facts::DerivedFacts;

use super::{AgeReport, FactsReport, ReportFormatter, SpanReport};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::GREEN, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::CYAN, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_totals(&self, output: &mut String, breakdown: &AgeBreakdown) {
        output.push_str(&self.heading("Totals:"));
        output.push('\n');
        let _ = writeln!(output, "  Days:    {}", breakdown.total_days);
        let _ = writeln!(output, "  Weeks:   {}", breakdown.total_weeks);
        if self.verbose > 0 {
            let _ = writeln!(output, "  Hours:   {}", breakdown.total_hours);
            let _ = writeln!(output, "  Minutes: {}", breakdown.total_minutes);
            let _ = writeln!(output, "  Seconds: {}", breakdown.total_seconds);
        }
    }

    fn write_facts(&self, output: &mut String, facts: &DerivedFacts) {
        output.push_str(&self.heading("Facts:"));
        output.push('\n');
        let _ = writeln!(
            output,
            "  Zodiac sign:    {} ({})",
            facts.zodiac.name(),
            facts.zodiac.date_range()
        );
        match facts.birthstone.alternate() {
            Some(alternate) => {
                let _ = writeln!(
                    output,
                    "  Birthstone:     {} / {alternate}",
                    facts.birthstone.name()
                );
            }
            None => {
                let _ = writeln!(output, "  Birthstone:     {}", facts.birthstone.name());
            }
        }
        let _ = writeln!(output, "  Chinese zodiac: {}", facts.chinese_zodiac.name());
        let _ = writeln!(output, "  Generation:     {}", facts.generation.name());
        let _ = writeln!(output, "  Day of year:    {}", facts.day_of_year);
        let _ = writeln!(
            output,
            "  Leap year:      {}",
            if facts.leap_year { "yes" } else { "no" }
        );
    }
}

/// "34 years, 10 months, 26 days", extended with the sub-day remainder when
/// either endpoint carried a time of day.
fn breakdown_phrase(breakdown: &AgeBreakdown, with_time: bool) -> String {
    let mut phrase = format!(
        "{} year{}, {} month{}, {} day{}",
        breakdown.years,
        plural(breakdown.years),
        breakdown.months,
        plural(breakdown.months),
        breakdown.days,
        plural(breakdown.days),
    );
    if with_time {
        let _ = write!(
            phrase,
            ", {} hour{}, {} minute{}, {} second{}",
            breakdown.hours,
            plural(breakdown.hours),
            breakdown.minutes,
            plural(breakdown.minutes),
            breakdown.seconds,
            plural(breakdown.seconds),
        );
    }
    phrase
}

const fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn with_time(a: Moment, b: Moment) -> bool {
    a.has_time() || b.has_time()
}

impl ReportFormatter for TextFormatter {
    fn format_age(&self, report: &AgeReport) -> Result<String> {
        let mut output = String::new();

        let phrase = breakdown_phrase(&report.breakdown, with_time(report.birth, report.as_of));
        let _ = writeln!(output, "Age: {}", self.highlight(&phrase));
        let _ = writeln!(
            output,
            "Born: {} ({})",
            report.birth,
            report.birth.date().weekday().name()
        );
        let _ = writeln!(output, "As of: {}", report.as_of);

        output.push('\n');
        self.write_totals(&mut output, &report.breakdown);

        if let Some(facts) = &report.facts {
            output.push('\n');
            self.write_facts(&mut output, facts);
        }

        Ok(output)
    }

    fn format_span(&self, report: &SpanReport) -> Result<String> {
        let mut output = String::new();

        let phrase = breakdown_phrase(&report.breakdown, with_time(report.from, report.to));
        let _ = writeln!(output, "Span: {}", self.highlight(&phrase));
        let _ = writeln!(output, "From: {}", report.from);
        let _ = writeln!(output, "To: {}", report.to);

        output.push('\n');
        self.write_totals(&mut output, &report.breakdown);

        Ok(output)
    }

    fn format_facts(&self, report: &FactsReport) -> Result<String> {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "Date: {} ({})",
            report.date,
            report.date.weekday().name()
        );
        output.push('\n');
        self.write_facts(&mut output, &report.facts);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
