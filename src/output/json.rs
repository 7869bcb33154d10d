use serde::Serialize;

use crate::calendar::AgeBreakdown;
use crate::error::Result;
use crate::facts::DerivedFacts;

use super::{AgeReport, FactsReport, ReportFormatter, SpanReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct AgeJson {
    birth: String,
    as_of: String,
    breakdown: BreakdownJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    facts: Option<FactsJson>,
}

#[derive(Serialize)]
struct SpanJson {
    from: String,
    to: String,
    breakdown: BreakdownJson,
}

#[derive(Serialize)]
struct FactsFileJson {
    date: String,
    facts: FactsJson,
}

#[derive(Serialize)]
struct BreakdownJson {
    years: u32,
    months: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
    total_days: u64,
    total_weeks: u64,
    total_hours: u64,
    total_minutes: u64,
    total_seconds: u64,
}

#[derive(Serialize)]
struct FactsJson {
    zodiac: String,
    zodiac_range: String,
    birthstone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthstone_alternate: Option<String>,
    chinese_zodiac: String,
    generation: String,
    weekday: String,
    day_of_year: u16,
    leap_year: bool,
}

impl ReportFormatter for JsonFormatter {
    fn format_age(&self, report: &AgeReport) -> Result<String> {
        let output = AgeJson {
            birth: report.birth.to_string(),
            as_of: report.as_of.to_string(),
            breakdown: convert_breakdown(&report.breakdown),
            facts: report.facts.as_ref().map(convert_facts),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_span(&self, report: &SpanReport) -> Result<String> {
        let output = SpanJson {
            from: report.from.to_string(),
            to: report.to.to_string(),
            breakdown: convert_breakdown(&report.breakdown),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_facts(&self, report: &FactsReport) -> Result<String> {
        let output = FactsFileJson {
            date: report.date.to_string(),
            facts: convert_facts(&report.facts),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

const fn convert_breakdown(breakdown: &AgeBreakdown) -> BreakdownJson {
    BreakdownJson {
        years: breakdown.years,
        months: breakdown.months,
        days: breakdown.days,
        hours: breakdown.hours,
        minutes: breakdown.minutes,
        seconds: breakdown.seconds,
        total_days: breakdown.total_days,
        total_weeks: breakdown.total_weeks,
        total_hours: breakdown.total_hours,
        total_minutes: breakdown.total_minutes,
        total_seconds: breakdown.total_seconds,
    }
}

fn convert_facts(facts: &DerivedFacts) -> FactsJson {
    FactsJson {
        zodiac: facts.zodiac.name().to_string(),
        zodiac_range: facts.zodiac.date_range().to_string(),
        birthstone: facts.birthstone.name().to_string(),
        birthstone_alternate: facts.birthstone.alternate().map(str::to_string),
        chinese_zodiac: facts.chinese_zodiac.name().to_string(),
        generation: facts.generation.name().to_string(),
        weekday: facts.weekday.name().to_string(),
        day_of_year: facts.day_of_year,
        leap_year: facts.leap_year,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
