use super::*;
use crate::calendar::{CalendarDate, TimeOfDay, between};

fn moment(year: i32, month: u8, day: u8) -> Moment {
    Moment::midnight(CalendarDate::new(year, month, day).unwrap())
}

fn sample_age_report(with_facts: bool) -> AgeReport {
    let birth = moment(1990, 3, 15);
    let as_of = moment(2025, 2, 10);
    AgeReport {
        birth,
        as_of,
        breakdown: between(birth, as_of).unwrap(),
        facts: with_facts.then(|| DerivedFacts::for_date(birth.date()).unwrap()),
    }
}

#[test]
fn age_text_contains_breakdown_phrase() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter.format_age(&sample_age_report(false)).unwrap();

    assert!(output.contains("Age: 34 years, 10 months, 26 days"));
    assert!(output.contains("Born: 1990-03-15 (Thursday)"));
    assert!(output.contains("As of: 2025-02-10"));
    assert!(output.contains("Days:    12751"));
    assert!(!output.contains("Facts:"));
}

#[test]
fn age_text_includes_facts_block() {
    let formatter = TextFormatter::new(ColorMode::Never);
    let output = formatter.format_age(&sample_age_report(true)).unwrap();

    assert!(output.contains("Facts:"));
    assert!(output.contains("Pisces"));
    assert!(output.contains("Aquamarine"));
    assert!(output.contains("Horse"));
    assert!(output.contains("Millennial"));
    assert!(output.contains("Day of year:    74"));
}

#[test]
fn verbose_adds_fine_grained_totals() {
    let report = sample_age_report(false);

    let base = TextFormatter::new(ColorMode::Never)
        .format_age(&report)
        .unwrap();
    assert!(!base.contains("Seconds:"));

    let verbose = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format_age(&report)
        .unwrap();
    assert!(verbose.contains("Hours:   306024"));
    assert!(verbose.contains("Seconds: 1101686400"));
}

#[test]
fn singular_units_drop_the_plural_s() {
    let from = moment(2024, 1, 1);
    let to = moment(2025, 2, 2);
    let report = SpanReport {
        from,
        to,
        breakdown: between(from, to).unwrap(),
    };

    let output = TextFormatter::new(ColorMode::Never)
        .format_span(&report)
        .unwrap();
    assert!(output.contains("Span: 1 year, 1 month, 1 day"));
}

#[test]
fn time_of_day_extends_the_phrase() {
    let from = Moment::new(
        CalendarDate::new(2024, 1, 1).unwrap(),
        TimeOfDay::new(8, 0, 0).unwrap(),
    );
    let to = Moment::new(
        CalendarDate::new(2024, 1, 1).unwrap(),
        TimeOfDay::new(9, 30, 5).unwrap(),
    );
    let report = SpanReport {
        from,
        to,
        breakdown: between(from, to).unwrap(),
    };

    let output = TextFormatter::new(ColorMode::Never)
        .format_span(&report)
        .unwrap();
    assert!(output.contains("1 hour, 30 minutes, 5 seconds"));
    assert!(output.contains("From: 2024-01-01T08:00:00"));
}

#[test]
fn facts_text_lists_every_lookup() {
    let date = CalendarDate::new(2000, 2, 29).unwrap();
    let report = FactsReport {
        date,
        facts: DerivedFacts::for_date(date).unwrap(),
    };

    let output = TextFormatter::new(ColorMode::Never)
        .format_facts(&report)
        .unwrap();
    assert!(output.contains("Date: 2000-02-29 (Tuesday)"));
    assert!(output.contains("Zodiac sign:    Pisces (Feb 19 - Mar 20)"));
    assert!(output.contains("Birthstone:     Amethyst"));
    assert!(output.contains("Chinese zodiac: Dragon"));
    assert!(output.contains("Generation:     Generation Z"));
    assert!(output.contains("Leap year:      yes"));
}

#[test]
fn always_mode_emits_ansi_codes() {
    let output = TextFormatter::new(ColorMode::Always)
        .format_age(&sample_age_report(false))
        .unwrap();
    assert!(output.contains("\x1b[32m"));

    let plain = TextFormatter::new(ColorMode::Never)
        .format_age(&sample_age_report(false))
        .unwrap();
    assert!(!plain.contains('\x1b'));
}
