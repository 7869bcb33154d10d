use crate::EXIT_SUCCESS;
use crate::calendar::{Moment, between};
use crate::cli::{AgeArgs, Cli};
use crate::clock;
use crate::config::Config;
use crate::error::Result;
use crate::facts::DerivedFacts;
use crate::output::AgeReport;

use super::{load_config, make_formatter, report_error, write_output};

#[must_use]
pub fn run(args: &AgeArgs, cli: &Cli) -> i32 {
    match run_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Computes the age breakdown for a birth date.
///
/// # Errors
/// Returns an error for unparseable or impossible dates, a birth date after
/// the as-of date, or configuration problems.
pub fn run_impl(args: &AgeArgs, cli: &Cli) -> Result<()> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Parse the birth date, then resolve the as-of endpoint
    let birth: Moment = args.birth.parse()?;
    let as_of = resolve_as_of(args, &config)?;

    // 3. Compute the breakdown; ordering violations surface here
    let breakdown = between(birth, as_of)?;

    // 4. Derived facts unless disabled by flag or config
    let facts = if include_facts(args, &config) {
        Some(DerivedFacts::for_date(birth.date())?)
    } else {
        None
    };

    // 5. Format and write
    let report = AgeReport {
        birth,
        as_of,
        breakdown,
        facts,
    };
    let formatter = make_formatter(args.format, cli.color, cli.verbose);
    let output = formatter.format_age(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)
}

fn resolve_as_of(args: &AgeArgs, config: &Config) -> Result<Moment> {
    args.as_of.as_deref().map_or_else(
        || clock::current_moment(config.default.utc_offset_minutes),
        str::parse,
    )
}

/// CLI flags take precedence over config.
const fn include_facts(args: &AgeArgs, config: &Config) -> bool {
    if args.no_facts {
        false
    } else if args.facts {
        true
    } else {
        config.default.facts
    }
}

#[cfg(test)]
#[path = "age_tests.rs"]
mod tests;
