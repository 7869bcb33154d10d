use crate::EXIT_SUCCESS;
use crate::calendar::Moment;
use crate::cli::{Cli, FactsArgs};
use crate::error::Result;
use crate::facts::DerivedFacts;
use crate::output::FactsReport;

use super::{make_formatter, report_error, write_output};

#[must_use]
pub fn run(args: &FactsArgs, cli: &Cli) -> i32 {
    match run_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Looks up the derived facts for a date; a time-of-day suffix is accepted
/// and ignored.
///
/// # Errors
/// Returns an error for unparseable or impossible dates, or a year before
/// the generation table starts.
pub fn run_impl(args: &FactsArgs, cli: &Cli) -> Result<()> {
    let date = args.date.parse::<Moment>()?.date();

    let report = FactsReport {
        date,
        facts: DerivedFacts::for_date(date)?,
    };
    let formatter = make_formatter(args.format, cli.color, cli.verbose);
    let output = formatter.format_facts(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)
}

#[cfg(test)]
#[path = "facts_tests.rs"]
mod tests;
