use crate::EXIT_SUCCESS;
use crate::calendar::{Moment, between};
use crate::cli::{Cli, SpanArgs};
use crate::error::Result;
use crate::output::SpanReport;

use super::{make_formatter, report_error, write_output};

#[must_use]
pub fn run(args: &SpanArgs, cli: &Cli) -> i32 {
    match run_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Computes the duration between two explicit dates.
///
/// The operands are taken as given: a start date after the end date is an
/// error, never silently swapped.
///
/// # Errors
/// Returns an error for unparseable or impossible dates, or `from > to`.
pub fn run_impl(args: &SpanArgs, cli: &Cli) -> Result<()> {
    let from: Moment = args.from.parse()?;
    let to: Moment = args.to.parse()?;

    let breakdown = between(from, to)?;

    let report = SpanReport {
        from,
        to,
        breakdown,
    };
    let formatter = make_formatter(args.format, cli.color, cli.verbose);
    let output = formatter.format_span(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
