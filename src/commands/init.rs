use std::fs;

use crate::EXIT_SUCCESS;
use crate::error::{DatespanError, Result};

use super::report_error;

#[must_use]
pub fn run(args: &crate::cli::InitArgs) -> i32 {
    match run_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e),
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot
/// be written.
pub fn run_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(DatespanError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();

    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r"# datespan configuration file

[default]
# Include derived birth-date facts in `age` output (default: true)
facts = true

# UTC offset in minutes applied when reading the current instant (default: 0)
# Example: 120 for UTC+2, -300 for UTC-5
utc_offset_minutes = 0
"
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
