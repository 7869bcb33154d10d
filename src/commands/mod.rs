pub mod age;
pub mod config;
pub mod facts;
pub mod init;
pub mod span;

use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{DatespanError, Result};
use crate::output::{ColorMode, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

pub(crate) fn make_formatter(
    format: OutputFormat,
    color: ColorChoice,
    verbose: u8,
) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(
            color_choice_to_mode(color),
            verbose,
        )),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

/// Prints the error (and its hint, when one exists) and maps it to an exit
/// code: input errors exit 1, everything else 2.
pub(crate) fn report_error(error: &DatespanError) -> i32 {
    eprintln!("Error: {error}");
    if let Some(hint) = error.suggestion() {
        eprintln!("  hint: {hint}");
    }
    error.exit_code()
}
