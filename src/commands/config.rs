use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{DatespanError, Result};
use crate::output::OutputFormat;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::load_config;

#[must_use]
pub fn run(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_validate(config),
        ConfigAction::Show { config, format } => run_show(config.as_deref(), *format, cli),
    }
}

fn run_validate(config_path: &Path) -> i32 {
    match run_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file's syntax and value ranges.
///
/// # Errors
/// Returns an error when the file is missing, malformed, or out of range.
pub fn run_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(DatespanError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    Ok(())
}

fn run_show(config_path: Option<&Path>, format: OutputFormat, cli: &Cli) -> i32 {
    match run_show_impl(config_path, format) {
        Ok(output) => {
            if !cli.quiet {
                print!("{output}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration after the normal search order.
///
/// # Errors
/// Returns an error when loading or serialization fails.
pub fn run_show_impl(config_path: Option<&Path>, format: OutputFormat) -> Result<String> {
    let config = load_config(config_path, false)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[default]\n");
    let _ = writeln!(output, "  facts = {}", config.default.facts);
    let _ = writeln!(
        output,
        "  utc_offset_minutes = {}",
        config.default.utc_offset_minutes
    );

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
