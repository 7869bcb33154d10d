use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::cli::{Cli, ColorChoice, Commands, FactsArgs, InitArgs};
use crate::output::OutputFormat;

use super::*;

fn make_cli() -> Cli {
    Cli {
        command: Commands::Init(InitArgs {
            output: PathBuf::from(".datespan.toml"),
            force: false,
        }),
        verbose: 0,
        quiet: true,
        color: ColorChoice::Never,
        no_config: true,
    }
}

#[test]
fn run_impl_writes_facts_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("facts.txt");

    let args = FactsArgs {
        date: "2000-02-29".to_string(),
        format: OutputFormat::Text,
        output: Some(out_path.clone()),
    };
    run_impl(&args, &make_cli()).unwrap();

    let content = fs::read_to_string(&out_path).unwrap();
    assert!(content.contains("Pisces"));
    assert!(content.contains("Dragon"));
    assert!(content.contains("Leap year:      yes"));
}

#[test]
fn run_impl_ignores_time_suffix() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("facts.txt");

    let args = FactsArgs {
        date: "2000-02-29T08:30".to_string(),
        format: OutputFormat::Json,
        output: Some(out_path.clone()),
    };
    run_impl(&args, &make_cli()).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(parsed["date"], "2000-02-29");
}

#[test]
fn run_impl_rejects_impossible_date() {
    let args = FactsArgs {
        date: "2001-02-29".to_string(),
        format: OutputFormat::Text,
        output: None,
    };
    let err = run_impl(&args, &make_cli()).unwrap_err();
    assert_eq!(err.error_type(), "InvalidDate");
}

#[test]
fn run_impl_rejects_pre_table_year() {
    let args = FactsArgs {
        date: "1700-01-01".to_string(),
        format: OutputFormat::Text,
        output: None,
    };
    let err = run_impl(&args, &make_cli()).unwrap_err();
    assert_eq!(err.error_type(), "InvalidInput");
}
