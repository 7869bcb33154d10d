use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::Config;
use crate::output::OutputFormat;

use super::*;

#[test]
fn validate_accepts_a_good_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("good.toml");
    fs::write(&path, "[default]\nfacts = false\nutc_offset_minutes = 60\n").unwrap();

    run_validate_impl(&path).unwrap();
}

#[test]
fn validate_rejects_missing_file() {
    let err = run_validate_impl(&PathBuf::from("no-such-file.toml")).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn validate_rejects_malformed_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.toml");
    fs::write(&path, "default = [").unwrap();

    let err = run_validate_impl(&path).unwrap_err();
    assert_eq!(err.error_type(), "TomlParse");
}

#[test]
fn validate_rejects_out_of_range_offset() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wild.toml");
    fs::write(&path, "[default]\nutc_offset_minutes = 99999\n").unwrap();

    let err = run_validate_impl(&path).unwrap_err();
    assert_eq!(err.error_type(), "Config");
}

#[test]
fn show_text_renders_all_fields() {
    let output = format_config_text(&Config::default());
    assert!(output.contains("=== Effective Configuration ==="));
    assert!(output.contains("facts = true"));
    assert!(output.contains("utc_offset_minutes = 0"));
}

#[test]
fn show_json_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cfg.toml");
    fs::write(&path, "[default]\nutc_offset_minutes = -300\n").unwrap();

    let output = run_show_impl(Some(&path), OutputFormat::Json).unwrap();
    let parsed: Config = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.default.utc_offset_minutes, -300);
}

#[test]
fn show_reads_the_given_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cfg.toml");
    fs::write(&path, "[default]\nfacts = false\n").unwrap();

    let output = run_show_impl(Some(&path), OutputFormat::Text).unwrap();
    assert!(output.contains("facts = false"));
}
