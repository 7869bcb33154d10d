#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the datespan binary.
#[macro_export]
macro_rules! datespan {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("datespan"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a datespan config file in the fixture directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".datespan.toml", content);
    }
}

/// A minimal valid configuration.
pub const BASIC_CONFIG: &str = "[default]\nfacts = true\nutc_offset_minutes = 0\n";

/// A configuration that disables derived facts in `age` output.
pub const NO_FACTS_CONFIG: &str = "[default]\nfacts = false\n";
