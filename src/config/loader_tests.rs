use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::*;

/// In-memory filesystem for loader tests.
#[derive(Default)]
struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    fn with_config_dir(mut self, dir: &str) -> Self {
        self.config_dir = Some(PathBuf::from(dir));
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn load_prefers_local_config() {
    let fs = MockFileSystem::default()
        .with_file(".datespan.toml", "[default]\nfacts = false\n")
        .with_config_dir("/home/user/.config/datespan")
        .with_file(
            "/home/user/.config/datespan/config.toml",
            "[default]\nutc_offset_minutes = 60\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!(!config.default.facts);
    assert_eq!(config.default.utc_offset_minutes, 0);
}

#[test]
fn load_falls_back_to_user_config() {
    let fs = MockFileSystem::default()
        .with_config_dir("/home/user/.config/datespan")
        .with_file(
            "/home/user/.config/datespan/config.toml",
            "[default]\nutc_offset_minutes = 60\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.default.utc_offset_minutes, 60);
}

#[test]
fn load_defaults_when_nothing_found() {
    let fs = MockFileSystem::default();
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_path_reads_the_given_file() {
    let fs = MockFileSystem::default().with_file("custom.toml", "[default]\nfacts = false\n");

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("custom.toml"))
        .unwrap();
    assert!(!config.default.facts);
}

#[test]
fn load_from_path_missing_file_is_an_error() {
    let fs = MockFileSystem::default();
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("nope.toml"))
        .unwrap_err();
    assert_eq!(err.error_type(), "IO");
}

#[test]
fn load_rejects_malformed_toml() {
    let fs = MockFileSystem::default().with_file(".datespan.toml", "default = [");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert_eq!(err.error_type(), "TomlParse");
}

#[test]
fn load_rejects_out_of_range_offset() {
    let fs = MockFileSystem::default()
        .with_file(".datespan.toml", "[default]\nutc_offset_minutes = 100000\n");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert_eq!(err.error_type(), "Config");
}
