#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the music-scan binary.
#[macro_export]
macro_rules! music_scan {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("music-scan"))
    };
}

/// A temporary music library plus a separate directory for reports.
pub struct TestFixture {
    pub dir: TempDir,
    pub reports: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with empty temp directories.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            reports: TempDir::new().expect("Failed to create report directory"),
        }
    }

    /// Creates a file with the given content in the library.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates an empty audio file in the library.
    pub fn create_track(&self, relative_path: &str) {
        self.create_file(relative_path, "");
    }

    /// Creates a directory in the library.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the library.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the library path as a `&str` for command arguments.
    pub fn path_str(&self) -> &str {
        self.dir.path().to_str().expect("temp path is UTF-8")
    }

    /// Returns the report directory as a `&str` for `--output-dir`.
    pub fn reports_str(&self) -> &str {
        self.reports.path().to_str().expect("temp path is UTF-8")
    }

    /// Creates a `.music-scan.toml` in the library directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".music-scan.toml", content);
    }

    /// Report files written to the report directory, sorted by name.
    pub fn report_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = fs::read_dir(self.reports.path())
            .expect("Failed to read report directory")
            .map(|e| e.expect("Failed to read entry").path())
            .collect();
        files.sort();
        files
    }

    /// Content of the only report written, panicking unless exactly one exists.
    pub fn single_report(&self) -> String {
        let files = self.report_files();
        assert_eq!(files.len(), 1, "expected one report, found {files:?}");
        fs::read_to_string(&files[0]).expect("Failed to read report")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
