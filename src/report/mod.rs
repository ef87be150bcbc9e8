//! Writes the list of matched files to a timestamped text file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

use crate::error::{MusicScanError, Result};
use crate::scanner::ScanResult;

/// Prefix of the report file name when none is configured.
pub const DEFAULT_REPORT_PREFIX: &str = "music";

/// Sortable timestamp format embedded in report file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H.%M.%S";

/// What a call to [`ReportWriter::write`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report file was written (or would have been, in a dry run).
    Written {
        path: PathBuf,
        bytes: usize,
        count: usize,
        dry_run: bool,
    },
    /// No audio files were found, so nothing was written.
    NoFiles,
}

/// Report file name for the given timestamp, e.g. `music-2024-05-01T13.45.09.txt`.
#[must_use]
pub fn report_file_name<Tz: TimeZone>(prefix: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{prefix}-{}.txt", timestamp.format(TIMESTAMP_FORMAT))
}

#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
    prefix: String,
    relative_paths: bool,
    dry_run: bool,
}

impl ReportWriter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: DEFAULT_REPORT_PREFIX.to_string(),
            relative_paths: false,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Write paths relative to the scan root instead of absolute ones.
    #[must_use]
    pub const fn with_relative_paths(mut self, relative: bool) -> Self {
        self.relative_paths = relative;
        self
    }

    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Path the report would be written to for `timestamp`.
    #[must_use]
    pub fn report_path<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> PathBuf
    where
        Tz::Offset: std::fmt::Display,
    {
        self.output_dir.join(report_file_name(&self.prefix, timestamp))
    }

    /// Render the report body: one path per line, each terminated by `\n`.
    #[must_use]
    pub fn render(&self, result: &ScanResult) -> String {
        let paths = if self.relative_paths {
            result.relative_matched_files()
        } else {
            result.matched_files.clone()
        };

        let mut body = String::new();
        for path in &paths {
            body.push_str(&path.to_string_lossy());
            body.push('\n');
        }
        body
    }

    /// Write the matched files of `result` to a file named after `timestamp`.
    ///
    /// # Errors
    /// Returns [`MusicScanError::ReportWrite`] with the attempted path if the
    /// file cannot be written.
    pub fn write<Tz: TimeZone>(
        &self,
        result: &ScanResult,
        timestamp: &DateTime<Tz>,
    ) -> Result<ReportOutcome>
    where
        Tz::Offset: std::fmt::Display,
    {
        if !result.has_matches() {
            return Ok(ReportOutcome::NoFiles);
        }

        let path = self.report_path(timestamp);
        let body = self.render(result);

        if self.dry_run {
            tracing::info!(path = %path.display(), "dry run, report not written");
        } else {
            write_report(&path, &body)?;
            tracing::info!(path = %path.display(), bytes = body.len(), "report written");
        }

        Ok(ReportOutcome::Written {
            path,
            bytes: body.len(),
            count: result.matched_files.len(),
            dry_run: self.dry_run,
        })
    }
}

fn write_report(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body).map_err(|source| MusicScanError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
