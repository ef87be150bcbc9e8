use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::report::ReportOutcome;
use crate::scanner::{
    InventoryResult, ScanResult, SkippedDirectory, serialize_path, serialize_paths,
};

use super::OutputFormatter;

/// Machine-readable summary. Field names are stable.
pub struct JsonFormatter;

#[derive(Serialize)]
struct ScanOutput<'a> {
    #[serde(serialize_with = "serialize_path")]
    root: &'a PathBuf,
    summary: Summary,
    report: Option<ReportInfo<'a>>,
    #[serde(serialize_with = "serialize_paths")]
    matched_files: &'a [PathBuf],
    #[serde(serialize_with = "serialize_paths")]
    empty_dirs: &'a [PathBuf],
    skipped: &'a [SkippedDirectory],
}

#[derive(Serialize)]
struct Summary {
    dirs_visited: usize,
    matched_files: usize,
    empty_dirs: usize,
    skipped: usize,
}

#[derive(Serialize)]
struct ReportInfo<'a> {
    #[serde(serialize_with = "serialize_path")]
    path: &'a PathBuf,
    bytes: usize,
    written: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format_scan(&self, result: &ScanResult, outcome: &ReportOutcome) -> Result<String> {
        let report = match outcome {
            ReportOutcome::Written {
                path,
                bytes,
                dry_run,
                ..
            } => Some(ReportInfo {
                path,
                bytes: *bytes,
                written: !dry_run,
            }),
            ReportOutcome::NoFiles => None,
        };

        let output = ScanOutput {
            root: &result.root,
            summary: Summary {
                dirs_visited: result.dirs_visited,
                matched_files: result.matched_files.len(),
                empty_dirs: result.empty_dirs.len(),
                skipped: result.skipped.len(),
            },
            report,
            matched_files: &result.matched_files,
            empty_dirs: &result.empty_dirs,
            skipped: &result.skipped,
        };

        Ok(serde_json::to_string_pretty(&output)? + "\n")
    }

    fn format_inventory(&self, inventory: &InventoryResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(inventory)? + "\n")
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
