use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scanner::{DEFAULT_AUDIO_EXTENSIONS, ErrorPolicy};

/// Scanner configuration for traversal and matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Audio extensions to match, without a leading dot. Case-sensitive.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to ignore entirely.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Descend into symlinked directories (default: false).
    #[serde(default)]
    pub follow_links: bool,

    /// What to do with unreadable directories: "skip" (default) or "abort".
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            follow_links: false,
            on_error: ErrorPolicy::Skip,
        }
    }
}

/// Report file configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// File name prefix; the report is named `<prefix>-<timestamp>.txt`.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Directory the report is written to (default: current directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Write root-relative paths instead of absolute ones.
    #[serde(default)]
    pub relative_paths: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            output_dir: None,
            relative_paths: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_AUDIO_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_prefix() -> String {
    crate::report::DEFAULT_REPORT_PREFIX.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
