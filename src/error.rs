use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MusicScanError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory: {}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl MusicScanError {
    /// Classify an I/O failure on `path` into the matching traversal variant.
    #[must_use]
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Traversal { path, source },
        }
    }

    /// Short label used as the heading of printed errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::PathNotFound { .. } => "PathNotFound",
            Self::NotADirectory { .. } => "NotADirectory",
            Self::PermissionDenied { .. } => "PermissionDenied",
            Self::Traversal { .. } => "Traversal",
            Self::ReportWrite { .. } => "IOErrorOnWrite",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Underlying cause, if any, rendered for the `×` detail line.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::PermissionDenied { source, .. }
            | Self::Traversal { source, .. }
            | Self::ReportWrite { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// An actionable hint for the user, if one applies.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::PathNotFound { .. } => {
                Some("Check that the directory exists and is spelled correctly.")
            }
            Self::NotADirectory { .. } => Some("Pass a directory to scan, not a file."),
            Self::PermissionDenied { .. } => {
                Some("Check the directory permissions or run without --fail-fast to skip it.")
            }
            Self::ReportWrite { .. } => {
                Some("Use --output-dir to write the report somewhere writable.")
            }
            Self::InvalidPattern { .. } => {
                Some("Exclude patterns use glob syntax, e.g. \"**/Artwork\" or \"Artwork\".")
            }
            Self::TomlParse(_) => {
                Some("Run `music-scan init` to generate a valid configuration file.")
            }
            _ => None,
        }
    }

    /// Whether this error comes from configuration or usage rather than the scan itself.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MusicScanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
