use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, Serializer};

/// What to do when a directory below the root cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Record the directory as skipped, warn, and keep walking.
    #[default]
    Skip,
    /// Fail the whole scan on the first unreadable directory.
    Abort,
}

/// Traversal settings shared by the scanner and the inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into symlinked directories.
    pub follow_links: bool,
    pub error_policy: ErrorPolicy,
    /// Glob patterns matched against root-relative paths and entry names.
    pub exclude: Vec<String>,
}

/// Why a directory was left out of the traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "message")]
pub enum SkipReason {
    PermissionDenied,
    NotFound,
    SymlinkLoop,
    Other(String),
}

impl SkipReason {
    #[must_use]
    pub fn from_io(error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::NotFound => Self::NotFound,
            _ => Self::Other(error.to_string()),
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("permission denied"),
            Self::NotFound => f.write_str("vanished during traversal"),
            Self::SymlinkLoop => f.write_str("symlink loop"),
            Self::Other(message) => f.write_str(message),
        }
    }
}

/// A directory whose subtree was skipped under [`ErrorPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDirectory {
    #[serde(serialize_with = "serialize_path")]
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of a single scan. Built once, never mutated by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Canonical absolute root the scan started from.
    pub root: PathBuf,
    /// Matching audio files in traversal order.
    pub matched_files: Vec<PathBuf>,
    /// Directories with no files and no subdirectories, in traversal order.
    pub empty_dirs: Vec<PathBuf>,
    /// Subtrees that could not be read.
    pub skipped: Vec<SkippedDirectory>,
    /// Number of directories entered, the root included.
    pub dirs_visited: usize,
}

impl ScanResult {
    /// Matched files relative to the root.
    #[must_use]
    pub fn relative_matched_files(&self) -> Vec<PathBuf> {
        self.matched_files
            .iter()
            .map(|p| relative_to(&self.root, p))
            .collect()
    }

    /// Empty directories relative to the root; the root itself becomes `.`.
    #[must_use]
    pub fn relative_empty_dirs(&self) -> Vec<PathBuf> {
        self.empty_dirs
            .iter()
            .map(|p| relative_to(&self.root, p))
            .collect()
    }

    #[must_use]
    pub const fn has_matches(&self) -> bool {
        !self.matched_files.is_empty()
    }
}

pub(crate) fn relative_to(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

/// Serialize a path as a string, replacing invalid UTF-8 with `U+FFFD`.
pub(crate) fn serialize_path<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

/// Same as [`serialize_path`] for a list of paths.
pub(crate) fn serialize_paths<T, S>(paths: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[PathBuf]> + ?Sized,
    S: Serializer,
{
    serializer.collect_seq(paths.as_ref().iter().map(|p| p.to_string_lossy()))
}
