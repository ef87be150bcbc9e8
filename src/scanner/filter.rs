use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{MusicScanError, Result};

/// Glob-based exclusion of files and directories from a scan.
///
/// A pattern matches either the root-relative path or the bare entry name,
/// so `Artwork` and `**/Artwork` both prune every `Artwork` directory.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    patterns: GlobSet,
}

impl ExcludeFilter {
    /// Compile the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is invalid.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| MusicScanError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let patterns = builder
            .build()
            .map_err(|e| MusicScanError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { patterns })
    }

    /// A filter that excludes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            patterns: GlobSet::empty(),
        }
    }

    #[must_use]
    pub fn is_excluded(&self, relative_path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let name_matches = relative_path
            .file_name()
            .is_some_and(|name| self.patterns.is_match(name));

        name_matches || self.patterns.is_match(relative_path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
