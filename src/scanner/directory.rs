use std::path::Path;

use super::extensions::ExtensionSet;
use super::filter::ExcludeFilter;
use super::types::{ScanOptions, ScanResult};
use super::walk::{self, DirectoryTally, WalkEvent};
use super::{NoopListener, ScanListener};
use crate::error::Result;

/// Recursively collects audio files and empty directories under a root.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    options: ScanOptions,
    exclude: ExcludeFilter,
}

impl DirectoryScanner {
    /// Create a scanner with the given traversal options.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(options: ScanOptions) -> Result<Self> {
        let exclude = ExcludeFilter::new(&options.exclude)?;
        Ok(Self { options, exclude })
    }

    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `root` for files whose names end with one of `extensions`.
    ///
    /// # Errors
    /// Returns an error if the root is missing, not a directory or unreadable,
    /// or if a subdirectory fails under [`super::ErrorPolicy::Abort`].
    pub fn scan(&self, root: &Path, extensions: &ExtensionSet) -> Result<ScanResult> {
        self.scan_with_listener(root, extensions, &NoopListener)
    }

    /// Same as [`Self::scan`], reporting progress to `listener`.
    ///
    /// # Errors
    /// See [`Self::scan`].
    pub fn scan_with_listener(
        &self,
        root: &Path,
        extensions: &ExtensionSet,
        listener: &dyn ScanListener,
    ) -> Result<ScanResult> {
        let root = walk::resolve_root(root)?;
        tracing::info!(root = %root.display(), extensions = %extensions, "scan started");

        let mut tally = DirectoryTally::default();
        let mut matched_files = Vec::new();
        let mut skipped = Vec::new();

        walk::walk(&root, &self.options, &self.exclude, listener, |event| {
            tally.record(&event);
            match event {
                WalkEvent::File { path } => {
                    let is_match = path
                        .file_name()
                        .is_some_and(|name| extensions.matches(&name.to_string_lossy()));
                    if is_match {
                        matched_files.push(path.to_path_buf());
                    }
                }
                WalkEvent::Skipped(dir) => skipped.push(dir),
                WalkEvent::Directory { .. } | WalkEvent::LinkedDirectory { .. } => {}
            }
        })?;

        let result = ScanResult {
            empty_dirs: tally.empty_dirs(),
            dirs_visited: tally.visited(),
            root,
            matched_files,
            skipped,
        };

        tracing::info!(
            dirs = result.dirs_visited,
            matched = result.matched_files.len(),
            empty = result.empty_dirs.len(),
            skipped = result.skipped.len(),
            "scan finished"
        );

        Ok(result)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
