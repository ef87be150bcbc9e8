use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use super::filter::ExcludeFilter;
use super::types::{ScanOptions, SkippedDirectory, serialize_path, serialize_paths};
use super::walk::{self, DirectoryTally, WalkEvent};
use super::{NoopListener, ScanListener};
use crate::error::Result;

/// Direct children of one directory and the bytes its own files occupy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryInventory {
    #[serde(serialize_with = "serialize_path")]
    pub path: PathBuf,
    #[serde(serialize_with = "serialize_paths")]
    pub subdirs: Vec<PathBuf>,
    #[serde(serialize_with = "serialize_paths")]
    pub files: Vec<PathBuf>,
    /// Sum of file sizes in this directory, subdirectories excluded.
    pub bytes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryResult {
    #[serde(serialize_with = "serialize_path")]
    pub root: PathBuf,
    /// One entry per visited directory, in traversal order.
    pub directories: Vec<DirectoryInventory>,
    #[serde(serialize_with = "serialize_paths")]
    pub empty_dirs: Vec<PathBuf>,
    pub skipped: Vec<SkippedDirectory>,
}

impl InventoryResult {
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.directories.iter().map(|d| d.files.len()).sum()
    }

    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.directories.iter().map(|d| d.bytes).sum()
    }
}

/// List every directory under `root` with its children and file sizes.
///
/// # Errors
/// Same failure modes as [`super::DirectoryScanner::scan`], plus invalid
/// exclude patterns.
pub fn take_inventory(root: &Path, options: &ScanOptions) -> Result<InventoryResult> {
    take_inventory_with_listener(root, options, &NoopListener)
}

/// Same as [`take_inventory`], reporting progress to `listener`.
///
/// # Errors
/// See [`take_inventory`].
pub fn take_inventory_with_listener(
    root: &Path,
    options: &ScanOptions,
    listener: &dyn ScanListener,
) -> Result<InventoryResult> {
    let exclude = ExcludeFilter::new(&options.exclude)?;
    let root = walk::resolve_root(root)?;

    let mut tally = DirectoryTally::default();
    let mut directories: IndexMap<PathBuf, DirectoryInventory> = IndexMap::new();
    let mut skipped = Vec::new();

    walk::walk(&root, options, &exclude, listener, |event| {
        tally.record(&event);
        match event {
            WalkEvent::Directory { path } => {
                directories.insert(
                    path.to_path_buf(),
                    DirectoryInventory {
                        path: path.to_path_buf(),
                        ..DirectoryInventory::default()
                    },
                );
                if let Some(parent) = parent_entry(&mut directories, path) {
                    parent.subdirs.push(path.to_path_buf());
                }
            }
            WalkEvent::LinkedDirectory { path } => {
                if let Some(parent) = parent_entry(&mut directories, path) {
                    parent.subdirs.push(path.to_path_buf());
                }
            }
            WalkEvent::File { path } => {
                let size = file_size(path);
                if let Some(parent) = parent_entry(&mut directories, path) {
                    parent.files.push(path.to_path_buf());
                    parent.bytes += size;
                }
            }
            WalkEvent::Skipped(dir) => skipped.push(dir),
        }
    })?;

    Ok(InventoryResult {
        root,
        directories: directories.into_values().collect(),
        empty_dirs: tally.empty_dirs(),
        skipped,
    })
}

fn parent_entry<'a>(
    directories: &'a mut IndexMap<PathBuf, DirectoryInventory>,
    path: &Path,
) -> Option<&'a mut DirectoryInventory> {
    path.parent().and_then(|p| directories.get_mut(p))
}

fn file_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot stat file, counting 0 bytes");
            0
        }
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
