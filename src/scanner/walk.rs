//! Directory traversal shared by the scanner and the inventory.
//!
//! Wraps `walkdir` so callers see one event per entry, with the error policy,
//! exclude patterns and symlink classification already applied.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use walkdir::{DirEntry, WalkDir};

use super::filter::ExcludeFilter;
use super::types::{ErrorPolicy, ScanOptions, SkipReason, SkippedDirectory, relative_to};
use super::ScanListener;
use crate::error::{MusicScanError, Result};

pub(crate) enum WalkEvent<'p> {
    /// A directory that is entered and listed.
    Directory { path: &'p Path },
    /// A symlinked directory that is counted but not descended.
    LinkedDirectory { path: &'p Path },
    File { path: &'p Path },
    Skipped(SkippedDirectory),
}

/// Check the root up front and return its canonical form.
///
/// # Errors
/// Fails with `PathNotFound`, `NotADirectory` or `PermissionDenied` before
/// any traversal happens.
pub(crate) fn resolve_root(root: &Path) -> Result<PathBuf> {
    let to_error = |e: std::io::Error| MusicScanError::from_io(root.to_path_buf(), e);

    let metadata = fs::metadata(root).map_err(to_error)?;
    if !metadata.is_dir() {
        return Err(MusicScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    fs::read_dir(root).map_err(to_error)?;

    dunce::canonicalize(root).map_err(to_error)
}

/// Files sort before directories so one directory's files stay contiguous,
/// then entries sort by name for a stable order.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Walk `root` (already resolved) and feed every entry to `on_event`.
///
/// # Errors
/// Returns an error only under [`ErrorPolicy::Abort`], for the first
/// directory that cannot be read.
pub(crate) fn walk<F>(
    root: &Path,
    options: &ScanOptions,
    exclude: &ExcludeFilter,
    listener: &dyn ScanListener,
    mut on_event: F,
) -> Result<()>
where
    F: FnMut(WalkEvent<'_>),
{
    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !exclude.is_excluded(&relative_to(root, e.path())));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(link) = dangling_symlink(&err) {
                    if !exclude.is_excluded(&relative_to(root, &link)) {
                        tracing::debug!(path = %link.display(), "dangling symlink");
                        on_event(WalkEvent::File { path: &link });
                    }
                    continue;
                }
                let skipped = handle_walk_error(root, err, options.error_policy)?;
                tracing::info!(
                    path = %skipped.path.display(),
                    reason = %skipped.reason,
                    "skipping unreadable directory"
                );
                listener.directory_skipped(&skipped);
                on_event(WalkEvent::Skipped(skipped));
                continue;
            }
        };

        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            tracing::debug!(path = %path.display(), depth = entry.depth(), "visiting directory");
            listener.directory_visited(path);
            on_event(WalkEvent::Directory { path });
        } else if file_type.is_symlink() && points_to_directory(path) {
            tracing::debug!(path = %path.display(), "not following directory symlink");
            on_event(WalkEvent::LinkedDirectory { path });
        } else {
            on_event(WalkEvent::File { path });
        }
    }

    Ok(())
}

fn points_to_directory(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}

/// A followed symlink whose target is missing. The walker reports it as an
/// error, but it is still a file entry of its parent.
fn dangling_symlink(err: &walkdir::Error) -> Option<PathBuf> {
    let not_found = err
        .io_error()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound);
    if !not_found || err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    fs::symlink_metadata(path)
        .is_ok_and(|m| m.file_type().is_symlink())
        .then(|| path.to_path_buf())
}

fn handle_walk_error(
    root: &Path,
    err: walkdir::Error,
    policy: ErrorPolicy,
) -> Result<SkippedDirectory> {
    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let is_loop = err.loop_ancestor().is_some();
    let source = std::io::Error::from(err);

    if policy == ErrorPolicy::Abort || path == root {
        return Err(MusicScanError::from_io(path, source));
    }

    let reason = if is_loop {
        SkipReason::SymlinkLoop
    } else {
        SkipReason::from_io(&source)
    };

    Ok(SkippedDirectory { path, reason })
}

#[derive(Debug, Default, Clone, Copy)]
struct ChildCounts {
    subdirs: usize,
    files: usize,
    unreadable: bool,
}

/// Per-directory child counts in first-visit order, used to find empty
/// directories once the walk is done.
#[derive(Debug, Default)]
pub(crate) struct DirectoryTally {
    dirs: IndexMap<PathBuf, ChildCounts>,
}

impl DirectoryTally {
    pub(crate) fn record(&mut self, event: &WalkEvent<'_>) {
        match event {
            WalkEvent::Directory { path } => {
                self.dirs.entry(path.to_path_buf()).or_default();
                self.bump_parent(path, |c| c.subdirs += 1);
            }
            WalkEvent::LinkedDirectory { path } => self.bump_parent(path, |c| c.subdirs += 1),
            WalkEvent::File { path } => self.bump_parent(path, |c| c.files += 1),
            WalkEvent::Skipped(skipped) => {
                if let Some(counts) = self.dirs.get_mut(&skipped.path) {
                    counts.unreadable = true;
                } else {
                    // Never entered (e.g. a symlink loop): still a child of its parent.
                    self.bump_parent(&skipped.path, |c| c.subdirs += 1);
                }
            }
        }
    }

    fn bump_parent(&mut self, path: &Path, bump: impl FnOnce(&mut ChildCounts)) {
        if let Some(counts) = path.parent().and_then(|p| self.dirs.get_mut(p)) {
            bump(counts);
        }
    }

    pub(crate) fn visited(&self) -> usize {
        self.dirs.len()
    }

    pub(crate) fn empty_dirs(&self) -> Vec<PathBuf> {
        self.dirs
            .iter()
            .filter(|(_, c)| !c.unreadable && c.subdirs == 0 && c.files == 0)
            .map(|(path, _)| path.clone())
            .collect()
    }
}
