mod directory;
mod extensions;
mod filter;
mod inventory;
mod types;
mod walk;

use std::path::Path;

pub use directory::DirectoryScanner;
pub use extensions::{DEFAULT_AUDIO_EXTENSIONS, ExtensionSet};
pub use filter::ExcludeFilter;
pub use inventory::{
    DirectoryInventory, InventoryResult, take_inventory, take_inventory_with_listener,
};
pub use types::{ErrorPolicy, ScanOptions, ScanResult, SkipReason, SkippedDirectory};
pub(crate) use types::{serialize_path, serialize_paths};

/// Observer for traversal progress.
///
/// The scan result never depends on the listener; it only sees what the
/// walker is doing.
pub trait ScanListener {
    /// Called once for every directory that is entered.
    fn directory_visited(&self, _path: &Path) {}

    /// Called when a subtree is skipped under [`ErrorPolicy::Skip`].
    fn directory_skipped(&self, _skipped: &SkippedDirectory) {}
}

/// Listener that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl ScanListener for NoopListener {}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
