mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{Config, ReportConfig, ScannerConfig};
pub use validation::validate_config_semantics;

use crate::error::Result;
use crate::scanner::{ExtensionSet, ScanOptions};

impl Config {
    /// Traversal options described by the `[scanner]` section.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            follow_links: self.scanner.follow_links,
            error_policy: self.scanner.on_error,
            exclude: self.scanner.exclude.clone(),
        }
    }

    /// The configured extensions as a validated set.
    ///
    /// # Errors
    /// Returns an error if the extension list is empty or holds blank entries.
    pub fn extension_set(&self) -> Result<ExtensionSet> {
        ExtensionSet::new(&self.scanner.extensions)
    }
}
