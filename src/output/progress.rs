use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::ErrorOutput;
use crate::scanner::{ScanListener, SkippedDirectory};

/// Spinner counting directories while a scan runs.
///
/// The spinner is disabled in quiet mode or when stderr is not a TTY. Skipped
/// subtrees are always reported as warnings, above the spinner when it is visible.
pub struct ScanProgress {
    spinner: ProgressBar,
    errors: ErrorOutput,
}

impl ScanProgress {
    /// Creates a new spinner on stderr.
    ///
    /// # Panics
    ///
    /// This function will panic if the spinner template is invalid.
    /// The template is a compile-time constant, so this should never happen.
    #[must_use]
    pub fn new(quiet: bool, errors: ErrorOutput) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty, errors)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool, errors: ErrorOutput) -> Self {
        let spinner = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };

        Self { spinner, errors }
    }

    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Scanning {pos} directories {wide_msg:.dim}")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Number of directories reported so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.spinner.position()
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ScanListener for ScanProgress {
    fn directory_visited(&self, path: &Path) {
        self.spinner.inc(1);
        if !self.spinner.is_hidden() {
            self.spinner.set_message(path.display().to_string());
        }
    }

    fn directory_skipped(&self, skipped: &SkippedDirectory) {
        self.spinner.suspend(|| self.errors.print_skipped(skipped));
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
