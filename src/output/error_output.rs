//! Unified error and warning output formatting with color support.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::error::MusicScanError;
use crate::scanner::SkippedDirectory;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !Self::is_no_color_set() && std::io::stderr().is_terminal(),
        }
    }

    /// Prints a scan or configuration error with its cause and hint.
    pub fn print_scan_error(&self, error: &MusicScanError) {
        let mut stderr = std::io::stderr().lock();
        self.write_scan_error(&mut stderr, error);
    }

    /// Writes a scan or configuration error to a writer.
    pub fn write_scan_error<W: Write>(&self, w: &mut W, error: &MusicScanError) {
        let detail = error.detail();
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            error.suggestion(),
        );
    }

    /// Prints a warning for a subtree that was skipped during traversal.
    pub fn print_skipped(&self, skipped: &SkippedDirectory) {
        let mut stderr = std::io::stderr().lock();
        self.write_skipped(&mut stderr, skipped);
    }

    /// Writes a skipped-subtree warning to a writer.
    pub fn write_skipped<W: Write>(&self, w: &mut W, skipped: &SkippedDirectory) {
        let message = format!("skipped {}", skipped.path.display());
        let reason = skipped.reason.to_string();
        self.write_warning(w, &message, Some(&reason), None);
    }

    /// Writes an error heading plus optional detail and hint.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are ignored: there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        self.write_tail(w, detail, suggestion);
    }

    /// Writes a warning heading plus optional detail and hint.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }

        self.write_tail(w, detail, suggestion);
    }

    fn write_tail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Checks if `NO_COLOR` environment variable is set.
    /// Per <https://no-color.org>: presence of the variable (any value) disables color.
    fn is_no_color_set() -> bool {
        std::env::var("NO_COLOR").is_ok()
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
