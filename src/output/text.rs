use std::fmt::Write;
use std::path::Path;

use crate::error::Result;
use crate::report::ReportOutcome;
use crate::scanner::{DirectoryInventory, InventoryResult, ScanResult, SkippedDirectory};

use super::{ColorMode, OutputFormatter, ansi, group_thousands};

/// Human-readable console summary. Not a stable format.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_report_line(&self, out: &mut String, result: &ScanResult, outcome: &ReportOutcome) {
        match outcome {
            ReportOutcome::Written {
                path,
                bytes,
                dry_run: false,
                ..
            } => {
                let _ = writeln!(
                    out,
                    "Wrote {} bytes to {}",
                    group_thousands(*bytes as u64),
                    self.paint(&path.display().to_string(), ansi::GREEN)
                );
            }
            ReportOutcome::Written {
                path,
                bytes,
                dry_run: true,
                ..
            } => {
                let _ = writeln!(
                    out,
                    "Dry run: would write {} bytes to {}",
                    group_thousands(*bytes as u64),
                    path.display()
                );
            }
            ReportOutcome::NoFiles => {
                let _ = writeln!(
                    out,
                    "{} {}",
                    self.paint("No audio files found at", ansi::YELLOW),
                    result.root.display()
                );
            }
        }
    }

    fn write_empty_dirs(&self, out: &mut String, root: &Path, empty_dirs: &[std::path::PathBuf]) {
        if empty_dirs.is_empty() {
            let _ = writeln!(out, "No empty directories found at {}", root.display());
            return;
        }

        let _ = writeln!(out, "{}", self.paint("Empty directories:", ansi::YELLOW));
        for dir in empty_dirs {
            let _ = writeln!(out, "  {}", dir.display());
        }
    }

    fn write_skipped(&self, out: &mut String, skipped: &[SkippedDirectory]) {
        if skipped.is_empty() {
            return;
        }

        let noun = if skipped.len() == 1 {
            "directory"
        } else {
            "directories"
        };
        let heading = format!("Skipped {} unreadable {noun}:", skipped.len());
        let _ = writeln!(out, "{}", self.paint(&heading, ansi::RED));
        for dir in skipped {
            let _ = writeln!(out, "  {} ({})", dir.path.display(), dir.reason);
        }
    }

    fn write_directory(out: &mut String, dir: &DirectoryInventory) {
        let _ = writeln!(
            out,
            "Directory '{}' consumes {} bytes on disk (not including subdirectories).",
            dir.path.display(),
            group_thousands(dir.bytes)
        );
        if !dir.subdirs.is_empty() {
            let _ = writeln!(out, "  {} subdirectories:", dir.subdirs.len());
            for (i, sub) in dir.subdirs.iter().enumerate() {
                let _ = writeln!(out, "    Directory {} name: {}", i + 1, sub.display());
            }
        }
        let _ = writeln!(out, "  {} files:", dir.files.len());
        for (i, file) in dir.files.iter().enumerate() {
            let _ = writeln!(out, "    File {} name: {}", i + 1, file.display());
        }
        out.push('\n');
    }
}

impl OutputFormatter for TextFormatter {
    fn format_scan(&self, result: &ScanResult, outcome: &ReportOutcome) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "Scanned {} directories under {}",
            result.dirs_visited,
            result.root.display()
        );
        let found = format!("{} audio files", result.matched_files.len());
        let _ = writeln!(out, "Found {}", self.paint(&found, ansi::CYAN));

        if self.verbose > 0 {
            for file in &result.matched_files {
                let _ = writeln!(out, "  {}", file.display());
            }
        }

        self.write_report_line(&mut out, result, outcome);
        self.write_empty_dirs(&mut out, &result.root, &result.empty_dirs);
        self.write_skipped(&mut out, &result.skipped);

        Ok(out)
    }

    fn format_inventory(&self, inventory: &InventoryResult) -> Result<String> {
        let mut out = String::new();

        for dir in &inventory.directories {
            Self::write_directory(&mut out, dir);
        }

        let _ = writeln!(
            out,
            "Total: {} directories, {} files, {} bytes",
            inventory.directories.len(),
            inventory.total_files(),
            group_thousands(inventory.total_bytes())
        );
        self.write_empty_dirs(&mut out, &inventory.root, &inventory.empty_dirs);
        self.write_skipped(&mut out, &inventory.skipped);

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
