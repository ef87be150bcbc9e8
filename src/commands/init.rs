use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_SUCCESS, MusicScanError, Result};

use super::context::report_error;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => report_error(&e, cli),
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(MusicScanError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# music-scan configuration file

[scanner]
# Audio extensions to match, without the dot. Matching is case-sensitive:
# "flac" matches "song.flac" but not "SONG.FLAC".
extensions = ["flac", "m4a", "mp3", "wav", "aac", "ogg"]

# Glob patterns for files and directories to ignore entirely.
# Excluded directories are not descended and never reported as empty.
exclude = []

# Descend into symlinked directories (default: false)
follow_links = false

# Unreadable directories: "skip" records and continues, "abort" fails the scan
on_error = "skip"

[report]
# Report file name is <prefix>-<YYYY-MM-DDTHH.MM.SS>.txt
prefix = "music"

# Directory to write the report to (default: current directory)
# output_dir = "reports"

# Write paths relative to the scanned directory instead of absolute paths
relative_paths = false
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
