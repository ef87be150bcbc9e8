use std::path::Path;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::{ColorMode, ErrorOutput};
use crate::{MusicScanError, exit_code_for};

/// Load configuration according to the global `--config` / `--no-config` flags.
///
/// # Errors
/// Returns an error if an explicit config file is missing, or if any config
/// file found cannot be read, parsed or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    if let Some(source) = &result.source {
        tracing::info!(path = %source.display(), "using configuration file");
    }
    Ok(result)
}

pub(crate) fn load_cli_config(cli: &Cli) -> crate::Result<Config> {
    load_config(cli.config.as_deref(), cli.no_config).map(|r| r.config)
}

#[must_use]
pub(crate) fn color_mode(cli: &Cli) -> ColorMode {
    cli.color.into()
}

/// Print `error` on stderr and map it to an exit code.
pub(crate) fn report_error(error: &MusicScanError, cli: &Cli) -> i32 {
    tracing::debug!(error = ?error, "command failed");
    ErrorOutput::new(color_mode(cli)).print_scan_error(error);
    exit_code_for(error)
}

/// Print command output on stdout unless `quiet` is set.
pub(crate) fn write_output(content: &str, quiet: bool) {
    if !quiet {
        print!("{content}");
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
