use std::fmt::Write;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, LoadResult};
use crate::output::OutputFormat;
use crate::{EXIT_SUCCESS, Result};

use super::context::{load_config, report_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Show { format } => run_config_show(*format, cli),
    }
}

fn run_config_show(format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_error(&e, cli),
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(format: OutputFormat, cli: &Cli) -> Result<String> {
    let loaded = load_config(cli.config.as_deref(), cli.no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub(crate) fn format_config_text(loaded: &LoadResult) -> String {
    let config: &Config = &loaded.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    match &loaded.source {
        Some(path) => {
            let _ = writeln!(output, "# from {}", path.display());
        }
        None => output.push_str("# built-in defaults\n"),
    }

    output.push_str("\n[scanner]\n");
    let _ = writeln!(output, "  extensions = {:?}", config.scanner.extensions);
    if !config.scanner.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.scanner.exclude);
    }
    let _ = writeln!(output, "  follow_links = {}", config.scanner.follow_links);
    let on_error = match config.scanner.on_error {
        crate::scanner::ErrorPolicy::Skip => "skip",
        crate::scanner::ErrorPolicy::Abort => "abort",
    };
    let _ = writeln!(output, "  on_error = \"{on_error}\"");

    output.push_str("\n[report]\n");
    let _ = writeln!(output, "  prefix = \"{}\"", config.report.prefix);
    if let Some(dir) = &config.report.output_dir {
        let _ = writeln!(output, "  output_dir = \"{}\"", dir.display());
    }
    let _ = writeln!(output, "  relative_paths = {}", config.report.relative_paths);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
