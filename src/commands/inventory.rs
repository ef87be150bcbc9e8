use crate::cli::{Cli, InventoryArgs};
use crate::config::{Config, validate_config_semantics};
use crate::output::{
    ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter,
};
use crate::scanner::{ErrorPolicy, InventoryResult, take_inventory_with_listener};
use crate::{EXIT_SUCCESS, Result};

use super::context::{color_mode, load_cli_config, report_error, write_output};

#[must_use]
pub fn run_inventory(args: &InventoryArgs, cli: &Cli) -> i32 {
    match run_inventory_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e, cli),
    }
}

/// Lists every directory under `args.path` with its children and sizes.
///
/// # Errors
/// Returns an error if the configuration is invalid, the root cannot be
/// listed, or a subtree fails under `--fail-fast`.
pub(crate) fn run_inventory_impl(args: &InventoryArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_cli_config(cli)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    let progress = ScanProgress::new(cli.quiet, ErrorOutput::new(color_mode(cli)));
    let listed = take_inventory_with_listener(&args.path, &config.scan_options(), &progress);
    progress.finish();
    let inventory = listed?;

    let output = format_output(args.format, &inventory, cli)?;
    write_output(&output, cli.quiet);

    Ok(EXIT_SUCCESS)
}

fn apply_cli_overrides(config: &mut Config, args: &InventoryArgs) {
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.follow_links {
        config.scanner.follow_links = true;
    }
    if args.fail_fast {
        config.scanner.on_error = ErrorPolicy::Abort;
    }
}

fn format_output(format: OutputFormat, inventory: &InventoryResult, cli: &Cli) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode(cli), cli.verbose)
            .format_inventory(inventory),
        OutputFormat::Json => JsonFormatter.format_inventory(inventory),
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
