use std::path::PathBuf;

use chrono::Local;

use crate::cli::{Cli, ScanArgs};
use crate::config::{Config, validate_config_semantics};
use crate::output::{
    ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress, TextFormatter,
};
use crate::report::{ReportOutcome, ReportWriter};
use crate::scanner::{DirectoryScanner, ErrorPolicy, ScanResult};
use crate::{EXIT_SUCCESS, Result};

use super::context::{color_mode, load_cli_config, report_error, write_output};

#[must_use]
pub fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => report_error(&e, cli),
    }
}

/// Scans `args.path`, writes the report and prints the summary.
///
/// # Errors
/// Returns an error if the configuration is invalid, the root cannot be
/// scanned, a subtree fails under `--fail-fast`, or the report cannot be written.
pub(crate) fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_cli_config(cli)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 2. Scan
    let (result, outcome) = scan_and_report(&config, args, cli)?;

    // 3. Summarize
    let output = format_output(args.format, &result, &outcome, cli)?;
    write_output(&output, cli.quiet);

    Ok(EXIT_SUCCESS)
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &ScanArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.follow_links {
        config.scanner.follow_links = true;
    }
    if args.fail_fast {
        config.scanner.on_error = ErrorPolicy::Abort;
    }
    if let Some(dir) = &args.output_dir {
        config.report.output_dir = Some(dir.clone());
    }
    if let Some(prefix) = &args.prefix {
        config.report.prefix.clone_from(prefix);
    }
    if args.relative {
        config.report.relative_paths = true;
    }
}

fn scan_and_report(
    config: &Config,
    args: &ScanArgs,
    cli: &Cli,
) -> Result<(ScanResult, ReportOutcome)> {
    let extensions = config.extension_set()?;
    let scanner = DirectoryScanner::new(config.scan_options())?;

    let progress = ScanProgress::new(cli.quiet, ErrorOutput::new(color_mode(cli)));
    let scanned = scanner.scan_with_listener(&args.path, &extensions, &progress);
    progress.finish();
    let result = scanned?;

    let output_dir = config
        .report
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let writer = ReportWriter::new(output_dir)
        .with_prefix(config.report.prefix.clone())
        .with_relative_paths(config.report.relative_paths)
        .with_dry_run(args.dry_run);
    let outcome = writer.write(&result, &Local::now())?;

    Ok((result, outcome))
}

fn format_output(
    format: OutputFormat,
    result: &ScanResult,
    outcome: &ReportOutcome,
    cli: &Cli,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_mode(cli), cli.verbose).format_scan(result, outcome)
        }
        OutputFormat::Json => JsonFormatter.format_scan(result, outcome),
    }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
