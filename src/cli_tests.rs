use std::path::PathBuf;

use super::*;

#[test]
fn cli_scan_default_path() {
    let cli = Cli::parse_from(["music-scan", "scan"]);
    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.path, PathBuf::from("."));
            assert_eq!(args.ext, None);
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.dry_run);
        }
        _ => panic!("Expected Scan command"),
    }
}

#[test]
fn cli_scan_with_extensions() {
    let cli = Cli::parse_from(["music-scan", "scan", "/music", "--ext", "flac,mp3"]);
    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.path, PathBuf::from("/music"));
            assert_eq!(
                args.ext,
                Some(vec!["flac".to_string(), "mp3".to_string()])
            );
        }
        _ => panic!("Expected Scan command"),
    }
}

#[test]
fn cli_scan_with_report_options() {
    let cli = Cli::parse_from([
        "music-scan",
        "scan",
        "--output-dir",
        "reports",
        "--prefix",
        "library",
        "--relative",
        "--dry-run",
        "-f",
        "json",
    ]);
    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.output_dir, Some(PathBuf::from("reports")));
            assert_eq!(args.prefix.as_deref(), Some("library"));
            assert!(args.relative);
            assert!(args.dry_run);
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Scan command"),
    }
}

#[test]
fn cli_scan_with_traversal_options() {
    let cli = Cli::parse_from([
        "music-scan",
        "scan",
        "-x",
        "**/Artwork",
        "--exclude",
        "*.tmp",
        "--follow-links",
        "--fail-fast",
    ]);
    match cli.command {
        Commands::Scan(args) => {
            assert_eq!(args.exclude, vec!["**/Artwork", "*.tmp"]);
            assert!(args.follow_links);
            assert!(args.fail_fast);
        }
        _ => panic!("Expected Scan command"),
    }
}

#[test]
fn cli_scan_rejects_unknown_format() {
    let result = Cli::try_parse_from(["music-scan", "scan", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn cli_inventory_options() {
    let cli = Cli::parse_from(["music-scan", "inventory", "/music", "-x", "tmp", "--fail-fast"]);
    match cli.command {
        Commands::Inventory(args) => {
            assert_eq!(args.path, PathBuf::from("/music"));
            assert_eq!(args.exclude, vec!["tmp"]);
            assert!(args.fail_fast);
            assert!(!args.follow_links);
        }
        _ => panic!("Expected Inventory command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["music-scan", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".music-scan.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_show_format() {
    let cli = Cli::parse_from(["music-scan", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Show { format } => assert_eq!(format, OutputFormat::Json),
        },
        _ => panic!("Expected Config command"),
    }
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["music-scan", "scan", "-vv", "--quiet", "--color", "never"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(cli.color, ColorChoice::Never);
}

#[test]
fn cli_global_config_path() {
    let cli = Cli::parse_from(["music-scan", "-c", "custom.toml", "scan"]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert!(!cli.no_config);
}

#[test]
fn cli_no_config_conflicts_with_config() {
    let result = Cli::try_parse_from(["music-scan", "--no-config", "-c", "x.toml", "scan"]);
    assert!(result.is_err());
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}
