use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::scanner::ErrorPolicy;

fn defaults() -> LoadResult {
    LoadResult {
        config: Config::default(),
        source: None,
    }
}

#[test]
fn text_shows_default_sections() {
    let text = format_config_text(&defaults());

    assert!(text.contains("# built-in defaults"));
    assert!(text.contains("[scanner]"));
    assert!(text.contains(
        "extensions = [\"flac\", \"m4a\", \"mp3\", \"wav\", \"aac\", \"ogg\"]"
    ));
    assert!(text.contains("on_error = \"skip\""));
    assert!(text.contains("[report]"));
    assert!(text.contains("prefix = \"music\""));
    assert!(!text.contains("exclude"));
    assert!(!text.contains("output_dir"));
}

#[test]
fn text_shows_optional_values_and_source() {
    let mut loaded = defaults();
    loaded.source = Some(PathBuf::from("/home/me/.music-scan.toml"));
    loaded.config.scanner.exclude = vec!["Artwork".to_string()];
    loaded.config.scanner.on_error = ErrorPolicy::Abort;
    loaded.config.report.output_dir = Some(PathBuf::from("reports"));

    let text = format_config_text(&loaded);

    assert!(text.contains("# from /home/me/.music-scan.toml"));
    assert!(text.contains("exclude = [\"Artwork\"]"));
    assert!(text.contains("on_error = \"abort\""));
    assert!(text.contains("output_dir = \"reports\""));
}

#[test]
fn json_show_round_trips_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[report]\nprefix = \"library\"\n").unwrap();
    let cli = Cli::parse_from([
        "music-scan",
        "-c",
        path.to_str().unwrap(),
        "config",
        "show",
    ]);

    let json = run_config_show_impl(OutputFormat::Json, &cli).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.report.prefix, "library");
    assert_eq!(parsed.scanner, Config::default().scanner);
}

#[test]
fn show_with_broken_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    fs::write(&path, "[scanner\n").unwrap();
    let cli = Cli::parse_from([
        "music-scan",
        "-c",
        path.to_str().unwrap(),
        "config",
        "show",
    ]);

    let err = run_config_show_impl(OutputFormat::Text, &cli).unwrap_err();

    assert!(err.is_config_error());
}
