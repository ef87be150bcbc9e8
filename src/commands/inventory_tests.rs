use std::fs;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::MusicScanError;

fn parse(args: &[&str]) -> (Cli, InventoryArgs) {
    let cli = Cli::parse_from(["music-scan", "--no-config", "--quiet", "inventory"]);
    let mut argv = vec!["inventory"];
    argv.extend_from_slice(args);
    (cli, InventoryArgs::parse_from(argv))
}

#[test]
fn inventory_of_library_succeeds() {
    let library = TempDir::new().unwrap();
    fs::create_dir(library.path().join("Album")).unwrap();
    fs::write(library.path().join("Album/01.flac"), "abc").unwrap();

    let (cli, args) = parse(&[library.path().to_str().unwrap()]);

    assert_eq!(run_inventory_impl(&args, &cli).unwrap(), EXIT_SUCCESS);
}

#[test]
fn inventory_json_succeeds() {
    let library = TempDir::new().unwrap();
    let (cli, args) = parse(&[library.path().to_str().unwrap(), "--format", "json"]);

    assert_eq!(run_inventory_impl(&args, &cli).unwrap(), EXIT_SUCCESS);
}

#[test]
fn inventory_of_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("song.mp3");
    fs::write(&file, "").unwrap();
    let (cli, args) = parse(&[file.to_str().unwrap()]);

    let err = run_inventory_impl(&args, &cli).unwrap_err();

    assert!(matches!(err, MusicScanError::NotADirectory { .. }));
}

#[test]
fn inventory_rejects_invalid_exclude() {
    let library = TempDir::new().unwrap();
    let (cli, args) = parse(&[library.path().to_str().unwrap(), "-x", "[oops"]);

    let err = run_inventory_impl(&args, &cli).unwrap_err();

    assert!(err.is_config_error());
}

#[test]
fn overrides_extend_config() {
    let mut config = Config::default();
    let (_, args) = parse(&["-x", "Artwork", "--fail-fast"]);

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.scanner.exclude, vec!["Artwork"]);
    assert_eq!(config.scanner.on_error, ErrorPolicy::Abort);
    assert!(!config.scanner.follow_links);
}
