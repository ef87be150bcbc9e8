use std::path::PathBuf;

use super::*;
use crate::scanner::SkipReason;

fn result_with(matched: &[&str], empty: &[&str]) -> ScanResult {
    ScanResult {
        root: PathBuf::from("/music"),
        matched_files: matched.iter().map(PathBuf::from).collect(),
        empty_dirs: empty.iter().map(PathBuf::from).collect(),
        skipped: Vec::new(),
        dirs_visited: 3,
    }
}

fn plain() -> TextFormatter {
    TextFormatter::new(ColorMode::Never)
}

#[test]
fn scan_summary_reports_written_file() {
    let result = result_with(&["/music/A/song.flac"], &["/music/B"]);
    let outcome = ReportOutcome::Written {
        path: PathBuf::from("music-2024-01-01T00.00.00.txt"),
        bytes: 1234,
        count: 1,
        dry_run: false,
    };

    let output = plain().format_scan(&result, &outcome).unwrap();

    assert!(output.contains("Scanned 3 directories under /music"));
    assert!(output.contains("Found 1 audio files"));
    assert!(output.contains("Wrote 1,234 bytes to music-2024-01-01T00.00.00.txt"));
    assert!(output.contains("Empty directories:\n  /music/B\n"));
}

#[test]
fn scan_summary_without_matches() {
    let result = result_with(&[], &[]);

    let output = plain()
        .format_scan(&result, &ReportOutcome::NoFiles)
        .unwrap();

    assert!(output.contains("No audio files found at /music"));
    assert!(output.contains("No empty directories found at /music"));
}

#[test]
fn dry_run_is_labelled() {
    let result = result_with(&["/music/a.mp3"], &[]);
    let outcome = ReportOutcome::Written {
        path: PathBuf::from("music-x.txt"),
        bytes: 13,
        count: 1,
        dry_run: true,
    };

    let output = plain().format_scan(&result, &outcome).unwrap();

    assert!(output.contains("Dry run: would write 13 bytes to music-x.txt"));
    assert!(!output.contains("Wrote"));
}

#[test]
fn verbose_lists_matched_files() {
    let result = result_with(&["/music/a.mp3", "/music/b.mp3"], &[]);

    let quiet = plain()
        .format_scan(&result, &ReportOutcome::NoFiles)
        .unwrap();
    let verbose = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format_scan(&result, &ReportOutcome::NoFiles)
        .unwrap();

    assert!(!quiet.contains("  /music/a.mp3"));
    assert!(verbose.contains("  /music/a.mp3\n  /music/b.mp3\n"));
}

#[test]
fn skipped_directories_are_listed() {
    let mut result = result_with(&[], &[]);
    result.skipped.push(SkippedDirectory {
        path: PathBuf::from("/music/locked"),
        reason: SkipReason::PermissionDenied,
    });

    let output = plain()
        .format_scan(&result, &ReportOutcome::NoFiles)
        .unwrap();

    assert!(output.contains("Skipped 1 unreadable directory:"));
    assert!(output.contains("/music/locked (permission denied)"));
}

#[test]
fn colors_wrap_headings_when_enabled() {
    let result = result_with(&[], &["/music/B"]);

    let output = TextFormatter::new(ColorMode::Always)
        .format_scan(&result, &ReportOutcome::NoFiles)
        .unwrap();

    assert!(output.contains("\x1b[33mEmpty directories:\x1b[0m"));
}

#[test]
fn inventory_lists_each_directory() {
    let inventory = InventoryResult {
        root: PathBuf::from("/music"),
        directories: vec![
            DirectoryInventory {
                path: PathBuf::from("/music"),
                subdirs: vec![PathBuf::from("/music/A")],
                files: vec![],
                bytes: 0,
            },
            DirectoryInventory {
                path: PathBuf::from("/music/A"),
                subdirs: vec![],
                files: vec![PathBuf::from("/music/A/01.flac")],
                bytes: 25_000_000,
            },
        ],
        empty_dirs: vec![],
        skipped: vec![],
    };

    let output = plain().format_inventory(&inventory).unwrap();

    assert!(output.contains(
        "Directory '/music/A' consumes 25,000,000 bytes on disk (not including subdirectories)."
    ));
    assert!(output.contains("  1 subdirectories:\n    Directory 1 name: /music/A\n"));
    assert!(output.contains("    File 1 name: /music/A/01.flac"));
    assert!(output.contains("Total: 2 directories, 1 files, 25,000,000 bytes"));
}
