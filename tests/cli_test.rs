#![cfg(feature = "cli")]

mod common;

use std::process::Command;

use tempfile::TempDir;

fn epubzip() -> Command {
    Command::new(env!("CARGO_BIN_EXE_epubzip"))
}

fn write_book(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, common::sample_book()).unwrap();
    path
}

#[test]
fn test_converts_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = write_book(&dir, "My Book.epub");

    let status = epubzip().arg(&input).arg("--offline").arg("-q").status().unwrap();
    assert!(status.success());

    let zip = std::fs::read(dir.path().join("My Book.zip")).unwrap();
    let paths = common::paths(&zip);
    assert!(paths.contains(&"index.html".to_string()));
    assert!(paths.contains(&"images/cover.png".to_string()));
}

#[test]
fn test_explicit_output_and_json_summary() {
    let dir = TempDir::new().unwrap();
    let input = write_book(&dir, "book.epub");
    let output = dir.path().join("out.zip");

    let out = epubzip()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--offline", "--sequential", "--compression-level", "9", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["summary"]["pages"], 1);
    assert_eq!(report["summary"]["toc_entries"], 1);
    assert_eq!(report["summary"]["script_fetched"], false);
    assert!(output.exists());
}

#[test]
fn test_info_lists_toc() {
    let dir = TempDir::new().unwrap();
    let input = write_book(&dir, "book.epub");

    let out = epubzip().arg(&input).arg("--info").output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Pages: 1"));
    assert!(stdout.contains("Chapter 1 -> xhtml/ch1.xhtml"));
    assert!(!dir.path().join("book.zip").exists());
}

#[test]
fn test_rejects_non_epub() {
    let dir = TempDir::new().unwrap();
    let input = write_book(&dir, "book.pdf");

    let out = epubzip().arg(&input).arg("--offline").output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not an .epub file"));
}

#[test]
fn test_reports_corrupt_archive() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.epub");
    std::fs::write(&input, b"PK\x03\x04").unwrap();

    let out = epubzip().arg(&input).arg("--offline").arg("-q").output().unwrap();
    assert!(!out.status.success());
    assert!(!dir.path().join("broken.zip").exists());
}
