//! Integration tests for svgrab-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Cursor;
use std::io::Read;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn svgrab_cmd() -> Command {
    cargo_bin_cmd!("svgrab")
}

#[test]
fn test_version_flag() {
    svgrab_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("svgrab"));
}

#[test]
fn test_help_flag() {
    svgrab_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_extract_help() {
    svgrab_cmd()
        .arg("extract")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract embedded images"));
}

#[test]
fn test_extract_creates_zip() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let output = temp.path().join("out.zip");

    svgrab_cmd()
        .arg("extract")
        .arg(fixture_path("sample.svg"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive created"));

    assert!(output.exists());
}

#[test]
fn test_extracted_zip_contains_policy_named_entries() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let output = temp.path().join("out.zip");

    svgrab_cmd()
        .arg("extract")
        .arg(fixture_path("sample.svg"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

    // The external reference is ignored; two embedded images remain.
    assert_eq!(archive.len(), 2);
    let mut png = Vec::new();
    archive
        .by_name("image-1.png")
        .unwrap()
        .read_to_end(&mut png)
        .unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert!(archive.by_name("image-2.gif").is_ok());
}

#[test]
fn test_extract_json_output_format() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let output = temp.path().join("out.zip");

    let stdout = svgrab_cmd()
        .arg("extract")
        .arg("--json")
        .arg(fixture_path("sample.svg"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&stdout).expect("invalid JSON output");
    assert_eq!(json["status"], "success");
    assert_eq!(json["operation"], "extract");
    assert_eq!(json["data"]["images_written"], 2);
    assert!(json["data"]["bytes_written"].as_u64().unwrap() > 0);
}

#[test]
fn test_extract_refuses_overwrite_without_force() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let output = temp.path().join("out.zip");
    std::fs::write(&output, b"existing").unwrap();

    svgrab_cmd()
        .arg("extract")
        .arg(fixture_path("sample.svg"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    svgrab_cmd()
        .arg("extract")
        .arg(fixture_path("sample.svg"))
        .arg("-o")
        .arg(&output)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_extract_only_writes_single_image() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let output = temp.path().join("first.png");

    svgrab_cmd()
        .arg("extract")
        .arg(fixture_path("sample.svg"))
        .arg("--only")
        .arg("0")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image written"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_extract_only_out_of_range() {
    svgrab_cmd()
        .arg("extract")
        .arg(fixture_path("sample.svg"))
        .arg("--only")
        .arg("7")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no embedded image at index 7"));
}

#[test]
fn test_extract_no_images_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");

    svgrab_cmd()
        .arg("extract")
        .arg(fixture_path("no-images.svg"))
        .arg("-o")
        .arg(temp.path().join("out.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No images provided"));
}

#[test]
fn test_extract_missing_file() {
    svgrab_cmd()
        .arg("extract")
        .arg("definitely-not-here.svg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No file provided"));
}

#[test]
fn test_extract_rejects_non_svg_file() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let path = temp.path().join("data.txt");
    std::fs::write(&path, "plain text").unwrap();

    svgrab_cmd()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File must be an SVG file"));
}

#[test]
fn test_extract_invalid_url() {
    svgrab_cmd()
        .arg("extract")
        .arg("--url")
        .arg("ftp://example.com/a.svg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid http(s) URL"));
}

#[test]
fn test_list_human_output() {
    svgrab_cmd()
        .arg("list")
        .arg(fixture_path("sample.svg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("image/png"))
        .stdout(predicate::str::contains("image/gif"))
        .stdout(predicate::str::contains("image-1.png"))
        .stdout(predicate::str::contains("2 embedded image(s)"));
}

#[test]
fn test_list_empty_document() {
    svgrab_cmd()
        .arg("list")
        .arg(fixture_path("no-images.svg"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No embedded images found"));
}

#[test]
fn test_list_json_output() {
    let stdout = svgrab_cmd()
        .arg("list")
        .arg("--json")
        .arg(fixture_path("sample.svg"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&stdout).expect("invalid JSON output");
    assert_eq!(json["operation"], "list");
    assert_eq!(json["data"]["count"], 2);
    assert_eq!(json["data"]["images"][0]["index"], 0);
    assert_eq!(json["data"]["images"][0]["format"], "image/png");
    assert_eq!(json["data"]["images"][1]["filename"], "image-2.gif");
}

#[test]
fn test_completion_bash() {
    svgrab_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("svgrab"));
}
