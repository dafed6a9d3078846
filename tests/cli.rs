//! Drives the `gp-tag-encode` binary itself (not just the library), the way the teacher crate's
//! own encode test writes through a real file instead of only asserting on in-memory bytes.

use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_gp-tag-encode")
}

#[test]
fn single_tag_flags_write_a_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("tag.png");

    let status = Command::new(bin())
        .args([
            "--lat",
            "63.8203894",
            "--lon",
            "20.3058847",
            "--alt",
            "45.16",
            "--qx",
            "0.707",
            "--qy",
            "0",
            "--qz",
            "0.707",
            "--qw",
            "0",
            "--accuracy",
            "2",
            "--tag-id",
            "123",
            "--version",
            "3",
            "--u",
            "4",
            "--scale",
            "0.36",
            "--output",
        ])
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let img = image::open(&output).unwrap();
    assert_eq!(img.width(), 36 * 4);
    assert_eq!(img.height(), 36 * 4);
}

#[test]
fn out_of_range_field_exits_with_the_config_error_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("tag.png");

    let status = Command::new(bin())
        .args([
            "--lat", "200", "--lon", "0", "--alt", "0", "--qx", "0", "--qy", "0", "--qz", "0",
            "--qw", "1", "--accuracy", "0", "--tag-id", "0", "--version", "0", "--u", "4",
            "--scale", "0.36", "--output",
        ])
        .arg(&output)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(2));
    assert!(!output.exists());
}

#[test]
fn dpi_and_size_mm_derive_u_and_scale_without_an_explicit_scale_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("tag.png");

    let status = Command::new(bin())
        .args([
            "--lat", "0", "--lon", "0", "--alt", "0", "--qx", "0", "--qy", "0", "--qz", "0",
            "--qw", "1", "--accuracy", "0", "--tag-id", "0", "--version", "0", "--dpi", "600",
            "--size-mm", "100", "--output",
        ])
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let img = image::open(&output).unwrap();
    // U = round(100 * (600/25.4) / 36) = 66, image side = 36 * 66.
    assert_eq!(img.width(), 36 * 66);
}
