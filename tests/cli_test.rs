// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line behaviour of the `knot-grid` binary.

mod common;

use std::process::Command;

fn knot_grid() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_knot-grid"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_prints_counts() {
    let output = knot_grid().arg(common::EXAMPLE_KEY).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Set bits: 8108\nRegions: 1242\n"
    );
}

#[test]
fn test_missing_key_fails_with_usage() {
    let output = knot_grid().output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "stderr was {:?}", stderr);
}

#[test]
fn test_wide_key_fails() {
    let output = knot_grid().arg("k\u{2603}").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("8-bit characters"), "stderr was {:?}", stderr);
}

#[test]
fn test_digest_flag() {
    let output = knot_grid().args(["--digest", "AoC 2017"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "33efeb34ea91902bb2f59c9920caa6cd\n"
    );
}

#[test]
fn test_print_grid_flag() {
    let output = knot_grid()
        .args(["--print-grid", common::EXAMPLE_KEY])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "##.#.#..");
    assert_eq!(lines[7], "##.#.##.");
    assert_eq!(lines[8], "Set bits: 8108");
}
