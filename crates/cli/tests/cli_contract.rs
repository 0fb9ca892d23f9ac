#![allow(deprecated)]
//! CLI contract: stdout, stderr and exit code for each kind of input.

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("uuid-to-path").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn hyphenated_uuid_prints_path() {
    bin()
        .arg("123e4567-e89b-12d3-a456-426614174000")
        .assert()
        .success()
        .stdout("File path: 83/0\n")
        .stderr("");
}

#[test]
fn unhyphenated_uuid_matches_hyphenated() {
    let hyphenated = bin()
        .arg("123e4567-e89b-12d3-a456-426614174000")
        .output()
        .unwrap();
    let simple = bin()
        .arg("123e4567e89b12d3a456426614174000")
        .output()
        .unwrap();

    assert!(simple.status.success());
    assert_eq!(hyphenated.stdout, simple.stdout);
}

#[test]
fn negative_low_half_uses_signed_remainder() {
    bin()
        .arg("00000000-0000-0000-ffff-ffffffffffff")
        .assert()
        .success()
        .stdout("File path: 0/1\n");
}

#[test]
fn uppercase_hex_is_accepted() {
    bin()
        .arg("123E4567E89B12D3A456426614174000")
        .assert()
        .success()
        .stdout("File path: 83/0\n");
}

#[test]
fn empty_input_is_invalid() {
    bin()
        .arg("")
        .assert()
        .code(1)
        .stdout("")
        .stderr("Invalid UUID\n");
}

#[test]
fn hyphenated_garbage_is_invalid() {
    bin()
        .arg("not-a-uuid")
        .assert()
        .code(1)
        .stdout("")
        .stderr("Invalid UUID\n");
}

#[test]
fn twenty_hex_chars_is_invalid() {
    bin()
        .arg("0123456789abcdef0123")
        .assert()
        .code(1)
        .stderr("Invalid UUID\n");
}

#[test]
fn stray_hyphen_is_not_repaired() {
    bin()
        .arg("12-3e4567e89b12d3a456426614174000")
        .assert()
        .code(1)
        .stderr("Invalid UUID\n");
}

#[test]
fn no_arguments_prints_usage() {
    bin()
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage"))
        .stderr("");
}

#[test]
fn two_arguments_prints_usage() {
    bin()
        .args([
            "123e4567-e89b-12d3-a456-426614174000",
            "123e4567-e89b-12d3-a456-426614174000",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage"))
        .stderr("");
}

#[test]
fn debug_logging_goes_to_stderr() {
    bin()
        .env("RUST_LOG", "debug")
        .arg("123e4567e89b12d3a456426614174000")
        .assert()
        .success()
        .stdout("File path: 83/0\n")
        .stderr(predicate::str::contains("derived shard path"));
}

#[test]
fn double_dash_before_uuid_is_two_arguments() {
    bin()
        .args(["--", "123e4567-e89b-12d3-a456-426614174000"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage"))
        .stderr("");
}

#[test]
fn lone_double_dash_is_invalid() {
    bin()
        .arg("--")
        .assert()
        .code(1)
        .stdout("")
        .stderr("Invalid UUID\n");
}

#[cfg(unix)]
#[test]
fn non_utf8_argument_is_invalid() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    bin()
        .arg(OsStr::from_bytes(b"\xff\xfe"))
        .assert()
        .code(1)
        .stdout("")
        .stderr("Invalid UUID\n");
}
