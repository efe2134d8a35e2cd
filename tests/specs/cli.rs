//! Behavioral specs for the command line surface.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    bootrun_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"))
        .stdout(predicates::str::contains("test"))
        .stdout(predicates::str::contains("env"))
        .stdout(predicates::str::contains("lint"));
}

#[test]
fn short_version_flag_works() {
    bootrun_cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_fails() {
    bootrun_cmd()
        .arg("deploy")
        .assert()
        .code(2)
        .stderr(predicates::str::is_match(r"(?i)(unrecognized|unknown)").unwrap());
}

#[test]
fn unknown_flag_fails() {
    bootrun_cmd()
        .args(["test", "--unknown-flag"])
        .assert()
        .code(2)
        .stderr(predicates::str::is_match(r"(?i)(unexpected|unknown|unrecognized)").unwrap());
}

#[test]
fn unknown_output_format_fails() {
    bootrun_cmd()
        .args(["test", "-o", "html"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("html"));
}
