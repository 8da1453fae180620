// Integration tests for the compass CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the compass binary.
fn compass() -> Command {
    Command::cargo_bin("compass").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    compass()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("compass"));
}

#[test]
fn cli_help_flag() {
    compass()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Career-orientation quiz"));
}

#[test]
fn recommend_requires_path() {
    compass()
        .arg("recommend")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn recommend_requires_answers_flag() {
    compass()
        .args(["recommend", "/tmp/catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--answers"));
}

#[test]
fn profile_requires_answers_flag() {
    compass()
        .args(["profile", "/tmp/catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--answers"));
}

#[test]
fn validate_requires_path() {
    compass()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn recommend_rejects_unknown_format() {
    compass()
        .args([
            "recommend",
            "/tmp/catalog",
            "--answers",
            "answers.json",
            "--format",
            "yaml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    compass()
        .args(["-q", "-v", "validate", "/tmp/catalog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
