//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--statement-timeout-secs"));
}

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Page number"));
}

#[test]
fn test_delete_requires_id() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("delete");

    cmd.assert().failure();
}

#[test]
fn test_delete_rejects_non_numeric_id() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("delete").arg("abc");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
