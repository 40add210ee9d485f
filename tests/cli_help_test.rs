//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("swim")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spacewalk export import CLI"))
        .stdout(predicate::str::contains("--directory"))
        .stdout(predicate::str::contains("--entities"))
        .stdout(predicate::str::contains("--list-entities"))
        .stdout(predicate::str::contains("--into-org-id"))
        .stdout(predicate::str::contains("--merge-users"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_help_shows_defaults() {
    Command::cargo_bin("swim")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/exports"))
        .stdout(predicate::str::contains("default: all"));
}
