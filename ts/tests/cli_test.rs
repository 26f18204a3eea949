//! CLI smoke tests for the `ts` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ts() -> Command {
    Command::cargo_bin("ts").unwrap()
}

#[test]
fn test_init_then_stats() {
    let temp = TempDir::new().unwrap();

    ts().arg("init").arg(temp.path()).assert().success();

    ts().arg("stats")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("toc"))
        .stdout(predicate::str::contains("fulltext"));
}

#[test]
fn test_dump_empty_category() {
    let temp = TempDir::new().unwrap();

    ts().arg("init").arg(temp.path()).assert().success();

    ts().args(["dump"])
        .arg(temp.path())
        .arg("meta")
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"));
}

#[test]
fn test_stats_on_missing_store_fails() {
    let temp = TempDir::new().unwrap();

    ts().arg("stats").arg(temp.path()).assert().failure();
}

#[test]
fn test_dump_rejects_unknown_category() {
    let temp = TempDir::new().unwrap();

    ts().arg("init").arg(temp.path()).assert().success();

    ts().arg("dump").arg(temp.path()).arg("index").assert().failure();
}
