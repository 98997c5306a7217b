// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Config selecting the dummy provider so tests never download a model.
/// Dummy embeddings are zero vectors, so nothing clears a positive threshold.
const DUMMY_CONFIG: &str = "[embeddings]\nprovider = \"dummy\"\ndimension = 8\n";

fn workspace() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(".bankbotrc.toml"), DUMMY_CONFIG).expect("write config");
    dir
}

#[test]
fn ask_with_no_match_prints_notice() {
    let dir = workspace();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["ask", "I lost my card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching responses"))
        .stderr(predicate::str::contains("0 response(s) above threshold 0.50"));
}

#[test]
fn ask_quiet_suppresses_stats() {
    let dir = workspace();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["ask", "--quiet", "I lost my card"])
        .assert()
        .success()
        .stderr(predicate::str::contains("response(s)").not());
}

#[test]
fn ask_json_returns_empty_results() {
    let dir = workspace();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    let assert = cmd
        .current_dir(dir.path())
        .args(["--format", "json", "ask", "I lost my card"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let payload: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(payload["query"], "I lost my card");
    assert!((payload["threshold"].as_f64().unwrap() - 0.5).abs() < 1e-6);
    assert_eq!(payload["results"].as_array().map(Vec::len), Some(0));
}

#[test]
fn ask_threshold_flag_overrides_config() {
    let dir = workspace();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    let assert = cmd
        .current_dir(dir.path())
        .args(["--format", "json", "ask", "--threshold", "1.1", "anything"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let payload: Value = serde_json::from_str(&stdout).expect("json");
    assert!((payload["threshold"].as_f64().unwrap() - 1.1).abs() < 1e-6);
    assert_eq!(payload["results"].as_array().map(Vec::len), Some(0));
}

#[test]
fn missing_corpus_is_non_fatal() {
    let dir = workspace();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["ask", "--corpus", "does-not-exist.json", "I lost my card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching responses"))
        .stderr(predicate::str::contains("Error loading corpus"));
}

#[test]
fn malformed_corpus_is_non_fatal() {
    let dir = workspace();
    fs::write(dir.path().join("broken.json"), "{not json").expect("write corpus");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .args(["ask", "--corpus", "broken.json", "I lost my card"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error loading corpus"));
}
