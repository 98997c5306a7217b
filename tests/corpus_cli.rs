// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn builtin_corpus_summary() {
    let dir = TempDir::new().expect("tempdir");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    cmd.current_dir(dir.path())
        .arg("corpus")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in"))
        .stdout(predicate::str::contains("visit_branch"))
        .stdout(predicate::str::contains("call_support"))
        .stdout(predicate::str::contains("general"));
}

#[test]
fn file_corpus_summary_json() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("corpus.json"),
        r#"[
            {"text": "lost my card", "category": "call_support"},
            {"text": "card is lost", "category": "call_support"},
            {"text": "how to open an account", "category": "visit_branch"}
        ]"#,
    )
    .expect("write corpus");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    let assert = cmd
        .current_dir(dir.path())
        .args(["--format", "json", "corpus", "--corpus", "corpus.json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let payload: Value = serde_json::from_str(&stdout).expect("json");
    assert_eq!(payload["utterances"], 3);
    assert_eq!(payload["categories"]["call_support"], 2);
    assert_eq!(payload["categories"]["visit_branch"], 1);
    assert_eq!(payload["categories"]["general"], 0);
}

#[test]
fn missing_corpus_file_fails() {
    let dir = TempDir::new().expect("tempdir");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bankbot"));
    cmd.current_dir(dir.path())
        .args(["corpus", "--corpus", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load corpus"));
}
