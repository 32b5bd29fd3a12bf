//! Integration tests for the pr-triage binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

const SAMPLE: &str = r#"[
  {"path": "src/app.py", "line": 10, "body": "🔴 SQL injection here", "user": {"login": "Gemini-Bot"}},
  {"body": "general note", "user": {"login": "alice"}},
  {"path": "src/util.py", "body": "🟡 consider renaming", "user": {"login": "bob-reviewer"}}
]"#;

fn pr_triage() -> Command {
    Command::cargo_bin("pr-triage").unwrap()
}

fn write_comments(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("comments.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_argument_exits_with_usage() {
    pr_triage()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Example: pr-triage"));
}

#[test]
fn help_exits_zero() {
    pr_triage()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();

    pr_triage()
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn malformed_json_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_comments(&dir, "not json");

    pr_triage()
        .arg(path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse review comments"));
}

#[test]
fn renders_report_for_valid_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_comments(&dir, SAMPLE);

    pr_triage()
        .arg(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 review comments"))
        .stdout(predicate::str::contains("🔴 CRITICAL - Comment #1"))
        .stdout(predicate::str::contains("🟡 MEDIUM - Comment #2"))
        .stdout(predicate::str::contains("File: src/app.py"))
        .stdout(predicate::str::contains("Line: N/A"));
}

#[test]
fn reviewer_filter_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_comments(&dir, SAMPLE);

    pr_triage()
        .arg(path)
        .arg("gem")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 review comments"))
        .stdout(predicate::str::contains("Reviewer: Gemini-Bot"))
        .stdout(predicate::str::contains("bob-reviewer").not());
}

#[test]
fn empty_input_succeeds_with_zero_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_comments(&dir, "[]");

    pr_triage()
        .arg(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 review comments"));
}

#[test]
fn severity_threshold_filters_and_renumbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_comments(&dir, SAMPLE);

    pr_triage()
        .arg(path)
        .args(["--severity", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 review comments"))
        .stdout(predicate::str::contains("🔴 CRITICAL - Comment #1"))
        .stdout(predicate::str::contains("Comment #2").not());
}

#[test]
fn json_format_emits_report_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_comments(&dir, SAMPLE);

    let assert = pr_triage()
        .arg(path)
        .args(["--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(report["version"], "1.0");
    assert_eq!(report["stats"]["total"], 2);
    assert_eq!(report["stats"]["critical"], 1);
    assert_eq!(report["stats"]["medium"], 1);
    assert_eq!(report["comments"][0]["id"], 1);
    assert_eq!(report["comments"][0]["severity"], "🔴 CRITICAL");
    assert_eq!(report["comments"][0]["line"], 10);
    assert_eq!(report["comments"][1]["line"], "N/A");
}

#[test]
fn compact_json_is_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_comments(&dir, SAMPLE);

    let assert = pr_triage()
        .arg(path)
        .args(["--format", "json-compact"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert_eq!(stdout.trim_end().lines().count(), 1);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["stats"]["total"], 2);
}

#[test]
fn writes_report_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_comments(&dir, SAMPLE);
    let out = dir.path().join("report.txt");

    pr_triage()
        .arg(path)
        .arg("--output")
        .arg(&out)
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Wrote report to"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("Found 2 review comments"));
}
