use std::fs;
use std::time::Duration;

use predicates::prelude::*;

/// Command with a clean credential environment so tests control it fully.
fn codescribe() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("codescribe").unwrap();
    cmd.timeout(Duration::from_secs(10));
    cmd.env_remove("OPENAI_API_KEY");
    cmd.env_remove("CODESCRIBE_ENV_PATH");
    cmd
}

#[test]
fn no_arguments_prints_usage_and_touches_nothing() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("log"))
        .stdout(predicate::str::contains("summarize"))
        .stdout(predicate::str::contains("tag"))
        .stdout(predicate::str::contains("mcp"));

    assert!(!dir.path().join(".journal").exists());
}

#[test]
fn help_flag_prints_usage() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("summarize"));
}

#[test]
fn log_appends_note_to_dated_file() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .args(["log", "Remember", "to", "fix", "the", "retry", "bug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged note to .journal/"));

    let journal_dir = dir.path().join(".journal");
    let files: Vec<_> = fs::read_dir(&journal_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);

    let content = fs::read_to_string(&files[0]).unwrap();
    assert!(content.starts_with('['));
    assert!(content.ends_with("Remember to fix the retry bug\n"));
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn two_logs_append_in_call_order() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .args(["log", "first"])
        .assert()
        .success();
    codescribe()
        .current_dir(dir.path())
        .args(["log", "second"])
        .assert()
        .success();

    let journal_dir = dir.path().join(".journal");
    let files: Vec<_> = fs::read_dir(&journal_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);

    let content = fs::read_to_string(&files[0]).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("first"));
    assert!(lines[1].ends_with("second"));
}

#[test]
fn empty_note_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .arg("log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no note content provided"));

    codescribe()
        .current_dir(dir.path())
        .args(["log", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no note content provided"));

    assert!(!dir.path().join(".journal").exists());
}

#[test]
fn summarize_missing_day_names_the_exact_path() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .env("OPENAI_API_KEY", "sk-test")
        .args(["summarize", "2099-12-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".journal/2099-12-31.txt"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn tag_alias_categorise_reports_missing_day() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .env("OPENAI_API_KEY", "sk-test")
        .args(["categorise", "2099-12-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".journal/2099-12-31.txt"));
}

#[test]
fn summarize_rejects_malformed_day() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .env("OPENAI_API_KEY", "sk-test")
        .args(["summarize", "not-a-day"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn summarize_without_credential_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .args(["summarize", "2099-12-31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn unknown_subcommand_prints_error_and_usage_hint() {
    let dir = tempfile::tempdir().unwrap();

    codescribe()
        .current_dir(dir.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"))
        .stderr(predicate::str::contains("--help"));
}
