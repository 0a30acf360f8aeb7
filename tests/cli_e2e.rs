//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary against fixture transcripts and check
//! the printed summary, report files, and error handling.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with fixture transcripts.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let twelve_hour = "01/01/23, 10:30 am - Alice: Hello there
01/01/23, 10:31 am - Alice added Bob
01/01/23, 10:32 am - Bob: hi Alice! 😂
01/01/23, 10:35 am - Alice: <Media omitted>
02/01/23, 9:15 pm - Alice: good night";
    fs::write(dir.path().join("twelve_hour.txt"), twelve_hour).unwrap();

    let twenty_four_hour = "01/01/23, 10:30 - Alice: Hello there
01/01/23, 10:32 - Bob: hi Alice!
02/01/23, 21:15 - Alice: good night";
    fs::write(dir.path().join("twenty_four_hour.txt"), twenty_four_hour).unwrap();

    fs::write(dir.path().join("stop_words.txt"), "hi hello there good").unwrap();

    dir
}

fn chatlens() -> Command {
    Command::cargo_bin("chatlens").expect("binary exists")
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_analyze_12_hour_transcript() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("twelve_hour.txt"))
        .args(["--dialect", "12-hour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 records"))
        .stdout(predicate::str::contains("Messages:     5"))
        .stdout(predicate::str::contains("Media shared: 1"))
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_analyze_24_hour_transcript_default_dialect() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("twenty_four_hour.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("3 records"))
        .stdout(predicate::str::contains("Sentiment"));
}

#[test]
fn test_dialect_alias() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("twelve_hour.txt"))
        .args(["-d", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12-hour"));
}

#[test]
fn test_user_scope() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("twelve_hour.txt"))
        .args(["--dialect", "12-hour", "--user", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scope:   Bob"))
        .stdout(predicate::str::contains("Messages:     1"));
}

#[test]
fn test_unknown_user_reports_zero_not_error() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("twelve_hour.txt"))
        .args(["--dialect", "12-hour", "--user", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:     0"));
}

// ============================================================================
// Output files
// ============================================================================

#[test]
fn test_json_report_written() {
    let dir = setup_fixtures();
    let report_path = dir.path().join("report.json");

    chatlens()
        .arg(dir.path().join("twelve_hour.txt"))
        .args(["--dialect", "12-hour"])
        .arg("--json")
        .arg(&report_path)
        .assert()
        .success();

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("\"filter\": \"Overall\""));
    assert!(report.contains("January-2023"));
    assert!(report.contains("sentiment"));
}

#[test]
fn test_csv_table_written() {
    let dir = setup_fixtures();
    let csv_path = dir.path().join("users.csv");

    chatlens()
        .arg(dir.path().join("twelve_hour.txt"))
        .args(["--dialect", "12-hour"])
        .arg("--csv")
        .arg(&csv_path)
        .assert()
        .success();

    let table = fs::read_to_string(&csv_path).unwrap();
    assert!(table.starts_with("Author;Messages;Percentage"));
    assert!(table.contains("Alice;3;60"));
}

#[test]
fn test_custom_stop_words() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("twelve_hour.txt"))
        .args(["--dialect", "12-hour"])
        .arg("--stop-words")
        .arg(dir.path().join("stop_words.txt"))
        .assert()
        .success()
        // "hello" is stopped by the custom list, "night" survives.
        .stdout(predicate::str::contains("night"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_missing_input_file() {
    chatlens()
        .arg("/no/such/transcript.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_missing_stop_words_file() {
    let dir = setup_fixtures();

    chatlens()
        .arg(dir.path().join("twelve_hour.txt"))
        .args(["--dialect", "12-hour", "--stop-words", "/no/such/list.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_invalid_dialect_rejected() {
    chatlens()
        .args(["chat.txt", "--dialect", "13-hour"])
        .assert()
        .failure();
}

#[test]
fn test_help_lists_examples() {
    chatlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXAMPLES"))
        .stdout(predicate::str::contains("--dialect"));
}
