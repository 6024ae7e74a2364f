#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate; workspace denies missing_docs

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fizz() -> Command {
    Command::cargo_bin("fizz").unwrap()
}

/// Create a temp directory holding a classic 3=Fizz / 5=Buzz game file.
fn classic_game() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("classic.json");
    fizz()
        .args(["new", "Classic", "-r", "3=Fizz", "-r", "5=Buzz", "-o"])
        .arg(&path)
        .assert()
        .success();
    (dir, path)
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_game_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("classic.json");

    fizz()
        .args(["new", "Classic", "-a", "tester", "-r", "3=Fizz", "-r", "5=Buzz", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created game 'Classic' with 2 rules"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Fizz"));
    assert!(content.contains("tester"));
}

#[test]
fn new_rejects_duplicate_divisors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");

    fizz()
        .args(["new", "Bad", "-r", "3=Fizz", "-r", "3=Buzz", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate divisor"));
}

#[test]
fn new_rejects_malformed_rule_spec() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");

    fizz()
        .args(["new", "Bad", "-r", "3Fizz", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("divisor=word"));
}

#[test]
fn new_refuses_to_overwrite() {
    let (_dir, path) = classic_game();

    fizz()
        .args(["new", "Classic Two", "-r", "7=Whizz", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_a_valid_file() {
    let (_dir, path) = classic_game();

    fizz()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed for 'Classic'")
                .and(predicate::str::contains("Fizz"))
                .and(predicate::str::contains("Buzz")),
        );
}

#[test]
fn check_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage.json");
    fs::write(&path, "not json at all").unwrap();

    fizz()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid game definition"));
}

#[test]
fn check_rejects_tampered_rules() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tampered.json");
    fs::write(
        &path,
        r#"{
  "id": "00000000-0000-0000-0000-000000000000",
  "name": "Tampered",
  "author": "nobody",
  "created_at": "2026-01-01T00:00:00Z",
  "rules": [
    {"divisor": 3, "word": "Fizz", "sort_order": 0},
    {"divisor": 3, "word": "Buzz", "sort_order": 1}
  ]
}"#,
    )
    .unwrap();

    fizz()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid game definition"));
}

// ---------------------------------------------------------------------------
// answer
// ---------------------------------------------------------------------------

#[test]
fn answer_concatenates_matching_words() {
    let (_dir, path) = classic_game();

    fizz()
        .args(["answer", "15"])
        .arg(&path)
        .assert()
        .success()
        .stdout("FizzBuzz\n");
}

#[test]
fn answer_echoes_unmatched_numbers() {
    let (_dir, path) = classic_game();

    fizz()
        .args(["answer", "7"])
        .arg(&path)
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn answer_rejects_non_positive_numbers() {
    let (_dir, path) = classic_game();

    fizz()
        .args(["answer", "0"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_quits_cleanly_with_empty_score() {
    let (_dir, path) = classic_game();

    fizz()
        .arg("play")
        .arg(&path)
        .args(["--duration", "60", "--seed", "1"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Session result")
                .and(predicate::str::contains("Accuracy"))
                .and(predicate::str::contains("0%")),
        );
}

#[test]
fn play_scores_a_wrong_answer() {
    let (_dir, path) = classic_game();

    fizz()
        .arg("play")
        .arg(&path)
        .args(["--duration", "60", "--seed", "1"])
        .write_stdin("definitely-not-an-answer\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("wrong")
                .and(predicate::str::contains("Session result")),
        );
}
