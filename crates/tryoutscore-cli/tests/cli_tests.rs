//! CLI integration tests using assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tryoutscore() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("tryoutscore").unwrap()
}

fn init_in(dir: &TempDir) {
    tryoutscore()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
}

fn saved_report(dir: &Path) -> PathBuf {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .find(|p| p.extension().is_some_and(|ext| ext == "json"))
        .expect("no report JSON written")
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    tryoutscore()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created banks/example.toml"))
        .stdout(predicate::str::contains("Created answers/example.json"));

    assert!(dir.path().join("banks/example.toml").exists());
    assert!(dir.path().join("answers/example.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    tryoutscore()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists, skipping"));
}

#[test]
fn validate_example_bank() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    tryoutscore()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--bank")
        .arg("banks/example.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("8 questions"))
        .stdout(predicate::str::contains("All banks valid"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    tryoutscore()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--bank")
        .arg("banks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Tryout Package"));
}

#[test]
fn validate_nonexistent_file() {
    tryoutscore()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn score_end_to_end() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    tryoutscore()
        .current_dir(dir.path())
        .arg("score")
        .arg("--bank")
        .arg("banks/example.toml")
        .arg("--answers")
        .arg("answers/example.json")
        .arg("--output")
        .arg("out")
        .arg("--format")
        .arg("json,html")
        .assert()
        .success()
        .stderr(predicate::str::contains("Total:"));

    let out = dir.path().join("out");
    let entries: Vec<PathBuf> = std::fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    assert!(entries
        .iter()
        .any(|p| p.extension().is_some_and(|ext| ext == "json")));
    assert!(entries
        .iter()
        .any(|p| p.extension().is_some_and(|ext| ext == "html")));

    let report = std::fs::read_to_string(saved_report(&out)).unwrap();
    assert!(report.contains("\"categoryKey\""));
    assert!(report.contains("difficultyStats"));
}

#[test]
fn score_english_locale() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    tryoutscore()
        .current_dir(dir.path())
        .arg("score")
        .arg("--bank")
        .arg("banks/example.toml")
        .arg("--answers")
        .arg("answers/example.json")
        .arg("--locale")
        .arg("en")
        .arg("--output")
        .arg("out")
        .assert()
        .success();

    let report = std::fs::read_to_string(saved_report(&dir.path().join("out"))).unwrap();
    assert!(report.contains("Cloze Test"));
    assert!(!report.contains("Tes Rumpang"));
}

#[test]
fn score_rejects_unnormalized_weights() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    tryoutscore()
        .current_dir(dir.path())
        .arg("score")
        .arg("--bank")
        .arg("banks/example.toml")
        .arg("--answers")
        .arg("answers/example.json")
        .arg("--weights")
        .arg("cloze=0.9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sum to 1.0"));
}

#[test]
fn compare_two_attempts() {
    let dir = TempDir::new().unwrap();
    init_in(&dir);

    // Baseline: the sample sheet. Current: every answer correct.
    std::fs::write(
        dir.path().join("answers/perfect.json"),
        r#"{"g1":"B","g2":"C","v1":"B","v2":"A","r1":"E","r2":"B","c1":"A","c2":"B"}"#,
    )
    .unwrap();

    for (answers, out) in [("answers/example.json", "out1"), ("answers/perfect.json", "out2")] {
        tryoutscore()
            .current_dir(dir.path())
            .arg("score")
            .arg("--bank")
            .arg("banks/example.toml")
            .arg("--answers")
            .arg(answers)
            .arg("--output")
            .arg(out)
            .assert()
            .success();
    }

    let baseline = saved_report(&dir.path().join("out1"));
    let current = saved_report(&dir.path().join("out2"));

    tryoutscore()
        .current_dir(dir.path())
        .arg("compare")
        .arg("--baseline")
        .arg(&baseline)
        .arg("--current")
        .arg(&current)
        .assert()
        .success()
        .stdout(predicate::str::contains("improved"));

    // Reversing the direction must trip --fail-on-decline.
    tryoutscore()
        .current_dir(dir.path())
        .arg("compare")
        .arg("--baseline")
        .arg(&current)
        .arg("--current")
        .arg(&baseline)
        .arg("--fail-on-decline")
        .assert()
        .failure();
}
