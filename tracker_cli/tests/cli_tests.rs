//! Integration tests for the fitrep binary.
//!
//! These tests verify end-to-end behavior including:
//! - Built-in sample summaries
//! - Package files in CSV and JSON Lines form
//! - Per-package error reporting and exit status
//! - Config-driven input selection

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SWIMMING_LINE: &str = "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
                             Mean speed: 1.000 km/h; Calories burned: 336.000.";
const RUNNING_LINE: &str = "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
                            Mean speed: 9.750 km/h; Calories burned: 699.750.";
const WALKING_LINE: &str = "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
                            Mean speed: 5.850 km/h; Calories burned: 157.500.";

/// Helper to create a test directory with an empty config file
fn setup_test_dir() -> (TempDir, PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").expect("Failed to write config");
    (temp_dir, config_path)
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitrep"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workout summaries from fitness tracker packages",
        ));
}

#[test]
fn test_default_command_prints_samples_in_order() {
    let (_temp_dir, config_path) = setup_test_dir();

    let output = cli()
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("Failed to run fitrep");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![SWIMMING_LINE, RUNNING_LINE, WALKING_LINE]);
}

#[test]
fn test_summary_from_csv() {
    let (temp_dir, config_path) = setup_test_dir();
    let input = temp_dir.path().join("packages.csv");
    fs::write(&input, "RUN,15000,1,75\nWLK,9000,1,75,180\n").unwrap();

    cli()
        .arg("summary")
        .arg("--config")
        .arg(&config_path)
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", RUNNING_LINE, WALKING_LINE));
}

#[test]
fn test_summary_from_jsonl() {
    let (temp_dir, config_path) = setup_test_dir();
    let input = temp_dir.path().join("packages.jsonl");
    let line = serde_json::json!({ "workout_type": "SWM", "data": [720, 1, 80, 25, 40] });
    fs::write(&input, format!("{}\n", line)).unwrap();

    cli()
        .arg("summary")
        .arg("--config")
        .arg(&config_path)
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("{}\n", SWIMMING_LINE));
}

#[test]
fn test_unknown_label_fails_only_that_entry() {
    let (temp_dir, config_path) = setup_test_dir();
    let input = temp_dir.path().join("packages.csv");
    fs::write(&input, "XYZ,1,2,3\nRUN,15000,1,75\n").unwrap();

    cli()
        .arg("summary")
        .arg("--config")
        .arg(&config_path)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stdout(format!("{}\n", RUNNING_LINE))
        .stderr(predicate::str::contains("Unknown workout type").and(predicate::str::contains("XYZ")));
}

#[test]
fn test_zero_duration_is_reported() {
    let (temp_dir, config_path) = setup_test_dir();
    let input = temp_dir.path().join("packages.csv");
    fs::write(&input, "RUN,15000,0,75\n").unwrap();

    cli()
        .arg("summary")
        .arg("--config")
        .arg(&config_path)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("duration must be nonzero"));
}

#[test]
fn test_config_supplies_input_path() {
    let (temp_dir, config_path) = setup_test_dir();
    let input = temp_dir.path().join("from_config.csv");
    fs::write(&input, "WLK,9000,1,75,180\n").unwrap();
    fs::write(
        &config_path,
        format!("[input]\npackages_path = {:?}\n", input.display().to_string()),
    )
    .unwrap();

    cli()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(format!("{}\n", WALKING_LINE));
}

#[test]
fn test_missing_input_file_fails() {
    let (temp_dir, config_path) = setup_test_dir();

    cli()
        .arg("summary")
        .arg("--config")
        .arg(&config_path)
        .arg("--input")
        .arg(temp_dir.path().join("missing.csv"))
        .assert()
        .failure();
}

#[test]
fn test_labels_lists_field_order() {
    let (_temp_dir, config_path) = setup_test_dir();

    cli()
        .arg("labels")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("SWM")
                .and(predicate::str::contains("action, duration, weight, length_pool, count_pool"))
                .and(predicate::str::contains("RUN"))
                .and(predicate::str::contains("WLK"))
                .and(predicate::str::contains("action, duration, weight, height")),
        );
}
