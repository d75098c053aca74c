//! Integration tests for the wod binary.
//!
//! These tests verify end-to-end behavior including:
//! - Timeline display and point-in-time queries
//! - Date routing through the workouts directory
//! - The countdown loop and completion journal
//! - Validation failures surfacing as errors

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CIRCUIT_JSON: &str = r#"{
    "type": "circuit",
    "warmUp": [{"name": "Jumping Jacks", "duration": 60}],
    "coolDown": [{"name": "Quad Stretch", "duration": 30}],
    "workout": {
        "rounds": 3,
        "exercises": [
            {"name": "Jump Squats", "duration": 40},
            {"name": "Rest", "duration": 20},
            {"name": "Push-ups", "reps": "12"},
            {"name": "Rest", "duration": 20}
        ]
    }
}"#;

const TABATA_JSON: &str = r#"{
    "type": "tabata",
    "warmUp": [{"name": "Jog", "duration": 10}],
    "coolDown": [],
    "workout": {
        "rounds": 2,
        "workDuration": 3,
        "restDuration": 2,
        "exercises": [{"name": "Burpees"}]
    }
}"#;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("wod"))
}

fn write_workout(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("Failed to create workout dir");
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("Failed to write workout");
    path
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout countdown timer"));
}

#[test]
fn test_show_prints_timeline() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "circuit.json", CIRCUIT_JSON);

    cli()
        .arg("show")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("CIRCUIT WORKOUT"))
        .stdout(predicate::str::contains("14 sections"))
        .stdout(predicate::str::contains("12 reps"))
        .stdout(predicate::str::contains("Quad Stretch"));
}

#[test]
fn test_show_json_is_parseable() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "tabata.json", TABATA_JSON);

    let output = cli()
        .arg("show")
        .arg("--json")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let sections: serde_json::Value =
        serde_json::from_slice(&output).expect("show --json should print JSON");
    let sections = sections.as_array().expect("expected a JSON array");
    assert_eq!(sections.len(), 1 + 4);
    assert_eq!(sections[0]["source_kind"], "warmup");
    assert_eq!(sections[1]["name"], "Burpees");
    assert_eq!(sections[2]["name"], "Rest");
    assert_eq!(sections[2]["effective_duration"], 2);
}

#[test]
fn test_at_reports_current_and_next() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "circuit.json", CIRCUIT_JSON);

    // 60s warm-up, so t=60 is the first boundary and belongs to the main block
    cli()
        .arg("at")
        .arg("60")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current:   Jump Squats"))
        .stdout(predicate::str::contains("Remaining: 00:40"))
        .stdout(predicate::str::contains("Next:      Rest"));
}

#[test]
fn test_at_past_end_clamps_to_last_section() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "circuit.json", CIRCUIT_JSON);

    cli()
        .arg("at")
        .arg("100000")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current:   Quad Stretch"))
        .stdout(predicate::str::contains("Next:      finish"))
        .stdout(predicate::str::contains("Progress:  100%"));
}

#[test]
fn test_date_routing_uses_workouts_dir() {
    let temp_dir = setup_test_dir();
    let workouts_dir = temp_dir.path().join("workouts");
    // 2024-01-15 is a Monday
    write_workout(&workouts_dir, "monday.json", TABATA_JSON);

    cli()
        .arg("validate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--date")
        .arg("2024-01-15")
        .assert()
        .success()
        .stdout(predicate::str::contains("tabata workout is valid"));
}

#[test]
fn test_missing_workout_fails() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("validate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--date")
        .arg("2024-01-15")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Workout not found"));
}

#[test]
fn test_validation_error_reported() {
    let temp_dir = setup_test_dir();
    let file = write_workout(
        temp_dir.path(),
        "bad.json",
        r#"{"type": "tabata", "workout": {"rounds": 8, "exercises": [{"name": "Burpees"}]}}"#,
    );

    cli()
        .arg("validate")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"))
        .stderr(predicate::str::contains("workDuration"));
}

#[test]
fn test_unsupported_type_reported() {
    let temp_dir = setup_test_dir();
    let file = write_workout(
        temp_dir.path(),
        "yoga.json",
        r#"{"type": "yoga", "workout": {"exercises": [{"name": "Sun Salutation"}]}}"#,
    );

    cli()
        .arg("show")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported workout type: yoga"));
}

#[test]
fn test_run_completes_and_logs() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "tabata.json", TABATA_JSON);

    cli()
        .arg("run")
        .arg("--no-wait")
        .arg("--auto-advance")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("▶ Jog"))
        .stdout(predicate::str::contains("▶ Burpees"))
        .stdout(predicate::str::contains("Workout complete (00:20)"))
        .stdout(predicate::str::contains("Workout logged"));

    let journal = fs::read_to_string(temp_dir.path().join("journal.jsonl"))
        .expect("Failed to read journal");
    let lines: Vec<_> = journal.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1);

    let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(entry["workout_type"], "tabata");
    assert_eq!(entry["total_duration_seconds"], 20);
    assert_eq!(entry["section_count"], 5);
}

#[test]
fn test_run_dry_run_does_not_log() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "tabata.json", TABATA_JSON);

    cli()
        .arg("run")
        .arg("--no-wait")
        .arg("--auto-advance")
        .arg("--dry-run")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp_dir.path().join("journal.jsonl").exists());
}

#[test]
fn test_run_from_offset_skips_earlier_sections() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "tabata.json", TABATA_JSON);

    cli()
        .arg("run")
        .arg("--from")
        .arg("15")
        .arg("--no-wait")
        .arg("--auto-advance")
        .arg("--dry-run")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("▶ Jog").not())
        .stdout(predicate::str::contains("▶ Burpees"));
}

#[test]
fn test_run_from_past_end_logs_nothing() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "tabata.json", TABATA_JSON);

    cli()
        .arg("run")
        .arg("--from")
        .arg("100")
        .arg("--no-wait")
        .arg("--auto-advance")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing left to run"))
        .stdout(predicate::str::contains("Workout complete").not())
        .stdout(predicate::str::contains("Workout logged").not());

    assert!(!temp_dir.path().join("journal.jsonl").exists());
}

#[test]
fn test_run_rejects_oversized_rounds() {
    let temp_dir = setup_test_dir();
    let file = write_workout(
        temp_dir.path(),
        "emom.json",
        r#"{"type":"emom","workout":{"exercises":[{"name":"Row"}],"rounds":3000000000}}"#,
    );

    cli()
        .arg("run")
        .arg("--no-wait")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_run_pauses_on_rep_based_exercise() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "circuit.json", CIRCUIT_JSON);

    cli()
        .arg("run")
        .arg("--no-wait")
        .arg("--dry-run")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .write_stdin("\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("→ 12 reps"))
        .stdout(predicate::str::contains("Press Enter when done"));
}

#[test]
fn test_history_lists_completed_workouts() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "tabata.json", TABATA_JSON);

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed workouts yet"));

    cli()
        .arg("run")
        .arg("--no-wait")
        .arg("--auto-advance")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success();

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("tabata"))
        .stdout(predicate::str::contains("00:20"))
        .stdout(predicate::str::contains("5 sections"))
        .stdout(predicate::str::contains("1 workouts, 00:20 total"));
}

#[test]
fn test_history_filters_by_type_and_date() {
    let temp_dir = setup_test_dir();
    let tabata = write_workout(temp_dir.path(), "tabata.json", TABATA_JSON);
    let circuit = write_workout(temp_dir.path(), "circuit.json", CIRCUIT_JSON);

    for file in [&tabata, &circuit] {
        cli()
            .arg("run")
            .arg("--no-wait")
            .arg("--auto-advance")
            .arg("--data-dir")
            .arg(temp_dir.path())
            .arg("--file")
            .arg(file)
            .assert()
            .success();
    }

    cli()
        .arg("history")
        .arg("--type")
        .arg("circuit")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("circuit"))
        .stdout(predicate::str::contains("tabata").not())
        .stdout(predicate::str::contains("1 workouts"));

    cli()
        .arg("history")
        .arg("--date")
        .arg("1999-01-01")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed workouts match"));

    cli()
        .arg("history")
        .arg("--type")
        .arg("yoga")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_file_and_date_conflict() {
    let temp_dir = setup_test_dir();
    let file = write_workout(temp_dir.path(), "tabata.json", TABATA_JSON);

    cli()
        .arg("show")
        .arg("--file")
        .arg(&file)
        .arg("--date")
        .arg("2024-03-01")
        .assert()
        .failure();
}
