//! CLI integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mindmatch() -> Command {
    cargo_bin_cmd!("mindmatch")
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

const TRIANGLE: &str = r#"{
  "entities": [
    {"name": "Ada Lovelace", "conflicts": ""},
    {"name": "Charles Babbage"},
    {"name": "Grace Hopper"}
  ],
  "affinity": [[0, 5, 1], [5, 0, 1], [1, 1, 0]]
}"#;

#[test]
fn help_lists_commands() {
    mindmatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("match"))
        .stdout(predicate::str::contains("conflicts"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_names_the_binary() {
    mindmatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mindmatch"));
}

#[test]
fn match_prints_pairs_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "input.json", TRIANGLE);

    mindmatch()
        .args(["--color", "never", "match", "--n-match", "1", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("none.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Grace Hopper"))
        .stdout(predicate::str::contains("7.000"))
        .stdout(predicate::str::contains("Successfully assigned all the match!"));
}

#[test]
fn match_json_reports_assignment() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "input.json", TRIANGLE);

    let output = mindmatch()
        .args(["--json", "match", "--n-match", "1", "-i"])
        .arg(&input)
        .arg("-c")
        .arg(dir.path().join("none.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value = stdout
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|value| value["command"] == "match")
        .expect("match report line");

    assert_eq!(report["converged"], true);
    assert_eq!(report["total_affinity"], 7.0);
    assert_eq!(report["pairs"].as_array().unwrap().len(), 3);
    let rows = report["assignment"].as_array().unwrap();
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row[i], 0);
        assert_eq!(row.as_array().unwrap().iter().filter(|v| **v == 1).count(), 1);
    }
}

#[test]
fn match_exits_with_not_converged_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        &dir,
        "input.json",
        r#"{
  "entities": [
    {"name": "Ada Lovelace", "conflicts": "Charles Babbage; Grace Hopper"},
    {"name": "Charles Babbage"},
    {"name": "Grace Hopper"}
  ],
  "affinity": [[0, 5, 1], [5, 0, 1], [1, 1, 0]]
}"#,
    );

    mindmatch()
        .args(["match", "--n-match", "1", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("none.toml"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("does not converge"));
}

#[test]
fn match_rejects_roster_size_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        &dir,
        "input.json",
        r#"{"entities": [{"name": "A"}], "affinity": [[0, 1], [1, 0]]}"#,
    );

    mindmatch()
        .args(["match", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("none.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("roster"));
}

#[test]
fn match_rejects_time_limit_out_of_range() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "input.json", TRIANGLE);

    mindmatch()
        .args(["match", "--n-match", "1", "--time-limit", "1e20", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("none.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("time_limit_secs"));
}

#[test]
fn match_reports_missing_input() {
    let dir = tempfile::tempdir().unwrap();

    mindmatch()
        .args(["match", "--input"])
        .arg(dir.path().join("missing.json"))
        .arg("--config")
        .arg(dir.path().join("none.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn conflicts_lists_fuzzy_matches() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        &dir,
        "input.json",
        r#"{
  "entities": [
    {"name": "Ada Lovelace", "conflicts": "Charles Babage"},
    {"name": "Charles Babbage"},
    {"name": "Grace Hopper"}
  ]
}"#,
    );

    mindmatch()
        .args(["--color", "never", "conflicts", "--input"])
        .arg(&input)
        .arg("--config")
        .arg(dir.path().join("none.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Charles Babbage"))
        .stdout(predicate::str::contains("Grace Hopper").not());
}

#[test]
fn config_validate_fails_on_bad_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "config.toml", "[conflicts]\nthreshold = 120\n");

    mindmatch()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn config_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    mindmatch()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();

    mindmatch()
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn config_show_uses_defaults_without_file() {
    let dir = tempfile::tempdir().unwrap();

    mindmatch()
        .args(["--color", "never", "config", "show", "--config"])
        .arg(dir.path().join("none.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("(defaults)"))
        .stdout(predicate::str::contains("85"));
}
