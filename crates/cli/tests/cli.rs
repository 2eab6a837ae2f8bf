use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

fn write_json(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, json).unwrap();
    path
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_neff_identical_traits() {
    let temp = tempdir().unwrap();
    let input = write_json(&temp, "traits.json", "[0.0, 0.0, 0.0]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("neff")
        .arg("--input")
        .arg(&input)
        .arg("--sigma")
        .arg("1.0")
        .arg("--strategy")
        .arg("naive");
    assert_eq!(stdout_json(&mut cmd), serde_json::json!([3.0, 3.0, 3.0]));
}

#[test]
fn test_neff_reads_stdin() {
    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("neff").arg("--input").arg("-").write_stdin("[42.0]");
    assert_eq!(stdout_json(&mut cmd), serde_json::json!([1.0]));
}

#[test]
fn test_neff_rejects_zero_sigma() {
    let temp = tempdir().unwrap();
    let input = write_json(&temp, "traits.json", "[0.0, 1.0]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("neff")
        .arg("--input")
        .arg(&input)
        .arg("--sigma")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sigma"));
}

#[test]
fn test_unknown_strategy_rejected() {
    let temp = tempdir().unwrap();
    let input = write_json(&temp, "traits.json", "[0.0]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("neff")
        .arg("--input")
        .arg(&input)
        .arg("--strategy")
        .arg("quantum")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown kernel strategy"));
}

#[test]
fn test_neff_against() {
    let temp = tempdir().unwrap();
    let reference = write_json(&temp, "ref.json", "[0.0, 500.0]");
    let population = write_json(&temp, "pop.json", "[0.0, 0.0]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("neff-against")
        .arg("--reference")
        .arg(&reference)
        .arg("--population")
        .arg(&population);
    assert_eq!(stdout_json(&mut cmd), serde_json::json!([2.0, 0.0]));
}

#[test]
fn test_gaps_literal_case() {
    let temp = tempdir().unwrap();
    let input = write_json(&temp, "traits.json", "[12, 0, 11, 1, 10, 2]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("gaps")
        .arg("--input")
        .arg(&input)
        .arg("--min-gap")
        .arg("5");
    let report = stdout_json(&mut cmd);
    assert_eq!(report["gaps"], serde_json::json!([3]));
    assert_eq!(
        report["sorted"],
        serde_json::json!([0.0, 1.0, 2.0, 10.0, 11.0, 12.0])
    );
}

#[test]
fn test_gaps_presorted_checks_order() {
    let temp = tempdir().unwrap();
    let input = write_json(&temp, "traits.json", "[0, 2, 1]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("gaps")
        .arg("--input")
        .arg(&input)
        .arg("--presorted")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not ascending"));
}

#[test]
fn test_mutate_zero_sd_and_seeded() {
    let temp = tempdir().unwrap();
    let input = write_json(&temp, "traits.json", "[1.5, -2.0, 3.25]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("mutate").arg("--input").arg(&input).arg("--sd").arg("0");
    assert_eq!(stdout_json(&mut cmd), serde_json::json!([1.5, -2.0, 3.25]));

    let run = |parallel: bool| {
        let mut cmd = Command::cargo_bin("sympatric").unwrap();
        cmd.arg("mutate")
            .arg("--input")
            .arg(&input)
            .arg("--sd")
            .arg("0.5")
            .arg("--seed")
            .arg("42");
        if parallel {
            cmd.arg("--parallel");
        }
        stdout_json(&mut cmd)
    };
    assert_eq!(run(false), run(false));
    assert_eq!(run(true), run(true));
}

#[test]
fn test_offspring_counts() {
    let temp = tempdir().unwrap();
    let input = write_json(&temp, "fitness.json", "[0.0, 0.0, 3.0, 1.0]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("offspring")
        .arg("--input")
        .arg(&input)
        .arg("--seed")
        .arg("7");
    let counts = stdout_json(&mut cmd);
    let counts = counts.as_array().unwrap();
    assert_eq!(counts.len(), 4);
    assert_eq!(counts[0], 0);
    assert_eq!(counts[1], 0);
    assert!(counts.iter().all(|c| c.as_u64().is_some()));
}

#[test]
fn test_offspring_negative_fitness_fails() {
    let temp = tempdir().unwrap();
    let input = write_json(&temp, "fitness.json", "[1.0, -1.0]");

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("offspring")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("fitness"));
}

#[test]
fn test_config_file_and_override() {
    let temp = tempdir().unwrap();
    let config = write_json(
        &temp,
        "engine.json",
        r#"{"kernel": {"sigma": 0.3, "strategy": "fold"}, "min_gap": 2.0, "seed": 11}"#,
    );

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("--config").arg(&config).arg("config");
    let resolved = stdout_json(&mut cmd);
    assert_eq!(resolved["kernel"]["sigma"], 0.3);
    assert_eq!(resolved["kernel"]["strategy"], "fold");
    assert_eq!(resolved["seed"], 11);

    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("--seed")
        .arg("12")
        .arg("config");
    assert_eq!(stdout_json(&mut cmd)["seed"], 12);
}

#[test]
fn test_compare_random_community() {
    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("compare")
        .arg("--random")
        .arg("300")
        .arg("--sigma")
        .arg("0.5")
        .assert()
        .success()
        .stdout(predicate::str::contains("parallel_vector"))
        .stdout(predicate::str::contains("✗").not());
}

#[test]
fn test_strategies_lists_default() {
    let mut cmd = Command::cargo_bin("sympatric").unwrap();
    cmd.arg("strategies")
        .assert()
        .success()
        .stdout(predicate::str::contains("naive"))
        .stdout(predicate::str::contains("parallel_vector (default)"));
}
