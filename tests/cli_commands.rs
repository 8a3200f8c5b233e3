#![allow(deprecated)]

//! Binary-level tests for configuration handling and the one-shot commands.
//! None of these reach a real completion service.

use assert_cmd::Command;
use predicates::prelude::*;
mod common;

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("marketmind").unwrap();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("marketmind"));
}

#[test]
fn test_invalid_provider_in_config_fails_validation() {
    let (_temp_dir, config_path) = common::temp_config_file("provider:\n  type: copilot\n");

    let mut cmd = Command::cargo_bin("marketmind").unwrap();
    cmd.arg("--config")
        .arg(config_path)
        .arg("score")
        .arg("anything");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid provider type"));
}

#[test]
fn test_score_without_api_key_reports_low_intent() {
    let (_temp_dir, config_path) = common::temp_config_file(
        "provider:\n  type: groq\n  groq:\n    api_key_env: MARKETMIND_CLI_TEST_MISSING_KEY\n",
    );

    let mut cmd = Command::cargo_bin("marketmind").unwrap();
    cmd.env_remove("MARKETMIND_CLI_TEST_MISSING_KEY")
        .env_remove("MARKETMIND_PROVIDER")
        .arg("--config")
        .arg(config_path)
        .arg("score")
        .arg("CTO asked for a quote");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Score: 30 | Intent: Low Intent"));
}

#[test]
fn test_run_unknown_tool_fails() {
    let (_temp_dir, config_path) = common::temp_config_file("provider:\n  type: groq\n");

    let mut cmd = Command::cargo_bin("marketmind").unwrap();
    cmd.env_remove("MARKETMIND_PROVIDER")
        .arg("--config")
        .arg(config_path)
        .arg("run")
        .arg("forecast")
        .arg("--input")
        .arg("Q4");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool"));
}

#[test]
fn test_run_without_api_key_prints_marked_output_and_exports() {
    let (temp_dir, config_path) = common::temp_config_file(&format!(
        "provider:\n  type: groq\n  groq:\n    api_key_env: MARKETMIND_CLI_TEST_MISSING_KEY\nexport:\n  output_dir: {}\n",
        "exports"
    ));
    let export_dir = temp_dir.path().join("exports");

    let mut cmd = Command::cargo_bin("marketmind").unwrap();
    cmd.env_remove("MARKETMIND_CLI_TEST_MISSING_KEY")
        .env_remove("MARKETMIND_PROVIDER")
        .env("MARKETMIND_EXPORT_DIR", &export_dir)
        .arg("--config")
        .arg(config_path)
        .arg("run")
        .arg("research")
        .arg("--input")
        .arg("solar leasing")
        .arg("--export");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("⚠️ API Error"));

    let exported: Vec<_> = std::fs::read_dir(&export_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(exported.len(), 1);
    assert!(exported[0].starts_with("Research_"));
    assert!(exported[0].ends_with(".txt"));
}
