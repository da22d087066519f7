// ABOUTME: Integration tests for the vitalis-cli binary
// ABOUTME: Runs plan, insight and catalog commands end to end against temporary files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Integration tests for the vitalis-cli binary.
//!
//! These tests verify command structure, JSON output, and insight history persistence.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run CLI command and capture output
fn run_cli(data_dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_vitalis-cli"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("VITALIS_CATALOG_PATH")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn write(dir: &Path, name: &str, value: &Value) -> String {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_cli_help_shows_commands() {
    let dir = TempDir::new().unwrap();
    let (exit_code, stdout, _stderr) = run_cli(dir.path(), &["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["plan", "insight", "catalog"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_plan_command_prints_plan_json() {
    let dir = TempDir::new().unwrap();
    let profile = write(
        dir.path(),
        "profile.json",
        &json!({ "name": "Sam", "goals": ["sleep"], "medications": ["warfarin"] }),
    );

    let (exit_code, stdout, stderr) = run_cli(dir.path(), &["plan", "--profile", &profile]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");

    let plan: Value = serde_json::from_str(&stdout).unwrap();
    assert!(!plan["supplements"].as_array().unwrap().is_empty());
    assert!(plan["reasoning"].as_str().unwrap().contains("Better Sleep"));
}

#[test]
fn test_plan_command_missing_profile_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    let (exit_code, _stdout, stderr) =
        run_cli(dir.path(), &["plan", "--profile", &missing.to_string_lossy()]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to load profile"), "stderr: {stderr}");
}

#[test]
fn test_insight_command_records_history() {
    let dir = TempDir::new().unwrap();
    let context = write(
        dir.path(),
        "context.json",
        &json!({
            "date": "2026-03-10",
            "today": { "sleep": 50, "energy": 50, "clarity": 50, "mood": 50, "gut": 50 }
        }),
    );

    let (exit_code, stdout, stderr) = run_cli(dir.path(), &["insight", "--context", &context]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    let first: Value = serde_json::from_str(&stdout).unwrap();
    let first_key = first["key"].as_str().unwrap().to_owned();
    assert!(first_key.starts_with("fun_fact_"));
    assert!(dir.path().join("recent_insights.json").exists());

    let (_, stdout, _) = run_cli(dir.path(), &["insight", "--context", &context]);
    let second: Value = serde_json::from_str(&stdout).unwrap();
    assert_ne!(second["key"].as_str().unwrap(), first_key);
}

#[test]
fn test_insight_dry_run_leaves_history_untouched() {
    let dir = TempDir::new().unwrap();
    let context = write(
        dir.path(),
        "context.json",
        &json!({
            "date": "2026-03-10",
            "today": { "sleep": 80, "energy": 50, "clarity": 50, "mood": 50, "gut": 50 }
        }),
    );

    let (exit_code, stdout, _) =
        run_cli(dir.path(), &["insight", "--context", &context, "--dry-run"]);
    assert_eq!(exit_code, 0);
    let insight: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(insight["key"], "above_baseline_sleep");
    assert!(!dir.path().join("recent_insights.json").exists());
}

#[test]
fn test_catalog_command_lists_goal() {
    let dir = TempDir::new().unwrap();
    let (exit_code, stdout, _) = run_cli(dir.path(), &["catalog", "--goal", "sleep"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Magnesium Glycinate"));

    let (exit_code, _, stderr) = run_cli(dir.path(), &["catalog", "--goal", "flying"]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("The provided input is invalid"), "stderr: {stderr}");
    assert!(stderr.contains("Unknown goal"));
}

#[test]
fn test_invalid_threshold_override_rejected() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_vitalis-cli"))
        .arg("--data-dir")
        .arg(dir.path())
        .args(["catalog"])
        .env("RUST_LOG", "warn")
        .env("VITALIS_PLAN_MAX_SUPPLEMENTS", "plenty")
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Configuration is invalid"), "stderr: {stderr}");
}
