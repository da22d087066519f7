// ABOUTME: Integration tests for JSON file storage and host configuration
// ABOUTME: Atomic writes, error classification, catalog snapshots, and data directory resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vitalis::catalog::names::IRON;
use vitalis::catalog::SupplementCatalog;
use vitalis::config::{AppConfig, CATALOG_PATH_ENV, DATA_DIR_ENV};
use vitalis::errors::ErrorCode;
use vitalis::models::HealthGoal;
use vitalis::storage::{load_catalog, load_profile, read_json, write_json_atomic};

#[test]
fn test_read_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_json::<Vec<String>>(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_read_malformed_json_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ nope").unwrap();

    let err = read_json::<Vec<String>>(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_atomic_write_creates_parents_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("values.json");
    write_json_atomic(&path, &vec!["a", "b"]).unwrap();
    write_json_atomic(&path, &vec!["c"]).unwrap();

    let values: Vec<String> = read_json(&path).unwrap();
    assert_eq!(values, vec!["c"]);
    assert!(!path.with_file_name("values.json.tmp").exists());
}

#[test]
fn test_load_catalog_without_path_uses_reference() {
    common::init_test_logging();
    let catalog = load_catalog(None).unwrap();
    assert_eq!(catalog, SupplementCatalog::reference());
}

#[test]
fn test_load_catalog_snapshot_round_trip() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");

    let mut snapshot = SupplementCatalog::reference();
    snapshot.supplements.retain(|supplement| supplement.name != IRON);
    write_json_atomic(&path, &snapshot).unwrap();

    let loaded = load_catalog(Some(&path)).unwrap();
    assert!(loaded.supplement(IRON).is_none());
    assert!(!loaded.validate().is_empty());
    assert!(!loaded.goal_mappings(HealthGoal::Energy).is_empty());
}

#[test]
fn test_load_profile_from_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    let profile = common::profile_with_goals(&[HealthGoal::Focus, HealthGoal::Sleep]);
    write_json_atomic(&path, &profile).unwrap();

    assert_eq!(load_profile(&path).unwrap(), profile);
}

#[test]
fn test_app_config_paths() {
    let config = AppConfig::with_data_dir("/tmp/vitalis-test");
    assert_eq!(
        config.insight_history_path(),
        PathBuf::from("/tmp/vitalis-test/recent_insights.json")
    );
    assert!(config.resolve_catalog_path(None).is_none());

    let explicit = Path::new("/snapshots/catalog.json");
    assert_eq!(config.resolve_catalog_path(Some(explicit)), Some(explicit));
}

#[test]
#[serial]
fn test_app_config_from_env() {
    env::set_var(DATA_DIR_ENV, "/var/lib/vitalis");
    env::set_var(CATALOG_PATH_ENV, "/etc/vitalis/catalog.json");

    let config = AppConfig::from_env();
    assert_eq!(config.data_dir, PathBuf::from("/var/lib/vitalis"));
    assert_eq!(
        config.resolve_catalog_path(None),
        Some(Path::new("/etc/vitalis/catalog.json"))
    );

    env::remove_var(DATA_DIR_ENV);
    env::remove_var(CATALOG_PATH_ENV);
}

#[test]
#[serial]
fn test_app_config_ignores_blank_env() {
    env::set_var(DATA_DIR_ENV, "  ");
    env::remove_var(CATALOG_PATH_ENV);

    let config = AppConfig::from_env();
    assert!(!config.data_dir.as_os_str().is_empty());
    assert_ne!(config.data_dir, PathBuf::from("  "));
    assert!(config.catalog_path.is_none());

    env::remove_var(DATA_DIR_ENV);
}
