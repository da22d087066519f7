// ABOUTME: JSON persistence adapters for catalogs, profiles, insight contexts and shown insight keys
// ABOUTME: FileInsightKeyStore replaces its file through a temp file and rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! # File Storage
//!
//! The engine never touches the filesystem itself. Hosts load their inputs
//! with the helpers here and hand a [`FileInsightKeyStore`] to the
//! `RecentInsightTracker` so repetition avoidance survives restarts.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use vitalis_core::catalog::SupplementCatalog;
use vitalis_core::errors::{AppError, AppResult};
use vitalis_core::models::UserProfile;
use vitalis_intelligence::checkin_insights::InsightContext;
use vitalis_intelligence::insight_tracker::{InsightKeyStore, ShownInsight};

/// Read and decode a JSON file
///
/// # Errors
///
/// Returns `ResourceNotFound` for a missing file, `StorageError` for other read
/// failures and `SerializationError` for malformed JSON
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            AppError::not_found(format!("File '{}'", path.display()))
        } else {
            AppError::from(e)
        }
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::serialization(format!("Invalid JSON in '{}': {e}", path.display()))
            .with_source(e)
    })
}

/// Encode `value` as pretty JSON and replace `path` atomically
///
/// # Errors
///
/// Returns `StorageError` if the directory, temp file or rename fails
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec_pretty(value)?;
    let temp_path = temp_path_for(path);
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AppError::storage(format!("Failed to replace '{}': {e}", path.display())).with_source(e)
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Catalog from a JSON snapshot, or the bundled reference catalog when `path` is `None`
///
/// Structural problems in a snapshot are logged, not rejected.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or decoded
pub fn load_catalog(path: Option<&Path>) -> AppResult<SupplementCatalog> {
    let Some(path) = path else {
        return Ok(SupplementCatalog::reference());
    };
    let catalog: SupplementCatalog = read_json(path)?;
    for issue in catalog.validate() {
        warn!(catalog = %path.display(), %issue, "Catalog snapshot issue");
    }
    debug!(
        catalog = %path.display(),
        supplements = catalog.all_supplements().len(),
        "Loaded catalog snapshot"
    );
    Ok(catalog)
}

/// User profile from JSON
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_profile(path: &Path) -> AppResult<UserProfile> {
    read_json(path)
}

/// Insight context from JSON
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_insight_context(path: &Path) -> AppResult<InsightContext> {
    read_json(path)
}

/// Shown insight keys persisted as a JSON array
#[derive(Debug, Clone)]
pub struct FileInsightKeyStore {
    path: PathBuf,
}

impl FileInsightKeyStore {
    /// Store backed by `path`; the file is created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InsightKeyStore for FileInsightKeyStore {
    fn load(&self) -> AppResult<Vec<ShownInsight>> {
        match read_json(&self.path) {
            Ok(entries) => Ok(entries),
            Err(e) if self.path.exists() => Err(e),
            Err(_) => {
                debug!(path = %self.path.display(), "No insight history yet");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, entries: &[ShownInsight]) -> AppResult<()> {
        write_json_atomic(&self.path, entries)
    }
}
