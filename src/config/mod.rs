// ABOUTME: Host configuration resolved from environment variables
// ABOUTME: Data directory, optional catalog snapshot path, and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Configuration module for Vitalis hosts
//!
//! Algorithm thresholds live in `vitalis_intelligence::config`; this module
//! only covers where state is kept and how logs are emitted.

use crate::logging::LoggingConfig;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the data directory
pub const DATA_DIR_ENV: &str = "VITALIS_DATA_DIR";

/// Points at a JSON catalog snapshot to use instead of the bundled reference catalog
pub const CATALOG_PATH_ENV: &str = "VITALIS_CATALOG_PATH";

/// Directory name under the platform data directory
const APP_DIR_NAME: &str = "vitalis";

/// Fallback when the platform has no data directory
const LOCAL_DATA_DIR: &str = ".vitalis";

/// File holding recently shown insight keys
const INSIGHT_HISTORY_FILE: &str = "recent_insights.json";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory for persisted state
    pub data_dir: PathBuf,
    /// External catalog snapshot, if configured
    pub catalog_path: Option<PathBuf>,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Resolve configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let data_dir = non_empty_var(DATA_DIR_ENV).map_or_else(default_data_dir, PathBuf::from);
        let catalog_path = non_empty_var(CATALOG_PATH_ENV).map(PathBuf::from);
        debug!(data_dir = %data_dir.display(), catalog = ?catalog_path, "Resolved configuration");

        Self {
            data_dir,
            catalog_path,
            logging: LoggingConfig::from_env(),
        }
    }

    /// Configuration rooted at an explicit data directory
    #[must_use]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            catalog_path: None,
            logging: LoggingConfig::default(),
        }
    }

    /// Location of the recent insight history file
    #[must_use]
    pub fn insight_history_path(&self) -> PathBuf {
        self.data_dir.join(INSIGHT_HISTORY_FILE)
    }

    /// Catalog override given on the command line, else the configured one
    #[must_use]
    pub fn resolve_catalog_path<'a>(&'a self, explicit: Option<&'a Path>) -> Option<&'a Path> {
        explicit.or(self.catalog_path.as_deref())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Platform data directory, else a directory under the working directory
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(LOCAL_DATA_DIR),
        |dir| dir.join(APP_DIR_NAME),
    )
}
