// ABOUTME: Recently shown insight tracking with a pluggable persistence store
// ABOUTME: Keys shown within the trailing window are fed back to the generator to avoid repeats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! # Recent Insight Tracker
//!
//! The tracker is an explicit dependency owned by the check-in flow, not a
//! process-wide singleton. It keeps at most `max_tracked` entries and forgets
//! anything older than the window whenever a new key is recorded. Every
//! mutation is written through to the store so state survives restarts.

use crate::config::intelligence::{IntelligenceConfig, InsightTrackerConfig};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;
use vitalis_core::errors::AppResult;

/// Upper bound keeping window arithmetic in range
const MAX_WINDOW_DAYS: i64 = 36_500;

/// One shown insight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShownInsight {
    /// Insight key
    pub key: String,
    /// When it was shown
    pub shown_at: DateTime<Utc>,
}

/// Persistence for tracker entries
pub trait InsightKeyStore {
    /// Load persisted entries (empty when nothing was saved yet)
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or decoded
    fn load(&self) -> AppResult<Vec<ShownInsight>>;

    /// Replace persisted entries
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    fn save(&mut self, entries: &[ShownInsight]) -> AppResult<()>;
}

/// In-memory store for tests and short-lived sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryInsightKeyStore {
    entries: Vec<ShownInsight>,
}

impl MemoryInsightKeyStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with entries
    #[must_use]
    pub const fn with_entries(entries: Vec<ShownInsight>) -> Self {
        Self { entries }
    }
}

impl InsightKeyStore for MemoryInsightKeyStore {
    fn load(&self) -> AppResult<Vec<ShownInsight>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[ShownInsight]) -> AppResult<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

/// Tracks which insight keys were shown recently
pub struct RecentInsightTracker<S: InsightKeyStore> {
    store: S,
    entries: Vec<ShownInsight>,
    config: InsightTrackerConfig,
}

impl<S: InsightKeyStore> RecentInsightTracker<S> {
    /// Open a tracker using the global configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be loaded
    pub fn open(store: S) -> AppResult<Self> {
        Self::with_config(store, IntelligenceConfig::global().insight_tracker.clone())
    }

    /// Open a tracker with custom bounds
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be loaded
    pub fn with_config(store: S, config: InsightTrackerConfig) -> AppResult<Self> {
        let mut entries = store.load()?;
        entries.sort_by_key(|entry| entry.shown_at);
        debug!(entries = entries.len(), "Loaded recent insight history");
        Ok(Self {
            store,
            entries,
            config,
        })
    }

    /// Record a key as shown now
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn record(&mut self, key: &str) -> AppResult<()> {
        self.record_at(key, Utc::now())
    }

    /// Record a key as shown at `shown_at`
    ///
    /// In-memory history only changes once the store accepted the write.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn record_at(&mut self, key: &str, shown_at: DateTime<Utc>) -> AppResult<()> {
        let mut staged: Vec<ShownInsight> = self
            .entries
            .iter()
            .filter(|entry| entry.key != key)
            .cloned()
            .collect();
        staged.push(ShownInsight {
            key: key.to_owned(),
            shown_at,
        });
        staged.sort_by_key(|entry| entry.shown_at);
        self.prune(&mut staged, shown_at);
        self.commit(staged)
    }

    /// Keys shown within the window ending now
    #[must_use]
    pub fn recent_keys(&self) -> BTreeSet<String> {
        self.recent_keys_at(Utc::now())
    }

    /// Keys shown within the window ending at `now`
    #[must_use]
    pub fn recent_keys_at(&self, now: DateTime<Utc>) -> BTreeSet<String> {
        let window = self.window();
        self.entries
            .iter()
            .filter(|entry| now.signed_duration_since(entry.shown_at) < window)
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Entries in chronological order
    #[must_use]
    pub fn entries(&self) -> &[ShownInsight] {
        &self.entries
    }

    /// Forget everything
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn clear(&mut self) -> AppResult<()> {
        self.commit(Vec::new())
    }

    /// Release the underlying store
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn window(&self) -> Duration {
        Duration::days(self.config.window_days.clamp(0, MAX_WINDOW_DAYS))
    }

    fn prune(&self, entries: &mut Vec<ShownInsight>, now: DateTime<Utc>) {
        let window = self.window();
        entries.retain(|entry| now.signed_duration_since(entry.shown_at) < window);
        let overflow = entries.len().saturating_sub(self.config.max_tracked);
        if overflow > 0 {
            entries.drain(..overflow);
        }
    }

    fn commit(&mut self, staged: Vec<ShownInsight>) -> AppResult<()> {
        self.store.save(&staged)?;
        self.entries = staged;
        Ok(())
    }
}
