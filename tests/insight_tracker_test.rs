// ABOUTME: Integration tests for recent insight tracking
// ABOUTME: Window expiry, bounded history, re-recording, and file-backed persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::BTreeSet;
use tempfile::TempDir;
use vitalis::errors::{AppError, AppResult};
use vitalis::intelligence::config::intelligence::InsightTrackerConfig;
use vitalis::intelligence::{
    InsightKeyStore, MemoryInsightKeyStore, RecentInsightTracker, ShownInsight,
};
use vitalis::storage::FileInsightKeyStore;

fn noon(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
}

fn tracker() -> RecentInsightTracker<MemoryInsightKeyStore> {
    common::init_test_logging();
    RecentInsightTracker::with_config(MemoryInsightKeyStore::new(), InsightTrackerConfig::default())
        .unwrap()
}

#[test]
fn test_recorded_keys_are_recent_inside_window() {
    let mut tracker = tracker();
    tracker.record_at("pb_sleep", noon(1)).unwrap();
    tracker.record_at("full_adherence", noon(3)).unwrap();

    let recent = tracker.recent_keys_at(noon(5));
    assert_eq!(
        recent,
        BTreeSet::from(["pb_sleep".to_owned(), "full_adherence".to_owned()])
    );
}

#[test]
fn test_keys_expire_after_window() {
    let mut tracker = tracker();
    tracker.record_at("pb_sleep", noon(1)).unwrap();

    let just_before = noon(8) - Duration::seconds(1);
    assert!(tracker.recent_keys_at(just_before).contains("pb_sleep"));
    assert!(!tracker.recent_keys_at(noon(8)).contains("pb_sleep"));
}

#[test]
fn test_recording_again_refreshes_timestamp() {
    let mut tracker = tracker();
    tracker.record_at("fun_fact_3", noon(1)).unwrap();
    tracker.record_at("fun_fact_3", noon(6)).unwrap();

    assert_eq!(tracker.entries().len(), 1);
    assert_eq!(tracker.entries()[0].shown_at, noon(6));
    assert!(tracker.recent_keys_at(noon(10)).contains("fun_fact_3"));
}

#[test]
fn test_recording_prunes_expired_entries() {
    let mut tracker = tracker();
    tracker.record_at("pb_mood", noon(1)).unwrap();
    tracker.record_at("pb_gut", noon(20)).unwrap();

    let keys: Vec<&str> = tracker.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["pb_gut"]);
}

#[test]
fn test_history_is_bounded_by_max_tracked() {
    let config = InsightTrackerConfig {
        max_tracked: 3,
        ..InsightTrackerConfig::default()
    };
    let mut tracker =
        RecentInsightTracker::with_config(MemoryInsightKeyStore::new(), config).unwrap();
    let start = noon(1);
    for index in 0..5 {
        tracker
            .record_at(&format!("fun_fact_{index}"), start + Duration::hours(index))
            .unwrap();
    }

    let keys: Vec<&str> = tracker.entries().iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["fun_fact_2", "fun_fact_3", "fun_fact_4"]);
}

#[test]
fn test_clear_forgets_everything() {
    let mut tracker = tracker();
    tracker.record_at("pb_sleep", noon(1)).unwrap();
    tracker.clear().unwrap();

    assert!(tracker.entries().is_empty());
    assert!(tracker.into_store().load().unwrap().is_empty());
}

#[test]
fn test_store_receives_every_change() {
    let mut tracker = tracker();
    tracker.record_at("pb_sleep", noon(2)).unwrap();
    tracker.record_at("above_avg_mood", noon(3)).unwrap();

    let saved = tracker.into_store().load().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[1].key, "above_avg_mood");
}

#[test]
fn test_loaded_entries_are_sorted() {
    let store = MemoryInsightKeyStore::with_entries(vec![
        ShownInsight {
            key: "later".into(),
            shown_at: noon(4),
        },
        ShownInsight {
            key: "earlier".into(),
            shown_at: noon(2),
        },
    ]);
    let tracker =
        RecentInsightTracker::with_config(store, InsightTrackerConfig::default()).unwrap();

    assert_eq!(tracker.entries()[0].key, "earlier");
    assert_eq!(tracker.entries()[1].key, "later");
}

#[test]
fn test_file_store_persists_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state").join("recent_insights.json");

    {
        let mut tracker = RecentInsightTracker::with_config(
            FileInsightKeyStore::new(&path),
            InsightTrackerConfig::default(),
        )
        .unwrap();
        assert!(tracker.entries().is_empty());
        tracker.record_at("supp_tip_melatonin", noon(5)).unwrap();
    }

    assert!(path.exists());
    let reopened = RecentInsightTracker::with_config(
        FileInsightKeyStore::new(&path),
        InsightTrackerConfig::default(),
    )
    .unwrap();
    assert!(reopened
        .recent_keys_at(noon(6))
        .contains("supp_tip_melatonin"));
}

#[test]
fn test_file_store_rejects_corrupt_history() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recent_insights.json");
    std::fs::write(&path, "not json").unwrap();

    let result = RecentInsightTracker::with_config(
        FileInsightKeyStore::new(&path),
        InsightTrackerConfig::default(),
    );
    assert!(result.is_err());
}

/// Store whose writes can be switched off
#[derive(Default)]
struct FlakyStore {
    saved: Vec<ShownInsight>,
    fail_writes: bool,
}

impl InsightKeyStore for FlakyStore {
    fn load(&self) -> AppResult<Vec<ShownInsight>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, entries: &[ShownInsight]) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::storage("disk full"));
        }
        self.saved = entries.to_vec();
        Ok(())
    }
}

#[test]
fn test_failed_save_leaves_history_unchanged() {
    let mut tracker =
        RecentInsightTracker::with_config(FlakyStore::default(), InsightTrackerConfig::default())
            .unwrap();
    tracker.record_at("pb_sleep", noon(1)).unwrap();
    let before = tracker.entries().to_vec();

    let mut store = tracker.into_store();
    store.fail_writes = true;
    let mut tracker =
        RecentInsightTracker::with_config(store, InsightTrackerConfig::default()).unwrap();

    assert!(tracker.record_at("full_adherence", noon(2)).is_err());
    assert_eq!(tracker.entries(), before.as_slice());
    assert!(!tracker.recent_keys_at(noon(2)).contains("full_adherence"));

    assert!(tracker.clear().is_err());
    assert_eq!(tracker.entries(), before.as_slice());
}
