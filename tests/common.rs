// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, profile builders, plan fixtures, and check-in history helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls
)]
//! Shared test utilities for `vitalis`

use chrono::NaiveDate;
use std::sync::Once;
use vitalis::catalog::SupplementCatalog;
use vitalis::intelligence::config::intelligence::{
    CheckInInsightConfig, RecommendationEngineConfig,
};
use vitalis::intelligence::{CheckInInsightGenerator, RecommendationEngine};
use vitalis::models::{
    BiologicalSex, DailyCheckIn, DietType, DimensionScores, HealthGoal, SupplementPlan,
    UserProfile,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Adult profile with the given goals and nothing else notable
pub fn profile_with_goals(goals: &[HealthGoal]) -> UserProfile {
    UserProfile {
        name: "Test User".into(),
        age: Some(34),
        sex: BiologicalSex::Male,
        goals: goals.to_vec(),
        ..UserProfile::default()
    }
}

/// Profile taking the given medications
pub fn profile_with_medications(goals: &[HealthGoal], medications: &[&str]) -> UserProfile {
    UserProfile {
        medications: medications.iter().map(|m| (*m).to_owned()).collect(),
        ..profile_with_goals(goals)
    }
}

/// Profile with the given allergies
pub fn profile_with_allergies(goals: &[HealthGoal], allergies: &[&str]) -> UserProfile {
    UserProfile {
        allergies: allergies.iter().map(|a| (*a).to_owned()).collect(),
        ..profile_with_goals(goals)
    }
}

/// Vegan profile
pub fn vegan_profile(goals: &[HealthGoal]) -> UserProfile {
    UserProfile {
        diet_type: DietType::Vegan,
        ..profile_with_goals(goals)
    }
}

/// Engine pinned to default thresholds regardless of environment overrides
pub fn engine() -> RecommendationEngine {
    init_test_logging();
    RecommendationEngine::with_config(RecommendationEngineConfig::default())
}

/// Insight generator pinned to default thresholds, using reference onset windows
pub fn generator() -> CheckInInsightGenerator {
    init_test_logging();
    CheckInInsightGenerator::with_config(CheckInInsightConfig::default())
        .with_catalog(&SupplementCatalog::reference())
}

/// Plan generated from the reference catalog
pub fn reference_plan(profile: &UserProfile) -> SupplementPlan {
    engine().generate_plan(profile, &SupplementCatalog::reference())
}

/// Completed check-ins on consecutive days ending the day before `today`, oldest first
pub fn consecutive_history(today: NaiveDate, scores: &[DimensionScores]) -> Vec<DailyCheckIn> {
    let count = scores.len() as u64;
    scores
        .iter()
        .enumerate()
        .map(|(offset, scores)| {
            let days_back = count - offset as u64;
            let day = today
                .checked_sub_days(chrono::Days::new(days_back))
                .expect("date in range");
            DailyCheckIn::completed(day, *scores)
        })
        .collect()
}

/// Scores with one dimension changed from a uniform base
pub fn scores_with(
    base: u8,
    dimension: vitalis::models::WellnessDimension,
    value: u8,
) -> DimensionScores {
    let mut scores = DimensionScores::uniform(base);
    scores.set(dimension, value);
    scores
}
