// ABOUTME: Supplement recommendation and check-in insight algorithms for Vitalis
// ABOUTME: Plan generation, safety screening, timing, reasoning, insight cascade, and repetition tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

#![deny(unsafe_code)]

//! # Vitalis Intelligence
//!
//! Pure, synchronous decision logic on top of `vitalis-core` data. Nothing in
//! this crate performs I/O except through the `InsightKeyStore` trait, whose
//! file-backed implementation lives in the root crate.
//!
//! ## Modules
//!
//! - **recommendation_engine**: Profile + catalog to a ranked, screened, dosed plan
//! - **exclusions**: Medication, allergy, and condition screening
//! - **timing**: Effect-class locks and synergy-driven timing
//! - **plan_reasoning**: Deterministic plan narrative
//! - **checkin_insights**: Priority-ordered insight rule cascade
//! - **insight_tracker**: Recently shown insight keys with pluggable persistence

/// Intelligence configuration with validated, env-overridable thresholds
pub mod config;

/// Supplement plan generation
pub mod recommendation_engine;

/// Medication, allergy, and contraindication screening
pub mod exclusions;

/// Profile-conditioned supplement additions
pub mod profile_additions;

/// Time-of-day resolution for plan lines
pub mod timing;

/// Plan narrative composition
pub mod plan_reasoning;

/// Check-in insight rule cascade
pub mod checkin_insights;

/// Static supplement tips and fun facts
pub mod insight_tips;

/// Recently shown insight tracking
pub mod insight_tracker;

pub use checkin_insights::{CheckInInsightGenerator, InsightContext};
pub use config::IntelligenceConfig;
pub use exclusions::SafetyScreen;
pub use insight_tracker::{
    InsightKeyStore, MemoryInsightKeyStore, RecentInsightTracker, ShownInsight,
};
pub use recommendation_engine::RecommendationEngine;
