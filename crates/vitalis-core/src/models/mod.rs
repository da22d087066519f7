// ABOUTME: Core data models for the Vitalis wellness engine
// ABOUTME: Re-exports profile, supplement, plan, check-in, streak, insight and wellness types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! # Data Models
//!
//! Plain data exchanged between the engine and its collaborators. The UI owns
//! profiles and check-ins, the catalog supplier owns supplements, and the
//! engine produces plans and insights.
//!
//! ## Design Principles
//!
//! - **Serializable**: every model round-trips through JSON with stable snake_case keys
//! - **Derived values stay derived**: wellbeing is computed from the five scores
//! - **No physical deletion**: plan lines are toggled, never removed

// Domain modules
mod check_in;
mod insight;
mod plan;
mod profile;
mod streak;
mod supplement;
mod wellness;

// Check-in domain
pub use check_in::{DailyCheckIn, SupplementLog};

// Insight domain
pub use insight::{CheckInInsight, Insight, InsightCategory};

// Plan domain
pub use plan::{
    ExcludedSupplement, ExclusionReason, PlanSupplement, PlanSupplementSource, SupplementPlan,
    SupplementTier,
};

// Profile domain
pub use profile::{
    AlcoholIntake, BiologicalSex, CaffeineIntake, DietType, ExerciseFrequency, HealthGoal,
    StressLevel, UserProfile,
};

// Streak domain
pub use streak::UserStreak;

// Supplement domain
pub use supplement::{
    Dosage, DosageRange, DosageUnit, EffectClass, EvidenceLevel, OnsetWindow, Supplement,
    SupplementTiming,
};

// Wellness domain
pub use wellness::{DimensionScores, WellbeingScore, WellnessDimension};
