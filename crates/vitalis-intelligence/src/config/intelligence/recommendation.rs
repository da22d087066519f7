// ABOUTME: Recommendation engine configuration for supplement plan generation
// ABOUTME: Configures plan size bounds, tier thresholds, and free-text matching limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Recommendation Engine Configuration
//!
//! Provides configuration for the supplement plan generator: how many
//! supplements a plan may hold, how summed goal weights map to tiers, and how
//! short a medication or allergy term may be before it stops participating in
//! substring matching.

use serde::{Deserialize, Serialize};
use vitalis_core::constants::{matching, plan, tiers};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Plan size bounds
    pub limits: PlanSizeLimits,
    /// Tier thresholds
    pub tiers: TierThresholds,
    /// Free-text matching settings
    pub matching: MatchingConfig,
}

/// Bounds on the number of supplements in a generated plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSizeLimits {
    /// Smallest plan produced when the catalog allows it
    pub min_supplements: usize,
    /// Largest plan ever produced
    pub max_supplements: usize,
    /// Slots granted per selected goal
    pub slots_per_goal: usize,
    /// Slots granted regardless of goal count
    pub base_slots: usize,
}

impl PlanSizeLimits {
    /// Target plan size for a number of effective goals
    #[must_use]
    pub fn target_size(&self, goal_count: usize) -> usize {
        goal_count
            .saturating_mul(self.slots_per_goal)
            .saturating_add(self.base_slots)
            .clamp(self.min_supplements, self.max_supplements)
    }
}

/// Thresholds mapping goal-match data to a tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Matched goals required for the core tier
    pub core_min_matched_goals: usize,
    /// Summed weight required for the core tier
    pub core_min_weight: u32,
    /// Single-goal weight required for the targeted tier
    pub targeted_min_weight: u32,
}

/// Medication and allergy matching settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Terms shorter than this never match
    pub min_keyword_len: usize,
}

impl Default for PlanSizeLimits {
    fn default() -> Self {
        Self {
            min_supplements: plan::MIN_PLAN_SUPPLEMENTS,
            max_supplements: plan::MAX_PLAN_SUPPLEMENTS,
            slots_per_goal: plan::SLOTS_PER_GOAL,
            base_slots: plan::BASE_PLAN_SLOTS,
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            core_min_matched_goals: tiers::CORE_MIN_MATCHED_GOALS,
            core_min_weight: tiers::CORE_MIN_WEIGHT,
            targeted_min_weight: tiers::TARGETED_MIN_WEIGHT,
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_keyword_len: matching::MIN_KEYWORD_LEN,
        }
    }
}
