// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Plan bounds, tier thresholds, insight key prefixes, and insight margins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Constants module
//!
//! Fixed values that make plan generation and insight selection reproducible.
//! Configuration defaults in `vitalis-intelligence` are derived from these.

/// Supplement plan size and versioning
pub mod plan {
    /// Smallest plan the engine produces when the catalog allows it
    pub const MIN_PLAN_SUPPLEMENTS: usize = 3;
    /// Largest plan the engine ever produces
    pub const MAX_PLAN_SUPPLEMENTS: usize = 10;
    /// Plan slots granted per selected goal before clamping
    pub const SLOTS_PER_GOAL: usize = 2;
    /// Plan slots granted regardless of goal count before clamping
    pub const BASE_PLAN_SLOTS: usize = 2;
    /// Version stamped on freshly generated plans
    pub const PLAN_VERSION: u32 = 1;
}

/// Tier assignment thresholds over summed goal weights
pub mod tiers {
    /// Minimum number of matched goals for the core tier
    pub const CORE_MIN_MATCHED_GOALS: usize = 2;
    /// Minimum summed weight for the core tier
    pub const CORE_MIN_WEIGHT: u32 = 4;
    /// Minimum single-goal weight for the targeted tier
    pub const TARGETED_MIN_WEIGHT: u32 = 2;
}

/// Goal weight bounds for catalog goal mappings
pub mod goal_weights {
    /// Weakest evidence-derived association
    pub const MIN_GOAL_WEIGHT: u8 = 1;
    /// Strongest evidence-derived association
    pub const MAX_GOAL_WEIGHT: u8 = 3;
}

/// Free-text matching for medications and allergies
pub mod matching {
    /// Normalized terms shorter than this never participate in substring matching
    pub const MIN_KEYWORD_LEN: usize = 3;
}

/// Wellness score bounds
pub mod scores {
    /// Lowest dimension score
    pub const MIN_SCORE: u8 = 0;
    /// Highest dimension score
    pub const MAX_SCORE: u8 = 100;
    /// Score assigned before the user submits a check-in
    pub const DEFAULT_SCORE: u8 = 50;
}

/// Check-in insight thresholds (points on the 0-100 scale)
pub mod insights {
    /// Today must beat the stored baseline by at least this many points
    pub const ABOVE_BASELINE_MARGIN: u8 = 10;
    /// Today must beat the trailing average by at least this many points
    pub const ABOVE_AVERAGE_MARGIN: f64 = 8.0;
    /// Days included in trailing averages
    pub const TRAILING_AVERAGE_DAYS: usize = 7;
    /// Most recent completed check-ins (including today) examined for trends
    pub const TREND_WINDOW_DAYS: usize = 5;
    /// Minimum points required before a trend is considered
    pub const TREND_MIN_POINTS: usize = 3;
    /// Net gain across the trend window that qualifies on its own
    pub const TREND_MIN_NET_GAIN: f64 = 10.0;
    /// Milestone interval for supplements without a catalog onset window
    pub const DEFAULT_MILESTONE_DAYS: u32 = 7;
    /// Trailing window for the recent-insight tracker
    pub const RECENT_INSIGHT_WINDOW_DAYS: i64 = 7;
    /// Maximum number of shown insights the tracker remembers
    pub const MAX_TRACKED_INSIGHTS: usize = 20;
}

/// Insight key prefixes shared with the rendering layer
///
/// These strings are a public contract: the feed derives its display category
/// from them, so they must never change.
pub mod insight_keys {
    /// Personal best for a dimension
    pub const PERSONAL_BEST: &str = "pb_";
    /// Supplement consistency milestone
    pub const SUPPLEMENT_MILESTONE: &str = "supp_";
    /// Today above the user's baseline
    pub const ABOVE_BASELINE: &str = "above_baseline_";
    /// Today above the trailing average
    pub const ABOVE_AVERAGE: &str = "above_avg_";
    /// Improving dimension trend
    pub const IMPROVING: &str = "improving_";
    /// Every plan supplement taken today
    pub const FULL_ADHERENCE: &str = "full_adherence";
    /// Supplement tip fallback
    pub const SUPPLEMENT_TIP: &str = "supp_tip_";
    /// Fun fact fallback
    pub const FUN_FACT: &str = "fun_fact_";
}

/// Service identity used by logging
pub mod service_names {
    /// Name reported in structured logs
    pub const VITALIS: &str = "vitalis";
}
