// ABOUTME: Check-in insight and recent-insight tracker configuration
// ABOUTME: Margins, trend window, milestone interval, and repetition window settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use serde::{Deserialize, Serialize};
use vitalis_core::constants::insights;

/// Thresholds for the check-in insight rule cascade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInInsightConfig {
    /// Points today must exceed the baseline by
    pub above_baseline_margin: u8,
    /// Points today must exceed the trailing average by
    pub above_average_margin: f64,
    /// Days in the trailing average
    pub trailing_average_days: usize,
    /// Completed check-ins (including today) examined for trends
    pub trend_window_days: usize,
    /// Minimum points before a trend is evaluated
    pub trend_min_points: usize,
    /// Net gain that qualifies a trend on its own
    pub trend_min_net_gain: f64,
    /// Milestone interval for supplements without an onset window
    pub default_milestone_days: u32,
}

impl Default for CheckInInsightConfig {
    fn default() -> Self {
        Self {
            above_baseline_margin: insights::ABOVE_BASELINE_MARGIN,
            above_average_margin: insights::ABOVE_AVERAGE_MARGIN,
            trailing_average_days: insights::TRAILING_AVERAGE_DAYS,
            trend_window_days: insights::TREND_WINDOW_DAYS,
            trend_min_points: insights::TREND_MIN_POINTS,
            trend_min_net_gain: insights::TREND_MIN_NET_GAIN,
            default_milestone_days: insights::DEFAULT_MILESTONE_DAYS,
        }
    }
}

/// Recent-insight tracker bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightTrackerConfig {
    /// Keys shown within this many days count as recent
    pub window_days: i64,
    /// Oldest entries are dropped beyond this count
    pub max_tracked: usize,
}

impl Default for InsightTrackerConfig {
    fn default() -> Self {
        Self {
            window_days: insights::RECENT_INSIGHT_WINDOW_DAYS,
            max_tracked: insights::MAX_TRACKED_INSIGHTS,
        }
    }
}
