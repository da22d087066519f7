// ABOUTME: Intelligence module configuration for plan generation and check-in insights
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Intelligence Configuration Module
//!
//! Type-safe configuration for the recommendation engine, the check-in insight
//! generator, and the recent-insight tracker. Defaults mirror the fixed
//! constants in `vitalis_core::constants`; environment variables may override
//! a handful of them and the result is validated before use.
//!
//! # Module Structure
//!
//! - `recommendation` - Plan size bounds, tier thresholds, keyword matching
//! - `insights` - Insight margins, trend window, tracker window

pub mod error;
pub mod insights;
pub mod recommendation;

pub use error::ConfigError;
pub use insights::{CheckInInsightConfig, InsightTrackerConfig};
pub use recommendation::{
    MatchingConfig, PlanSizeLimits, RecommendationEngineConfig, TierThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for supplement plan generation
    pub recommendation_engine: RecommendationEngineConfig,
    /// Configuration for the check-in insight cascade
    pub check_in_insights: CheckInInsightConfig,
    /// Configuration for recent-insight tracking
    pub insight_tracker: InsightTrackerConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment overrides on top of defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first bound that is inverted or out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.recommendation_engine.limits;
        if limits.min_supplements == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_supplements must be at least 1",
            ));
        }
        if limits.min_supplements > limits.max_supplements {
            return Err(ConfigError::InvalidRange(
                "min_supplements must be <= max_supplements",
            ));
        }

        let tiers = &self.recommendation_engine.tiers;
        if tiers.core_min_matched_goals < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "core_min_matched_goals must be at least 2",
            ));
        }
        if tiers.targeted_min_weight == 0 || tiers.core_min_weight == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "tier weight thresholds must be positive",
            ));
        }

        let insights = &self.check_in_insights;
        if insights.above_baseline_margin == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "above_baseline_margin must be positive",
            ));
        }
        if !insights.above_average_margin.is_finite() || insights.above_average_margin <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "above_average_margin must be a positive number",
            ));
        }
        if insights.trailing_average_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trailing_average_days must be at least 1",
            ));
        }
        if insights.trend_min_points < 2 || insights.trend_min_points > insights.trend_window_days {
            return Err(ConfigError::InvalidRange(
                "trend_min_points must be between 2 and trend_window_days",
            ));
        }
        if insights.trend_min_net_gain <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_min_net_gain must be positive",
            ));
        }
        if insights.default_milestone_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_milestone_days must be at least 1",
            ));
        }

        let tracker = &self.insight_tracker;
        if tracker.window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "insight window_days must be at least 1",
            ));
        }
        if tracker.max_tracked == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "insight max_tracked must be at least 1",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Plan size overrides
        Self::apply_env_var(
            "VITALIS_PLAN_MIN_SUPPLEMENTS",
            &mut self.recommendation_engine.limits.min_supplements,
        )?;
        Self::apply_env_var(
            "VITALIS_PLAN_MAX_SUPPLEMENTS",
            &mut self.recommendation_engine.limits.max_supplements,
        )?;

        // Insight margin overrides
        Self::apply_env_var(
            "VITALIS_ABOVE_BASELINE_MARGIN",
            &mut self.check_in_insights.above_baseline_margin,
        )?;
        Self::apply_env_var(
            "VITALIS_ABOVE_AVERAGE_MARGIN",
            &mut self.check_in_insights.above_average_margin,
        )?;

        // Tracker overrides
        Self::apply_env_var(
            "VITALIS_INSIGHT_WINDOW_DAYS",
            &mut self.insight_tracker.window_days,
        )?;
        Self::apply_env_var(
            "VITALIS_INSIGHT_MAX_TRACKED",
            &mut self.insight_tracker.max_tracked,
        )?;

        Ok(self)
    }
}
