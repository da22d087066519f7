// ABOUTME: Check-in insight output and the persisted insight feed record
// ABOUTME: Insight categories are derived from the stable key prefixes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use super::wellness::WellnessDimension;
use crate::constants::insight_keys;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insight produced for a single check-in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckInInsight {
    /// Stable key used for repetition tracking and categorisation
    pub key: String,
    /// Human-readable message
    pub message: String,
    /// Dimension the insight is about, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<WellnessDimension>,
}

impl CheckInInsight {
    /// Create an insight
    pub fn new(
        key: impl Into<String>,
        message: impl Into<String>,
        dimension: Option<WellnessDimension>,
    ) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            dimension,
        }
    }

    /// Display category derived from the key prefix
    #[must_use]
    pub fn category(&self) -> InsightCategory {
        InsightCategory::from_key(&self.key)
    }
}

/// Display category of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// New personal best
    PersonalBest,
    /// Supplement consistency milestone
    SupplementMilestone,
    /// Above the onboarding baseline
    AboveBaseline,
    /// Above the 7-day average
    AboveAverage,
    /// Improving trend
    Trend,
    /// Took every plan supplement
    Adherence,
    /// Supplement tip
    Tip,
    /// Fun fact
    FunFact,
}

impl InsightCategory {
    /// Classify a key by prefix
    ///
    /// Longer prefixes are tested first so `supp_tip_` is never mistaken for a
    /// `supp_` milestone. Unknown keys are treated as fun facts.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        const PREFIXES: [(&str, InsightCategory); 8] = [
            (insight_keys::ABOVE_BASELINE, InsightCategory::AboveBaseline),
            (insight_keys::FULL_ADHERENCE, InsightCategory::Adherence),
            (insight_keys::SUPPLEMENT_TIP, InsightCategory::Tip),
            (insight_keys::ABOVE_AVERAGE, InsightCategory::AboveAverage),
            (insight_keys::IMPROVING, InsightCategory::Trend),
            (insight_keys::FUN_FACT, InsightCategory::FunFact),
            (insight_keys::SUPPLEMENT_MILESTONE, InsightCategory::SupplementMilestone),
            (insight_keys::PERSONAL_BEST, InsightCategory::PersonalBest),
        ];

        PREFIXES
            .iter()
            .find(|(prefix, _)| key.starts_with(prefix))
            .map_or(Self::FunFact, |(_, category)| *category)
    }

    /// Feed title for this category
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PersonalBest => "New personal best",
            Self::SupplementMilestone => "Consistency milestone",
            Self::AboveBaseline => "Above your baseline",
            Self::AboveAverage => "Better than usual",
            Self::Trend => "Trending up",
            Self::Adherence => "Perfect day",
            Self::Tip => "Supplement tip",
            Self::FunFact => "Did you know?",
        }
    }
}

/// Insight record persisted in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Record identity
    pub id: Uuid,
    /// Source insight key
    pub key: String,
    /// Title
    pub title: String,
    /// Body text
    pub body: String,
    /// Display category
    pub category: InsightCategory,
    /// Related dimension
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<WellnessDimension>,
    /// Check-in date that produced it
    pub date: NaiveDate,
    /// Opened by the user
    pub is_read: bool,
    /// Hidden by the user
    pub is_dismissed: bool,
}

impl Insight {
    /// Build the feed record for a generated check-in insight
    #[must_use]
    pub fn from_check_in(insight: &CheckInInsight, date: NaiveDate) -> Self {
        let category = insight.category();
        Self {
            id: Uuid::new_v4(),
            key: insight.key.clone(),
            title: category.title().to_owned(),
            body: insight.message.clone(),
            category,
            dimension: insight.dimension,
            date,
            is_read: false,
            is_dismissed: false,
        }
    }

    /// Mark as read
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }

    /// Dismiss from the feed
    pub fn dismiss(&mut self) {
        self.is_dismissed = true;
    }
}
