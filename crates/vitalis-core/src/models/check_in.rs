// ABOUTME: Daily check-in record with dimension scores and supplement intake logs
// ABOUTME: Wellbeing is always derived from the five scores, never stored separately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use super::plan::SupplementPlan;
use super::wellness::{DimensionScores, WellnessDimension};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether one plan supplement was taken on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplementLog {
    /// Plan supplement name
    pub supplement_name: String,
    /// Taken today
    pub taken: bool,
    /// When it was marked as taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<DateTime<Utc>>,
}

/// One calendar day's check-in
///
/// At most one check-in exists per date; the persistence layer owns that
/// guarantee and the engine assumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCheckIn {
    /// Calendar date
    pub date: NaiveDate,
    /// Dimension scores
    pub scores: DimensionScores,
    /// One log per active plan supplement
    #[serde(default)]
    pub supplement_logs: Vec<SupplementLog>,
    /// True once the user submitted scores (false while they are defaults)
    #[serde(default)]
    pub wellbeing_completed: bool,
}

impl DailyCheckIn {
    /// Fresh check-in for `date` with default scores and one log per included plan line
    #[must_use]
    pub fn for_plan(date: NaiveDate, plan: Option<&SupplementPlan>) -> Self {
        let supplement_logs = plan
            .map(|plan| {
                plan.included_supplements()
                    .map(|line| SupplementLog {
                        supplement_name: line.name.clone(),
                        taken: false,
                        taken_at: None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            date,
            scores: DimensionScores::default(),
            supplement_logs,
            wellbeing_completed: false,
        }
    }

    /// Completed check-in with the given scores and no supplement logs
    #[must_use]
    pub const fn completed(date: NaiveDate, scores: DimensionScores) -> Self {
        Self {
            date,
            scores,
            supplement_logs: Vec::new(),
            wellbeing_completed: true,
        }
    }

    /// Record the user's scores
    pub fn submit_scores(&mut self, scores: DimensionScores) {
        self.scores = scores;
        self.wellbeing_completed = true;
    }

    /// Mean of the five dimension scores
    #[must_use]
    pub fn wellbeing_score(&self) -> f64 {
        self.scores.wellbeing()
    }

    /// Score for one dimension
    #[must_use]
    pub const fn score(&self, dimension: WellnessDimension) -> u8 {
        self.scores.get(dimension)
    }

    /// Mark a supplement as taken or not; adds a log line if the supplement was missing
    pub fn mark_taken(&mut self, supplement_name: &str, taken: bool, at: DateTime<Utc>) {
        let taken_at = taken.then_some(at);
        if let Some(log) = self
            .supplement_logs
            .iter_mut()
            .find(|log| log.supplement_name.eq_ignore_ascii_case(supplement_name))
        {
            log.taken = taken;
            log.taken_at = taken_at;
        } else {
            self.supplement_logs.push(SupplementLog {
                supplement_name: supplement_name.to_owned(),
                taken,
                taken_at,
            });
        }
    }

    /// Whether a supplement was logged as taken
    #[must_use]
    pub fn was_taken(&self, supplement_name: &str) -> bool {
        self.supplement_logs
            .iter()
            .any(|log| log.taken && log.supplement_name.eq_ignore_ascii_case(supplement_name))
    }

    /// Names of supplements logged as taken
    #[must_use]
    pub fn taken_supplements(&self) -> Vec<String> {
        self.supplement_logs
            .iter()
            .filter(|log| log.taken)
            .map(|log| log.supplement_name.clone())
            .collect()
    }

    /// Fraction of logged supplements taken (0.0-1.0); `None` without logs
    #[must_use]
    pub fn adherence(&self) -> Option<f64> {
        if self.supplement_logs.is_empty() {
            return None;
        }
        let taken = self.supplement_logs.iter().filter(|log| log.taken).count();
        Some(taken as f64 / self.supplement_logs.len() as f64)
    }
}
