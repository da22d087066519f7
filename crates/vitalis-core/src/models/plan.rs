// ABOUTME: Generated supplement plan and its individual plan lines
// ABOUTME: SupplementPlan, PlanSupplement, SupplementTier, exclusion records, and UI-driven plan edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use super::supplement::{DosageUnit, SupplementTiming};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Priority tier of a plan line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementTier {
    /// Covers several goals with high combined weight
    Core,
    /// Strongly matches a single goal
    Targeted,
    /// Everything else
    Supporting,
}

impl SupplementTier {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Targeted => "Targeted",
            Self::Supporting => "Supporting",
        }
    }
}

impl fmt::Display for SupplementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a line is part of the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSupplementSource {
    /// Selected by goal scoring
    GoalMatch,
    /// Added by a profile rule (diet, caffeine)
    ProfileAddition,
    /// Added to reach the minimum plan size
    Backfill,
    /// Added manually by the user
    Manual,
}

/// Reason a catalog supplement was kept out of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// One of the user's medications matches an interaction keyword
    MedicationInteraction {
        /// Matched medication keyword
        keyword: String,
    },
    /// One of the user's allergies matches the supplement
    Allergy {
        /// Matched allergen
        allergen: String,
    },
    /// Absolutely contraindicated for the user's condition
    Contraindicated {
        /// Condition label (pregnancy, breastfeeding)
        condition: String,
    },
}

impl ExclusionReason {
    /// Short description used in reasoning text
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::MedicationInteraction { keyword } => {
                format!("possible interaction with {keyword}")
            }
            Self::Allergy { allergen } => format!("your {allergen} allergy"),
            Self::Contraindicated { condition } => format!("not recommended during {condition}"),
        }
    }
}

/// A catalog supplement that was excluded from the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedSupplement {
    /// Catalog name
    pub name: String,
    /// Why it was excluded
    pub reason: ExclusionReason,
}

/// One line of a supplement plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSupplement {
    /// Line identity
    pub id: Uuid,
    /// Catalog supplement name
    pub name: String,
    /// Display dosage, e.g. "27 mg"
    pub dosage: String,
    /// Numeric dose in `dosage_unit`
    pub dosage_amount: f64,
    /// Unit of `dosage_amount`
    pub dosage_unit: DosageUnit,
    /// When to take it
    pub timing: SupplementTiming,
    /// Priority tier
    pub tier: SupplementTier,
    /// Goal keys this supplement matched
    pub matched_goals: Vec<String>,
    /// Summed goal weight across matched goals
    pub goal_overlap_score: u32,
    /// False once the user removes the line; lines are never deleted
    pub is_included: bool,
    /// How the line entered the plan
    pub source: PlanSupplementSource,
    /// Per-line explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    /// Research or safety note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_note: Option<String>,
}

/// A generated supplement plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementPlan {
    /// Plan identity
    pub id: Uuid,
    /// Generation timestamp
    pub created_at: DateTime<Utc>,
    /// Plan format version
    pub version: u32,
    /// Narrative explaining the plan
    pub reasoning: String,
    /// Ordered plan lines
    pub supplements: Vec<PlanSupplement>,
    /// Supplements excluded for safety
    #[serde(default)]
    pub excluded: Vec<ExcludedSupplement>,
}

impl SupplementPlan {
    /// Lines the user still takes
    pub fn included_supplements(&self) -> impl Iterator<Item = &PlanSupplement> {
        self.supplements.iter().filter(|line| line.is_included)
    }

    /// Names of included lines, in plan order
    #[must_use]
    pub fn included_names(&self) -> Vec<&str> {
        self.included_supplements()
            .map(|line| line.name.as_str())
            .collect()
    }

    /// Find a line by supplement name (case-insensitive)
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&PlanSupplement> {
        self.supplements
            .iter()
            .find(|line| line.name.eq_ignore_ascii_case(name))
    }

    /// Whether the plan lists this supplement, included or not
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Mark a line as removed without deleting it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the plan has no line with this name
    pub fn remove_supplement(&mut self, name: &str) -> AppResult<()> {
        self.set_included(name, false)
    }

    /// Re-include a previously removed line
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the plan has no line with this name
    pub fn restore_supplement(&mut self, name: &str) -> AppResult<()> {
        self.set_included(name, true)
    }

    /// Append a manually added line
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if a line with the same name exists
    pub fn add_supplement(&mut self, line: PlanSupplement) -> AppResult<()> {
        if self.contains(&line.name) {
            return Err(AppError::already_exists(format!(
                "Plan supplement '{}'",
                line.name
            )));
        }
        self.supplements.push(line);
        Ok(())
    }

    fn set_included(&mut self, name: &str, included: bool) -> AppResult<()> {
        let line = self
            .supplements
            .iter_mut()
            .find(|line| line.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::not_found(format!("Plan supplement '{name}'")))?;
        line.is_included = included;
        Ok(())
    }
}
