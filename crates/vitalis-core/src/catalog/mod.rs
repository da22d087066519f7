// ABOUTME: Read-only supplement catalog snapshot consumed by the recommendation engine
// ABOUTME: Supplements, goal weights, drug interactions, contraindications, synergies, dosage adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! # Supplement Catalog
//!
//! The catalog is reference data supplied by an external loader (a bundled
//! table or a remote fetch). The engine receives a fully-populated snapshot and
//! never mutates it. Lookups are linear scans; catalogs hold dozens of entries,
//! not thousands.

/// Names of the bundled reference supplements
pub mod names;
mod reference;

use crate::constants::goal_weights::{MAX_GOAL_WEIGHT, MIN_GOAL_WEIGHT};
use crate::errors::AppResult;
use crate::models::{BiologicalSex, CaffeineIntake, HealthGoal, Supplement, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Association between a goal and a supplement at an evidence-derived strength
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSupplementEntry {
    /// Catalog supplement name
    pub supplement: String,
    /// Weight from 1 (weak) to 3 (strong)
    pub weight: u8,
}

impl GoalSupplementEntry {
    /// Create an entry
    pub fn new(supplement: impl Into<String>, weight: u8) -> Self {
        Self {
            supplement: supplement.into(),
            weight,
        }
    }

    /// Weight clamped into the valid 1-3 range
    #[must_use]
    pub fn bounded_weight(&self) -> u8 {
        self.weight.clamp(MIN_GOAL_WEIGHT, MAX_GOAL_WEIGHT)
    }
}

/// Medication keywords known to interact with a supplement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugInteraction {
    /// Catalog supplement name
    pub supplement: String,
    /// Lowercase medication or drug-class keywords
    pub keywords: Vec<String>,
    /// What happens when combined
    #[serde(default)]
    pub description: String,
}

/// Physiological condition a contraindication applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContraindicationCondition {
    /// Pregnancy
    Pregnancy,
    /// Breastfeeding
    Breastfeeding,
}

impl ContraindicationCondition {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pregnancy => "pregnancy",
            Self::Breastfeeding => "breastfeeding",
        }
    }

    /// Whether the profile has this condition
    #[must_use]
    pub const fn applies_to(self, profile: &UserProfile) -> bool {
        match self {
            Self::Pregnancy => profile.is_pregnant,
            Self::Breastfeeding => profile.is_breastfeeding,
        }
    }
}

/// How strictly a contraindication is enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContraindicationSeverity {
    /// Never recommend
    Absolute,
    /// Recommend with a safety note
    Caution,
}

/// Condition-specific contraindication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contraindication {
    /// Catalog supplement name
    pub supplement: String,
    /// Condition it applies to
    pub condition: ContraindicationCondition,
    /// Enforcement level
    pub severity: ContraindicationSeverity,
    /// Explanation
    #[serde(default)]
    pub description: String,
}

/// Kind of relationship between two supplements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynergyKind {
    /// Better absorbed or more effective together; co-locate
    Enhances,
    /// Share an absorption pathway; separate
    Competes,
}

/// Pairwise relationship between two supplements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synergy {
    /// First supplement name
    pub first: String,
    /// Second supplement name
    pub second: String,
    /// Relationship kind
    pub kind: SynergyKind,
    /// Explanation
    #[serde(default)]
    pub note: String,
}

impl Synergy {
    /// Whether this synergy involves `name`
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.first.eq_ignore_ascii_case(name) || self.second.eq_ignore_ascii_case(name)
    }

    /// The other supplement in the pair, if `name` is part of it
    #[must_use]
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        if self.first.eq_ignore_ascii_case(name) {
            Some(&self.second)
        } else if self.second.eq_ignore_ascii_case(name) {
            Some(&self.first)
        } else {
            None
        }
    }
}

/// Population condition expressed as data so catalogs can be serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PopulationCondition {
    /// Female profile
    Female,
    /// Male profile
    Male,
    /// Age at or above the given years
    AgeAtLeast(u32),
    /// Pregnant profile
    Pregnant,
    /// Vegan or vegetarian diet
    PlantBasedDiet,
    /// Three or more caffeinated drinks a day
    HighCaffeine,
}

impl PopulationCondition {
    /// Whether the profile satisfies the condition
    #[must_use]
    pub fn matches(self, profile: &UserProfile) -> bool {
        match self {
            Self::Female => profile.sex == BiologicalSex::Female,
            Self::Male => profile.sex == BiologicalSex::Male,
            Self::AgeAtLeast(years) => profile.age.is_some_and(|age| age >= years),
            Self::Pregnant => profile.is_pregnant,
            Self::PlantBasedDiet => profile.diet_type.is_plant_based(),
            Self::HighCaffeine => profile.caffeine_intake == CaffeineIntake::High,
        }
    }
}

/// Population-specific dose override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageAdjustment {
    /// Catalog supplement name
    pub supplement: String,
    /// Population the override applies to
    pub condition: PopulationCondition,
    /// Dose in the supplement's unit
    pub amount: f64,
}

/// Immutable catalog snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplementCatalog {
    /// Supplements in declaration order
    pub supplements: Vec<Supplement>,
    /// Goal to weighted supplement mapping
    pub goal_mappings: BTreeMap<HealthGoal, Vec<GoalSupplementEntry>>,
    /// Medication interactions
    pub interactions: Vec<DrugInteraction>,
    /// Condition contraindications
    pub contraindications: Vec<Contraindication>,
    /// Pairwise synergies and conflicts
    pub synergies: Vec<Synergy>,
    /// Population dose overrides, first match wins
    pub dosage_adjustments: Vec<DosageAdjustment>,
}

impl SupplementCatalog {
    /// Bundled reference catalog
    #[must_use]
    pub fn reference() -> Self {
        reference::build()
    }

    /// Parse a catalog snapshot from JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not describe a catalog
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when there are no supplements to recommend
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.supplements.is_empty()
    }

    /// All supplements in declaration order
    #[must_use]
    pub fn all_supplements(&self) -> &[Supplement] {
        &self.supplements
    }

    /// Declaration index of a supplement, used as the stable ranking tie-breaker
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.supplements
            .iter()
            .position(|supplement| supplement.name.eq_ignore_ascii_case(name))
    }

    /// Supplement by name (case-insensitive)
    #[must_use]
    pub fn supplement(&self, name: &str) -> Option<&Supplement> {
        self.supplements
            .iter()
            .find(|supplement| supplement.name.eq_ignore_ascii_case(name))
    }

    /// Supplement by stable id
    #[must_use]
    pub fn supplement_by_id(&self, id: &str) -> Option<&Supplement> {
        self.supplements.iter().find(|supplement| supplement.id == id)
    }

    /// Weighted entries mapped to a goal
    #[must_use]
    pub fn goal_mappings(&self, goal: HealthGoal) -> &[GoalSupplementEntry] {
        self.goal_mappings.get(&goal).map_or(&[], Vec::as_slice)
    }

    /// Weight of a supplement for a goal (0 when unmapped)
    #[must_use]
    pub fn weight(&self, supplement: &str, goal: HealthGoal) -> u8 {
        self.goal_mappings(goal)
            .iter()
            .find(|entry| entry.supplement.eq_ignore_ascii_case(supplement))
            .map_or(0, GoalSupplementEntry::bounded_weight)
    }

    /// Medication interactions for a supplement
    pub fn interactions_for<'a>(
        &'a self,
        supplement: &'a str,
    ) -> impl Iterator<Item = &'a DrugInteraction> + 'a {
        self.interactions
            .iter()
            .filter(move |entry| entry.supplement.eq_ignore_ascii_case(supplement))
    }

    /// Contraindications for a supplement
    pub fn contraindications_for<'a>(
        &'a self,
        supplement: &'a str,
    ) -> impl Iterator<Item = &'a Contraindication> + 'a {
        self.contraindications
            .iter()
            .filter(move |entry| entry.supplement.eq_ignore_ascii_case(supplement))
    }

    /// Synergies involving a supplement
    pub fn synergies_for<'a>(&'a self, supplement: &'a str) -> impl Iterator<Item = &'a Synergy> + 'a {
        self.synergies
            .iter()
            .filter(move |synergy| synergy.involves(supplement))
    }

    /// Dosage adjustments for a supplement in declaration order
    pub fn adjustments_for<'a>(
        &'a self,
        supplement: &'a str,
    ) -> impl Iterator<Item = &'a DosageAdjustment> + 'a {
        self.dosage_adjustments
            .iter()
            .filter(move |entry| entry.supplement.eq_ignore_ascii_case(supplement))
    }

    /// Structural problems that make parts of the catalog unusable
    ///
    /// The engine tolerates all of these (unknown names are skipped, weights are
    /// clamped); loaders use the list to warn about bad snapshots.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen = BTreeSet::new();

        for supplement in &self.supplements {
            if !seen.insert(supplement.name.to_lowercase()) {
                issues.push(format!("duplicate supplement name '{}'", supplement.name));
            }
            if supplement.dosage_range.min > supplement.dosage_range.max {
                issues.push(format!("'{}' has an inverted dosage range", supplement.name));
            }
        }

        for (goal, entries) in &self.goal_mappings {
            for entry in entries {
                if self.supplement(&entry.supplement).is_none() {
                    issues.push(format!(
                        "goal '{}' maps unknown supplement '{}'",
                        goal.key(),
                        entry.supplement
                    ));
                }
                if !(MIN_GOAL_WEIGHT..=MAX_GOAL_WEIGHT).contains(&entry.weight) {
                    issues.push(format!(
                        "goal '{}' weight {} for '{}' is outside 1-3",
                        goal.key(),
                        entry.weight,
                        entry.supplement
                    ));
                }
            }
        }

        for synergy in &self.synergies {
            for name in [&synergy.first, &synergy.second] {
                if self.supplement(name).is_none() {
                    issues.push(format!("synergy references unknown supplement '{name}'"));
                }
            }
        }

        issues
    }
}
