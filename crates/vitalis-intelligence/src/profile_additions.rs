// ABOUTME: Profile-conditioned supplement additions expressed as a data table
// ABOUTME: Diet gaps and caffeine pairing force supplements into a plan regardless of goal match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use crate::timing::TimingPins;
use vitalis_core::catalog::names::{L_THEANINE, VITAMIN_B_COMPLEX, VITAMIN_D3_K2};
use vitalis_core::catalog::PopulationCondition;
use vitalis_core::models::{SupplementTiming, UserProfile};

/// Why a rule adds supplements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditionRationale {
    /// Nutrient commonly missing from the user's diet
    DietaryGap,
    /// Calming nootropic paired with heavy caffeine use
    CaffeinePairing,
}

impl AdditionRationale {
    /// Per-line explanation
    #[must_use]
    pub fn line_reasoning(self, profile: &UserProfile) -> String {
        match self {
            Self::DietaryGap => format!(
                "Covers a nutrient gap common to a {} diet.",
                profile.diet_type.label()
            ),
            Self::CaffeinePairing => {
                "Pairs with your morning caffeine for calm, jitter-free focus.".to_owned()
            }
        }
    }

    /// Plan-level sentence naming the supplements the rule put in the plan
    #[must_use]
    pub fn plan_sentence(self, profile: &UserProfile, names: &str, plural: bool) -> String {
        let verb = if plural { "are" } else { "is" };
        match self {
            Self::DietaryGap => format!(
                "Because you follow a {} diet, {names} {verb} included to cover nutrients that are harder to get from plants.",
                profile.diet_type.label()
            ),
            Self::CaffeinePairing => format!(
                "With your high caffeine intake, {names} {verb} scheduled in the morning to take the edge off caffeine without drowsiness."
            ),
        }
    }
}

/// One row of the addition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileAdditionRule {
    /// Profile condition that triggers the rule
    pub condition: PopulationCondition,
    /// Supplements forced into the plan
    pub supplements: &'static [&'static str],
    /// Timing that overrides class and catalog defaults while the rule applies
    pub pinned_timing: Option<SupplementTiming>,
    /// Explanation family
    pub rationale: AdditionRationale,
}

/// Addition rules evaluated in order after goal selection
pub const PROFILE_ADDITION_RULES: &[ProfileAdditionRule] = &[
    ProfileAdditionRule {
        condition: PopulationCondition::PlantBasedDiet,
        supplements: &[VITAMIN_B_COMPLEX, VITAMIN_D3_K2],
        pinned_timing: None,
        rationale: AdditionRationale::DietaryGap,
    },
    ProfileAdditionRule {
        condition: PopulationCondition::HighCaffeine,
        supplements: &[L_THEANINE],
        pinned_timing: Some(SupplementTiming::Morning),
        rationale: AdditionRationale::CaffeinePairing,
    },
];

/// Rules whose condition holds for `profile`
pub fn matching_rules(profile: &UserProfile) -> impl Iterator<Item = &'static ProfileAdditionRule> + '_ {
    PROFILE_ADDITION_RULES
        .iter()
        .filter(move |rule| rule.condition.matches(profile))
}

/// Timing pins contributed by matching rules
#[must_use]
pub fn timing_pins(profile: &UserProfile) -> TimingPins {
    matching_rules(profile)
        .filter_map(|rule| rule.pinned_timing.map(|timing| (rule, timing)))
        .flat_map(|(rule, timing)| {
            rule.supplements
                .iter()
                .map(move |name| (name.to_lowercase(), timing))
        })
        .collect()
}

/// A rule that fired while building a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedAddition {
    /// Explanation family
    pub rationale: AdditionRationale,
    /// Rule supplements present in the final plan (added or already selected)
    pub supplements: Vec<String>,
    /// Subset that the rule itself added
    pub added: Vec<String>,
}
