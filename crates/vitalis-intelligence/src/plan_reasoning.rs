// ABOUTME: Deterministic narrative explaining a generated supplement plan
// ABOUTME: Template composition over goals, tiers, diet additions, caffeine pairing, timing, and exclusions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Plan reasoning text is composed only from the already-computed plan, so
//! identical inputs always produce an identical narrative.

use crate::profile_additions::{AdditionRationale, AppliedAddition};
use crate::timing::TimingAdjustment;
use vitalis_core::catalog::SynergyKind;
use vitalis_core::models::{
    ExcludedSupplement, HealthGoal, PlanSupplement, PlanSupplementSource, SupplementTier,
    UserProfile,
};

/// Everything the narrative may reference
#[derive(Debug, Clone, Copy)]
pub struct ReasoningInputs<'a> {
    /// Profile the plan was built for
    pub profile: &'a UserProfile,
    /// Effective goals used for scoring
    pub goals: &'a [HealthGoal],
    /// False when the profile selected no goals and general wellness was used
    pub goals_selected: bool,
    /// Final plan lines
    pub lines: &'a [PlanSupplement],
    /// Profile rules that fired
    pub additions: &'a [AppliedAddition],
    /// Supplements excluded for safety
    pub excluded: &'a [ExcludedSupplement],
    /// Timing moves made by pair rules
    pub adjustments: &'a [TimingAdjustment],
}

/// Join names as "A", "A and B", or "A, B and C"
#[must_use]
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Builds the plan narrative
pub struct PlanReasoning;

impl PlanReasoning {
    /// Narrative for a catalog with no supplements
    #[must_use]
    pub fn empty_catalog() -> String {
        "No supplement data is available right now, so a plan could not be built. \
         Try again once the supplement catalog has loaded."
            .to_owned()
    }

    /// Compose the narrative for a generated plan
    #[must_use]
    pub fn compose(inputs: &ReasoningInputs<'_>) -> String {
        let mut sentences = vec![Self::goal_sentence(inputs), Self::size_sentence(inputs)];

        sentences.extend(Self::tier_sentence(
            inputs.lines,
            SupplementTier::Core,
            "forms the core of your plan because it supports several of your goals at once.",
            "form the core of your plan because they support several of your goals at once.",
        ));
        sentences.extend(Self::tier_sentence(
            inputs.lines,
            SupplementTier::Targeted,
            "targets a single goal with strong support.",
            "each target a single goal with strong support.",
        ));

        let backfilled: Vec<&str> = inputs
            .lines
            .iter()
            .filter(|line| line.source == PlanSupplementSource::Backfill)
            .map(|line| line.name.as_str())
            .collect();
        if !backfilled.is_empty() {
            let verb = if backfilled.len() == 1 { "rounds" } else { "round" };
            sentences.push(format!(
                "{} {verb} out your plan with well-established support.",
                join_names(&backfilled)
            ));
        }

        for addition in inputs.additions {
            let named = match addition.rationale {
                AdditionRationale::DietaryGap => &addition.added,
                AdditionRationale::CaffeinePairing => &addition.supplements,
            };
            if !named.is_empty() {
                sentences.push(addition.rationale.plan_sentence(
                    inputs.profile,
                    &join_names(named),
                    named.len() > 1,
                ));
            }
        }

        for adjustment in inputs.adjustments {
            let relation = match adjustment.kind {
                SynergyKind::Enhances => "is timed with",
                SynergyKind::Competes => "is taken apart from",
            };
            let mut sentence = format!(
                "{} {relation} {} ({}).",
                adjustment.supplement,
                adjustment.partner,
                adjustment.to.label().to_lowercase()
            );
            if !adjustment.note.is_empty() {
                sentence.push(' ');
                sentence.push_str(&adjustment.note);
            }
            sentences.push(sentence);
        }

        if !inputs.excluded.is_empty() {
            let described: Vec<String> = inputs
                .excluded
                .iter()
                .map(|entry| format!("{} ({})", entry.name, entry.reason.describe()))
                .collect();
            sentences.push(format!(
                "For your safety we left out {}.",
                join_names(&described)
            ));
        }

        sentences.join(" ")
    }

    fn goal_sentence(inputs: &ReasoningInputs<'_>) -> String {
        if inputs.goals_selected {
            let labels: Vec<&str> = inputs.goals.iter().map(|goal| goal.label()).collect();
            format!("Your plan is built around your goals: {}.", join_names(&labels))
        } else {
            "You haven't selected specific goals yet, so your plan focuses on general wellness."
                .to_owned()
        }
    }

    fn size_sentence(inputs: &ReasoningInputs<'_>) -> String {
        match inputs.lines.len() {
            0 => "None of the catalog supplements are a safe match for your profile right now."
                .to_owned(),
            1 => "It includes 1 supplement.".to_owned(),
            count => format!("It includes {count} supplements."),
        }
    }

    fn tier_sentence(
        lines: &[PlanSupplement],
        tier: SupplementTier,
        singular: &str,
        plural: &str,
    ) -> Option<String> {
        let names: Vec<&str> = lines
            .iter()
            .filter(|line| line.tier == tier)
            .map(|line| line.name.as_str())
            .collect();
        match names.len() {
            0 => None,
            1 => Some(format!("{} {singular}", names[0])),
            _ => Some(format!("{} {plural}", join_names(&names))),
        }
    }
}
