// ABOUTME: Supplement recommendation engine mapping a user profile to a ranked, screened plan
// ABOUTME: Scores goal weights, filters unsafe supplements, bounds size, adjusts dosage, tiers, times, and explains
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Supplement recommendation engine
//!
//! `generate_plan` is a pure function of the profile and the catalog snapshot:
//! no randomness and no clock reads influence which supplements are chosen,
//! their order, or the reasoning text. Only the plan id and timestamp differ
//! between calls.

use crate::config::intelligence::{IntelligenceConfig, RecommendationEngineConfig};
use crate::exclusions::{extract_medication_keywords, SafetyScreen};
use crate::plan_reasoning::{join_names, PlanReasoning, ReasoningInputs};
use crate::profile_additions::{self, AppliedAddition};
use crate::timing::{TimingPins, TimingResolver};
use chrono::Utc;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};
use uuid::Uuid;
use vitalis_core::catalog::SupplementCatalog;
use vitalis_core::constants::plan::PLAN_VERSION;
use vitalis_core::models::{
    Dosage, EvidenceLevel, ExcludedSupplement, HealthGoal, PlanSupplement, PlanSupplementSource,
    Supplement, SupplementPlan, SupplementTier, UserProfile,
};

/// Evidence levels eligible for backfill, in preference order
const BACKFILL_EVIDENCE: [EvidenceLevel; 2] = [EvidenceLevel::Strong, EvidenceLevel::Moderate];

/// A catalog supplement under consideration for the plan
#[derive(Debug, Clone)]
struct Candidate<'a> {
    supplement: &'a Supplement,
    /// Catalog declaration index, the stable tie-breaker
    index: usize,
    /// Summed goal weight across matched goals
    weight: u32,
    matched_goals: Vec<HealthGoal>,
    source: PlanSupplementSource,
    /// Required by a profile rule; never trimmed for size
    forced: bool,
}

/// Goal-match data for one supplement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalMatch {
    /// Goals with a catalog mapping for the supplement
    pub goals: Vec<HealthGoal>,
    /// Summed weight across `goals`
    pub weight: u32,
}

impl GoalMatch {
    /// Compute goal-match data against a set of goals
    #[must_use]
    pub fn compute(catalog: &SupplementCatalog, supplement: &str, goals: &[HealthGoal]) -> Self {
        let mut result = Self::default();
        for goal in goals {
            let weight = catalog.weight(supplement, *goal);
            if weight > 0 {
                result.goals.push(*goal);
                result.weight += u32::from(weight);
            }
        }
        result
    }
}

/// Supplement plan generator
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().recommendation_engine.clone(),
        }
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Generate a supplement plan for `profile` from `catalog`
    ///
    /// An empty catalog yields an empty plan whose reasoning says no data is
    /// available. A profile without goals is scored as general wellness.
    #[must_use]
    pub fn generate_plan(&self, profile: &UserProfile, catalog: &SupplementCatalog) -> SupplementPlan {
        if catalog.is_empty() {
            warn!("Supplement catalog is empty; returning an empty plan");
            return Self::assemble(PlanReasoning::empty_catalog(), Vec::new(), Vec::new());
        }

        let goals = profile.effective_goals();
        let screen = SafetyScreen::evaluate(
            &profile.medications,
            &profile.allergies,
            profile,
            catalog,
            &self.config.matching,
        );

        let target = self.config.limits.target_size(goals.len());
        let mut selected: Vec<Candidate<'_>> = Self::rank_candidates(catalog, &goals)
            .into_iter()
            .filter(|candidate| !screen.is_excluded(&candidate.supplement.name))
            .take(target)
            .collect();

        self.backfill(&mut selected, catalog, &goals, &screen);
        let additions = Self::apply_profile_additions(&mut selected, profile, catalog, &goals, &screen);
        self.enforce_max_size(&mut selected);

        selected.sort_by(|a, b| b.weight.cmp(&a.weight).then(a.index.cmp(&b.index)));

        let pins = profile_additions::timing_pins(profile);
        let mut lines: Vec<PlanSupplement> = selected
            .iter()
            .map(|candidate| self.plan_line(candidate, profile, catalog, &screen, &additions, &pins))
            .collect();
        let adjustments = TimingResolver::resolve(&mut lines, catalog, &pins);

        let excluded = screen.excluded().to_vec();
        let reasoning = PlanReasoning::compose(&ReasoningInputs {
            profile,
            goals: &goals,
            goals_selected: !profile.goals.is_empty(),
            lines: &lines,
            additions: &additions,
            excluded: &excluded,
            adjustments: &adjustments,
        });

        if lines.len() < self.config.limits.min_supplements {
            warn!(
                supplements = lines.len(),
                minimum = self.config.limits.min_supplements,
                "Plan is below the minimum size; catalog has too few safe supplements"
            );
        }
        info!(
            supplements = lines.len(),
            excluded = excluded.len(),
            goals = goals.len(),
            "Generated supplement plan"
        );

        Self::assemble(reasoning, lines, excluded)
    }

    /// Lowercase medication keywords for a profile, including expanded drug classes
    #[must_use]
    pub fn extract_medication_keywords(&self, profile: &UserProfile) -> BTreeSet<String> {
        extract_medication_keywords(&profile.medications, self.config.matching.min_keyword_len)
    }

    /// Names of catalog supplements unsafe for these medications, allergies, and conditions
    #[must_use]
    pub fn find_excluded_supplements(
        &self,
        medications: &[String],
        allergies: &[String],
        profile: &UserProfile,
        catalog: &SupplementCatalog,
    ) -> BTreeSet<String> {
        self.find_exclusions(medications, allergies, profile, catalog)
            .excluded_names()
    }

    /// Full safety screen with exclusion reasons and caution notes
    #[must_use]
    pub fn find_exclusions(
        &self,
        medications: &[String],
        allergies: &[String],
        profile: &UserProfile,
        catalog: &SupplementCatalog,
    ) -> SafetyScreen {
        SafetyScreen::evaluate(medications, allergies, profile, catalog, &self.config.matching)
    }

    /// Build a plan line for a manually added supplement
    ///
    /// Returns `None` when `existing` already lists a supplement with the same
    /// name. Dosage, timing, and tier follow the same rules as generated plans.
    #[must_use]
    pub fn build_plan_supplement(
        &self,
        supplement: &Supplement,
        profile: &UserProfile,
        existing: &[PlanSupplement],
        catalog: &SupplementCatalog,
    ) -> Option<PlanSupplement> {
        if existing
            .iter()
            .any(|line| line.name.eq_ignore_ascii_case(&supplement.name))
        {
            debug!(supplement = %supplement.name, "Plan already contains supplement");
            return None;
        }

        let goals = profile.effective_goals();
        let matched = GoalMatch::compute(catalog, &supplement.name, &goals);
        let screen = self.find_exclusions(&profile.medications, &profile.allergies, profile, catalog);
        let candidate = Candidate {
            supplement,
            index: catalog.position(&supplement.name).unwrap_or(usize::MAX),
            weight: matched.weight,
            matched_goals: matched.goals,
            source: PlanSupplementSource::Manual,
            forced: false,
        };
        let pins = profile_additions::timing_pins(profile);
        Some(self.plan_line(&candidate, profile, catalog, &screen, &[], &pins))
    }

    /// Dose after population adjustments, clamped into the safe window
    #[must_use]
    pub fn adjusted_dosage(
        supplement: &Supplement,
        profile: &UserProfile,
        catalog: &SupplementCatalog,
    ) -> Dosage {
        let amount = catalog
            .adjustments_for(&supplement.name)
            .find(|adjustment| adjustment.condition.matches(profile))
            .map_or(supplement.recommended_dosage.amount, |adjustment| adjustment.amount);
        Dosage::new(supplement.clamp_dose(amount), supplement.recommended_dosage.unit)
    }

    /// Tier from goal-match data
    #[must_use]
    pub fn tier_for(&self, matched_goals: usize, weight: u32) -> SupplementTier {
        let tiers = &self.config.tiers;
        if matched_goals >= tiers.core_min_matched_goals && weight >= tiers.core_min_weight {
            SupplementTier::Core
        } else if matched_goals == 1 && weight >= tiers.targeted_min_weight {
            SupplementTier::Targeted
        } else {
            SupplementTier::Supporting
        }
    }

    /// Supplements with a positive goal weight, ranked by weight then catalog order
    fn rank_candidates<'a>(catalog: &'a SupplementCatalog, goals: &[HealthGoal]) -> Vec<Candidate<'a>> {
        let mut candidates: Vec<Candidate<'a>> = catalog
            .all_supplements()
            .iter()
            .enumerate()
            .filter_map(|(index, supplement)| {
                let matched = GoalMatch::compute(catalog, &supplement.name, goals);
                (matched.weight > 0).then(|| Candidate {
                    supplement,
                    index,
                    weight: matched.weight,
                    matched_goals: matched.goals,
                    source: PlanSupplementSource::GoalMatch,
                    forced: false,
                })
            })
            .collect();
        candidates.sort_by(|a, b| b.weight.cmp(&a.weight).then(a.index.cmp(&b.index)));
        candidates
    }

    /// Top up to the minimum size with well-evidenced supplements in catalog order
    fn backfill<'a>(
        &self,
        selected: &mut Vec<Candidate<'a>>,
        catalog: &'a SupplementCatalog,
        goals: &[HealthGoal],
        screen: &SafetyScreen,
    ) {
        let minimum = self.config.limits.min_supplements;
        for evidence in BACKFILL_EVIDENCE {
            for (index, supplement) in catalog.all_supplements().iter().enumerate() {
                if selected.len() >= minimum {
                    return;
                }
                if supplement.evidence != evidence
                    || screen.is_excluded(&supplement.name)
                    || Self::contains(selected, &supplement.name)
                {
                    continue;
                }
                debug!(supplement = %supplement.name, "Backfilling plan");
                let matched = GoalMatch::compute(catalog, &supplement.name, goals);
                selected.push(Candidate {
                    supplement,
                    index,
                    weight: matched.weight,
                    matched_goals: matched.goals,
                    source: PlanSupplementSource::Backfill,
                    forced: false,
                });
            }
        }
    }

    /// Force rule supplements into the plan; never adds an excluded supplement
    fn apply_profile_additions<'a>(
        selected: &mut Vec<Candidate<'a>>,
        profile: &UserProfile,
        catalog: &'a SupplementCatalog,
        goals: &[HealthGoal],
        screen: &SafetyScreen,
    ) -> Vec<AppliedAddition> {
        let mut applied = Vec::new();
        for rule in profile_additions::matching_rules(profile) {
            let mut present = Vec::new();
            let mut added = Vec::new();
            for name in rule.supplements {
                if let Some(existing) = selected
                    .iter_mut()
                    .find(|candidate| candidate.supplement.name.eq_ignore_ascii_case(name))
                {
                    existing.forced = true;
                    present.push((*name).to_owned());
                    continue;
                }
                let Some(index) = catalog.position(name) else {
                    debug!(supplement = name, "Profile addition missing from catalog");
                    continue;
                };
                if screen.is_excluded(name) {
                    debug!(supplement = name, "Profile addition skipped: excluded for safety");
                    continue;
                }
                let supplement = &catalog.all_supplements()[index];
                let matched = GoalMatch::compute(catalog, &supplement.name, goals);
                selected.push(Candidate {
                    supplement,
                    index,
                    weight: matched.weight,
                    matched_goals: matched.goals,
                    source: PlanSupplementSource::ProfileAddition,
                    forced: true,
                });
                present.push(supplement.name.clone());
                added.push(supplement.name.clone());
            }
            if !present.is_empty() {
                applied.push(AppliedAddition {
                    rationale: rule.rationale,
                    supplements: present,
                    added,
                });
            }
        }
        applied
    }

    /// Drop the lowest-ranked non-forced lines until the plan fits
    fn enforce_max_size(&self, selected: &mut Vec<Candidate<'_>>) {
        while selected.len() > self.config.limits.max_supplements {
            let Some(position) = selected
                .iter()
                .rposition(|candidate| !candidate.forced)
            else {
                break;
            };
            let dropped = selected.remove(position);
            debug!(supplement = %dropped.supplement.name, "Trimming plan to maximum size");
        }
    }

    fn contains(selected: &[Candidate<'_>], name: &str) -> bool {
        selected
            .iter()
            .any(|candidate| candidate.supplement.name.eq_ignore_ascii_case(name))
    }

    fn plan_line(
        &self,
        candidate: &Candidate<'_>,
        profile: &UserProfile,
        catalog: &SupplementCatalog,
        screen: &SafetyScreen,
        additions: &[AppliedAddition],
        pins: &TimingPins,
    ) -> PlanSupplement {
        let supplement = candidate.supplement;
        let dosage = Self::adjusted_dosage(supplement, profile, catalog);
        let (timing, _) = TimingResolver::default_timing(supplement, pins);

        let research_note = match (screen.caution(&supplement.name), supplement.notes.is_empty()) {
            (Some(caution), _) => Some(caution.to_owned()),
            (None, false) => Some(supplement.notes.clone()),
            (None, true) => None,
        };

        PlanSupplement {
            id: Uuid::new_v4(),
            name: supplement.name.clone(),
            dosage: dosage.to_string(),
            dosage_amount: dosage.amount,
            dosage_unit: dosage.unit,
            timing,
            tier: self.tier_for(candidate.matched_goals.len(), candidate.weight),
            matched_goals: candidate
                .matched_goals
                .iter()
                .map(|goal| goal.key().to_owned())
                .collect(),
            goal_overlap_score: candidate.weight,
            is_included: true,
            source: candidate.source,
            reasoning: Some(Self::line_reasoning(candidate, profile, additions)),
            research_note,
        }
    }

    fn line_reasoning(
        candidate: &Candidate<'_>,
        profile: &UserProfile,
        additions: &[AppliedAddition],
    ) -> String {
        let labels: Vec<&str> = candidate
            .matched_goals
            .iter()
            .map(|goal| goal.label())
            .collect();
        let goal_text = match labels.len() {
            0 => None,
            1 => Some(format!("Supports your {} goal.", labels[0])),
            _ => Some(format!("Supports your {} goals.", join_names(&labels))),
        };

        let rule_text = additions
            .iter()
            .find(|addition| {
                addition
                    .supplements
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(&candidate.supplement.name))
            })
            .map(|addition| addition.rationale.line_reasoning(profile));

        let lead = match candidate.source {
            PlanSupplementSource::GoalMatch | PlanSupplementSource::ProfileAddition => None,
            PlanSupplementSource::Backfill => {
                Some("A well-established supplement that rounds out your plan.".to_owned())
            }
            PlanSupplementSource::Manual => Some("Added by you.".to_owned()),
        };

        [lead, rule_text, goal_text]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn assemble(
        reasoning: String,
        supplements: Vec<PlanSupplement>,
        excluded: Vec<ExcludedSupplement>,
    ) -> SupplementPlan {
        SupplementPlan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            version: PLAN_VERSION,
            reasoning,
            supplements,
            excluded,
        }
    }
}
