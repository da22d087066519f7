// ABOUTME: Safety screening of catalog supplements against medications, allergies, and conditions
// ABOUTME: Hard exclusions with reasons plus caution notes for softer contraindications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Safety Screening
//!
//! Medication and allergy lists are free text typed by the user, so matching
//! is best-effort: terms are split, lowercased and compared by substring
//! containment in both directions. A supplement that matches is removed from
//! the candidate pool outright; there is no soft penalty.

use crate::config::intelligence::MatchingConfig;
use std::collections::BTreeSet;
use tracing::debug;
use vitalis_core::catalog::{ContraindicationSeverity, SupplementCatalog};
use vitalis_core::models::{ExcludedSupplement, ExclusionReason, Supplement, UserProfile};

/// Separators accepted between medications or allergies in one entry
const TERM_SEPARATORS: [char; 4] = [',', ';', '/', '\n'];

/// Entries users type to say "nothing"
const EMPTY_ANSWERS: [&str; 4] = ["none", "n/a", "nil", "no known"];

/// Brand and drug names expanded to the classes catalogs key interactions by
const MEDICATION_CLASSES: &[(&str, &[&str])] = &[
    ("coumadin", &["warfarin", "anticoagulant", "blood thinner"]),
    ("jantoven", &["warfarin", "anticoagulant", "blood thinner"]),
    ("warfarin", &["anticoagulant", "blood thinner"]),
    ("eliquis", &["apixaban", "anticoagulant", "blood thinner"]),
    ("apixaban", &["anticoagulant", "blood thinner"]),
    ("xarelto", &["rivaroxaban", "anticoagulant", "blood thinner"]),
    ("rivaroxaban", &["anticoagulant", "blood thinner"]),
    ("plavix", &["clopidogrel", "blood thinner"]),
    ("synthroid", &["levothyroxine", "thyroid"]),
    ("levoxyl", &["levothyroxine", "thyroid"]),
    ("euthyrox", &["levothyroxine", "thyroid"]),
    ("levothyroxine", &["thyroid"]),
    ("sertraline", &["ssri", "antidepressant"]),
    ("zoloft", &["sertraline", "ssri", "antidepressant"]),
    ("fluoxetine", &["ssri", "antidepressant"]),
    ("prozac", &["fluoxetine", "ssri", "antidepressant"]),
    ("escitalopram", &["ssri", "antidepressant"]),
    ("lexapro", &["escitalopram", "ssri", "antidepressant"]),
    ("citalopram", &["ssri", "antidepressant"]),
    ("paroxetine", &["ssri", "antidepressant"]),
    ("phenelzine", &["maoi", "antidepressant"]),
    ("selegiline", &["maoi"]),
    ("metformin", &["diabetes"]),
    ("glucophage", &["metformin", "diabetes"]),
    ("insulin", &["diabetes"]),
    ("lisinopril", &["antihypertensive"]),
    ("amlodipine", &["antihypertensive"]),
    ("losartan", &["antihypertensive"]),
    ("alprazolam", &["benzodiazepine", "sedative"]),
    ("xanax", &["alprazolam", "benzodiazepine", "sedative"]),
    ("diazepam", &["benzodiazepine", "sedative"]),
    ("valium", &["diazepam", "benzodiazepine", "sedative"]),
    ("lorazepam", &["benzodiazepine", "sedative"]),
    ("zolpidem", &["sedative"]),
    ("ambien", &["zolpidem", "sedative"]),
    ("furosemide", &["diuretic"]),
    ("lasix", &["furosemide", "diuretic"]),
    ("hydrochlorothiazide", &["diuretic"]),
    ("sumatriptan", &["triptan"]),
    ("omeprazole", &["proton pump"]),
    ("prilosec", &["omeprazole", "proton pump"]),
    ("esomeprazole", &["proton pump"]),
    ("nexium", &["esomeprazole", "proton pump"]),
    ("cipro", &["ciprofloxacin"]),
    ("fosamax", &["alendronate", "bisphosphonate"]),
    ("sinemet", &["levodopa"]),
];

/// Split free-text entries into normalized terms long enough to match
#[must_use]
pub fn normalize_terms(entries: &[String], min_len: usize) -> Vec<String> {
    let mut terms = Vec::new();
    for entry in entries {
        for raw in entry.split(TERM_SEPARATORS) {
            let term = raw.trim().to_lowercase();
            if term.chars().count() < min_len || EMPTY_ANSWERS.contains(&term.as_str()) {
                continue;
            }
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
    }
    terms
}

/// Lowercase medication keywords including expanded drug classes
#[must_use]
pub fn extract_medication_keywords(medications: &[String], min_len: usize) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();
    for term in normalize_terms(medications, min_len) {
        for (trigger, classes) in MEDICATION_CLASSES {
            if term.contains(trigger) {
                keywords.extend(classes.iter().map(|class| (*class).to_owned()));
            }
        }
        keywords.insert(term);
    }
    keywords
}

/// Case-insensitive containment in either direction; both sides must be long enough
fn terms_overlap(left: &str, right: &str, min_len: usize) -> bool {
    if left.chars().count() < min_len || right.chars().count() < min_len {
        return false;
    }
    left.contains(right) || right.contains(left)
}

/// Outcome of screening a catalog against one profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafetyScreen {
    excluded: Vec<ExcludedSupplement>,
    cautions: Vec<(String, String)>,
}

impl SafetyScreen {
    /// Screen every catalog supplement
    ///
    /// Medications and allergies are passed separately from the profile so the
    /// "add supplement" flow can check edited lists before they are saved.
    #[must_use]
    pub fn evaluate(
        medications: &[String],
        allergies: &[String],
        profile: &UserProfile,
        catalog: &SupplementCatalog,
        matching: &MatchingConfig,
    ) -> Self {
        let min_len = matching.min_keyword_len;
        let medication_keywords = extract_medication_keywords(medications, min_len);
        let allergy_terms = normalize_terms(allergies, min_len);
        let mut screen = Self::default();

        for supplement in catalog.all_supplements() {
            let reason = Self::medication_conflict(supplement, catalog, &medication_keywords, min_len)
                .or_else(|| Self::allergy_conflict(supplement, &allergy_terms, min_len))
                .or_else(|| screen.record_contraindications(supplement, profile, catalog));

            if let Some(reason) = reason {
                debug!(
                    supplement = %supplement.name,
                    reason = %reason.describe(),
                    "Excluding supplement from plan candidates"
                );
                screen.excluded.push(ExcludedSupplement {
                    name: supplement.name.clone(),
                    reason,
                });
            }
        }

        screen
    }

    fn medication_conflict(
        supplement: &Supplement,
        catalog: &SupplementCatalog,
        keywords: &BTreeSet<String>,
        min_len: usize,
    ) -> Option<ExclusionReason> {
        catalog
            .interactions_for(&supplement.name)
            .flat_map(|interaction| interaction.keywords.iter())
            .map(|keyword| keyword.to_lowercase())
            .find(|keyword| {
                keywords
                    .iter()
                    .any(|medication| terms_overlap(medication, keyword, min_len))
            })
            .map(|keyword| ExclusionReason::MedicationInteraction { keyword })
    }

    fn allergy_conflict(
        supplement: &Supplement,
        allergies: &[String],
        min_len: usize,
    ) -> Option<ExclusionReason> {
        let contraindication_text = supplement.contraindications.to_lowercase();
        allergies
            .iter()
            .find(|allergy| {
                supplement
                    .allergens
                    .iter()
                    .any(|allergen| terms_overlap(allergy, &allergen.to_lowercase(), min_len))
                    || contraindication_text.contains(allergy.as_str())
            })
            .map(|allergy| ExclusionReason::Allergy {
                allergen: allergy.clone(),
            })
    }

    /// Absolute contraindications exclude; cautions are remembered for the plan line
    fn record_contraindications(
        &mut self,
        supplement: &Supplement,
        profile: &UserProfile,
        catalog: &SupplementCatalog,
    ) -> Option<ExclusionReason> {
        let mut cautions = Vec::new();
        for entry in catalog.contraindications_for(&supplement.name) {
            if !entry.condition.applies_to(profile) {
                continue;
            }
            match entry.severity {
                ContraindicationSeverity::Absolute => {
                    return Some(ExclusionReason::Contraindicated {
                        condition: entry.condition.label().to_owned(),
                    });
                }
                ContraindicationSeverity::Caution => cautions.push(format!(
                    "Caution during {}: {}",
                    entry.condition.label(),
                    entry.description
                )),
            }
        }
        if !cautions.is_empty() {
            self.cautions
                .push((supplement.name.clone(), cautions.join(" ")));
        }
        None
    }

    /// Whether a supplement is hard-excluded
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.reason(name).is_some()
    }

    /// Exclusion reason for a supplement
    #[must_use]
    pub fn reason(&self, name: &str) -> Option<&ExclusionReason> {
        self.excluded
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| &entry.reason)
    }

    /// Safety note for a supplement that is allowed with caution
    #[must_use]
    pub fn caution(&self, name: &str) -> Option<&str> {
        self.cautions
            .iter()
            .find(|(supplement, _)| supplement.eq_ignore_ascii_case(name))
            .map(|(_, note)| note.as_str())
    }

    /// Excluded supplements in catalog order
    #[must_use]
    pub fn excluded(&self) -> &[ExcludedSupplement] {
        &self.excluded
    }

    /// Names of excluded supplements
    #[must_use]
    pub fn excluded_names(&self) -> BTreeSet<String> {
        self.excluded.iter().map(|entry| entry.name.clone()).collect()
    }
}
