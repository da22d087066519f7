// ABOUTME: Bundled reference supplement catalog used when no remote snapshot is available
// ABOUTME: Supplement table, goal weights, interaction keywords, contraindications, synergies, dose overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Reference catalog
//!
//! Declaration order matters: it is the ranking tie-breaker and the backfill
//! order, so broadly useful, well-evidenced supplements come first.

use super::{
    Contraindication, ContraindicationCondition, ContraindicationSeverity, DosageAdjustment,
    DrugInteraction, GoalSupplementEntry, PopulationCondition, SupplementCatalog, Synergy,
    SynergyKind,
};
use crate::models::{
    Dosage, DosageRange, DosageUnit, EffectClass, EvidenceLevel, HealthGoal, OnsetWindow,
    Supplement, SupplementTiming,
};
use super::names::{
    ASHWAGANDHA, BERBERINE, BIOTIN, COLLAGEN, COQ10, CREATINE, CURCUMIN, FIVE_HTP, GLUCOSAMINE,
    GLYCINE, IRON, LIONS_MANE, L_THEANINE, L_TYROSINE, MAGNESIUM_GLYCINATE, MELATONIN, OMEGA_3,
    PROBIOTIC, PSYLLIUM, RHODIOLA, SAFFRON, VITAMIN_B_COMPLEX, VITAMIN_C, VITAMIN_D3_K2, ZINC,
};
use std::collections::BTreeMap;

pub fn build() -> SupplementCatalog {
    SupplementCatalog {
        supplements: supplements(),
        goal_mappings: goal_mappings(),
        interactions: interactions(),
        contraindications: contraindications(),
        synergies: synergies(),
        dosage_adjustments: dosage_adjustments(),
    }
}

fn base(
    id: &str,
    name: &str,
    category: &str,
    dose: Dosage,
    range: (f64, f64),
    timing: SupplementTiming,
    evidence: EvidenceLevel,
) -> Supplement {
    Supplement {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
        dosage_range: DosageRange {
            min: range.0,
            max: range.1,
        },
        recommended_dosage: dose,
        upper_limit: None,
        timing,
        evidence,
        effect_class: EffectClass::Neutral,
        benefits: String::new(),
        contraindications: String::new(),
        interactions: String::new(),
        notes: String::new(),
        allergens: Vec::new(),
        onset_window: None,
    }
}

const fn onset(min_days: u32, max_days: u32) -> Option<OnsetWindow> {
    Some(OnsetWindow { min_days, max_days })
}

fn allergens(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

/// One literal per catalog entry (long by nature)
fn supplements() -> Vec<Supplement> {
    use DosageUnit::{BillionCfu, Iu, Mcg, Mg, G};
    use EvidenceLevel::{Emerging, Moderate, Strong};
    use SupplementTiming::{Afternoon, Bedtime, EmptyStomach, Evening, Morning, WithFood};

    vec![
        Supplement {
            upper_limit: Some(4000.0),
            benefits: "Supports bone density, immune function and mood; K2 directs calcium to bone.".into(),
            interactions: "Vitamin K2 can reduce the effect of warfarin.".into(),
            notes: "Fat-soluble; absorbs best with a meal containing fat.".into(),
            onset_window: onset(56, 90),
            ..base("vitamin-d3-k2", VITAMIN_D3_K2, "vitamin", Dosage::new(2000.0, Iu), (1000.0, 5000.0), WithFood, Strong)
        },
        Supplement {
            upper_limit: Some(3000.0),
            benefits: "Supports heart, brain and joint health; reduces inflammation.".into(),
            contraindications: "Avoid with a fish or shellfish allergy; pause before surgery.".into(),
            interactions: "Additive bleeding risk with anticoagulants.".into(),
            allergens: allergens(&["fish", "shellfish"]),
            onset_window: onset(28, 84),
            ..base("omega-3", OMEGA_3, "fatty acid", Dosage::new(1000.0, Mg), (500.0, 3000.0), WithFood, Strong)
        },
        Supplement {
            upper_limit: Some(350.0),
            effect_class: EffectClass::Calming,
            benefits: "Promotes relaxation, deeper sleep and muscle recovery.".into(),
            contraindications: "Use caution with kidney disease.".into(),
            interactions: "Separate from tetracycline and quinolone antibiotics by two hours.".into(),
            onset_window: onset(7, 28),
            ..base("magnesium-glycinate", MAGNESIUM_GLYCINATE, "mineral", Dosage::new(300.0, Mg), (200.0, 400.0), Bedtime, Strong)
        },
        Supplement {
            effect_class: EffectClass::Stimulant,
            benefits: "Supports energy metabolism, nerve function and red blood cell formation.".into(),
            interactions: "High-dose B6 may reduce levodopa effectiveness.".into(),
            notes: "Includes B12, the nutrient most often missing from plant-based diets.".into(),
            onset_window: onset(14, 30),
            ..base("vitamin-b-complex", VITAMIN_B_COMPLEX, "vitamin", Dosage::new(50.0, Mg), (25.0, 100.0), Morning, Strong)
        },
        Supplement {
            upper_limit: Some(2000.0),
            benefits: "Antioxidant; supports immunity, collagen synthesis and iron absorption.".into(),
            onset_window: onset(7, 28),
            ..base("vitamin-c", VITAMIN_C, "vitamin", Dosage::new(500.0, Mg), (250.0, 1000.0), Morning, Strong)
        },
        Supplement {
            upper_limit: Some(40.0),
            benefits: "Supports immune response, wound healing and skin health.".into(),
            interactions: "Reduces absorption of tetracycline and quinolone antibiotics.".into(),
            notes: "Take with food to avoid nausea.".into(),
            onset_window: onset(14, 60),
            ..base("zinc", ZINC, "mineral", Dosage::new(15.0, Mg), (8.0, 25.0), WithFood, Strong)
        },
        Supplement {
            upper_limit: Some(45.0),
            benefits: "Supports oxygen transport and reduces fatigue from low iron stores.".into(),
            contraindications: "Avoid with hemochromatosis.".into(),
            interactions: "Reduces absorption of levothyroxine; absorption reduced by antacids.".into(),
            onset_window: onset(21, 60),
            ..base("iron", IRON, "mineral", Dosage::new(18.0, Mg), (8.0, 27.0), EmptyStomach, Strong)
        },
        Supplement {
            benefits: "Supports a balanced gut microbiome and regular digestion.".into(),
            contraindications: "Some strains are cultured on dairy.".into(),
            allergens: allergens(&["dairy", "milk"]),
            onset_window: onset(14, 28),
            ..base("probiotic", PROBIOTIC, "probiotic", Dosage::new(10.0, BillionCfu), (5.0, 50.0), Morning, Moderate)
        },
        Supplement {
            effect_class: EffectClass::Calming,
            benefits: "Adaptogen shown to lower cortisol and perceived stress.".into(),
            contraindications: "Avoid during pregnancy and breastfeeding; caution with thyroid disorders.".into(),
            interactions: "May alter thyroid hormone levels and potentiate sedatives.".into(),
            onset_window: onset(14, 60),
            ..base("ashwagandha-ksm66", ASHWAGANDHA, "adaptogen", Dosage::new(600.0, Mg), (300.0, 600.0), Evening, Strong)
        },
        Supplement {
            effect_class: EffectClass::Calming,
            benefits: "Promotes calm focus; smooths the jittery edge of caffeine.".into(),
            interactions: "May add to the effect of blood pressure medication.".into(),
            onset_window: onset(1, 7),
            ..base("l-theanine", L_THEANINE, "amino acid", Dosage::new(200.0, Mg), (100.0, 400.0), Evening, Moderate)
        },
        Supplement {
            effect_class: EffectClass::Stimulant,
            benefits: "Adaptogen that reduces fatigue and supports stress resilience.".into(),
            contraindications: "Limited safety data in pregnancy.".into(),
            interactions: "Avoid combining with antidepressants.".into(),
            onset_window: onset(7, 28),
            ..base("rhodiola-rosea", RHODIOLA, "adaptogen", Dosage::new(300.0, Mg), (200.0, 600.0), Morning, Moderate)
        },
        Supplement {
            benefits: "Supports cellular energy production and heart health.".into(),
            interactions: "May reduce the effect of warfarin.".into(),
            onset_window: onset(28, 84),
            ..base("coq10", COQ10, "antioxidant", Dosage::new(100.0, Mg), (100.0, 300.0), WithFood, Moderate)
        },
        Supplement {
            upper_limit: Some(10.0),
            benefits: "Improves strength, power output and short-term cognition.".into(),
            contraindications: "Use caution with kidney disease.".into(),
            interactions: "Use caution with diuretics.".into(),
            onset_window: onset(7, 28),
            ..base("creatine", CREATINE, "amino acid", Dosage::new(5.0, G), (3.0, 5.0), Morning, Strong)
        },
        Supplement {
            upper_limit: Some(5.0),
            effect_class: EffectClass::Calming,
            benefits: "Shortens time to fall asleep and resets circadian rhythm.".into(),
            contraindications: "Avoid during pregnancy and breastfeeding.".into(),
            interactions: "Potentiates sedatives; may interact with anticoagulants and immunosuppressants.".into(),
            onset_window: onset(1, 7),
            ..base("melatonin", MELATONIN, "hormone", Dosage::new(0.5, Mg), (0.3, 3.0), Bedtime, Strong)
        },
        Supplement {
            effect_class: EffectClass::Calming,
            benefits: "Lowers core body temperature to support deeper sleep.".into(),
            interactions: "Avoid with clozapine.".into(),
            onset_window: onset(1, 7),
            ..base("glycine", GLYCINE, "amino acid", Dosage::new(3.0, G), (3.0, 5.0), Bedtime, Moderate)
        },
        Supplement {
            benefits: "Supports nerve growth factor, memory and focus.".into(),
            contraindications: "Avoid with a mushroom allergy.".into(),
            interactions: "May add to the effect of anticoagulants.".into(),
            allergens: allergens(&["mushroom"]),
            onset_window: onset(14, 56),
            ..base("lions-mane", LIONS_MANE, "mushroom", Dosage::new(1000.0, Mg), (500.0, 3000.0), Morning, Emerging)
        },
        Supplement {
            benefits: "Supports skin elasticity, hair, nails and joint cartilage.".into(),
            contraindications: "Usually bovine or marine sourced.".into(),
            allergens: allergens(&["bovine", "beef"]),
            onset_window: onset(28, 84),
            ..base("collagen-peptides", COLLAGEN, "protein", Dosage::new(10.0, G), (2.5, 15.0), Morning, Moderate)
        },
        Supplement {
            benefits: "Anti-inflammatory support for joints and healthy aging.".into(),
            contraindications: "Caution during pregnancy and with gallbladder disease.".into(),
            interactions: "Additive bleeding risk with anticoagulants.".into(),
            notes: "Look for a formulation with piperine or phospholipids for absorption.".into(),
            onset_window: onset(28, 56),
            ..base("curcumin", CURCUMIN, "botanical", Dosage::new(500.0, Mg), (500.0, 2000.0), WithFood, Moderate)
        },
        Supplement {
            benefits: "Clinically studied for low mood and emotional balance.".into(),
            contraindications: "Avoid during pregnancy.".into(),
            interactions: "Avoid combining with antidepressants.".into(),
            onset_window: onset(28, 56),
            ..base("saffron", SAFFRON, "botanical", Dosage::new(30.0, Mg), (15.0, 30.0), Morning, Moderate)
        },
        Supplement {
            effect_class: EffectClass::Calming,
            benefits: "Serotonin precursor that supports mood and sleep onset.".into(),
            contraindications: "Avoid during pregnancy and breastfeeding.".into(),
            interactions: "Risk of serotonin syndrome with SSRIs, MAOIs, tramadol and triptans.".into(),
            onset_window: onset(14, 28),
            ..base("5-htp", FIVE_HTP, "amino acid", Dosage::new(100.0, Mg), (50.0, 300.0), Evening, Moderate)
        },
        Supplement {
            benefits: "Soluble fiber that supports regularity and healthy cholesterol.".into(),
            notes: "Take with a full glass of water.".into(),
            onset_window: onset(3, 14),
            ..base("psyllium-husk", PSYLLIUM, "fiber", Dosage::new(5.0, G), (3.0, 10.0), Afternoon, Strong)
        },
        Supplement {
            effect_class: EffectClass::Stimulant,
            benefits: "Dopamine precursor that supports focus under stress.".into(),
            contraindications: "Limited safety data in pregnancy; avoid with hyperthyroidism.".into(),
            interactions: "Avoid with MAOIs and thyroid hormone.".into(),
            onset_window: onset(1, 7),
            ..base("l-tyrosine", L_TYROSINE, "amino acid", Dosage::new(500.0, Mg), (500.0, 2000.0), Morning, Emerging)
        },
        Supplement {
            benefits: "Supports healthy blood sugar and lipid levels.".into(),
            contraindications: "Avoid during pregnancy and breastfeeding.".into(),
            interactions: "Additive effect with diabetes and blood pressure medication.".into(),
            onset_window: onset(28, 90),
            ..base("berberine", BERBERINE, "botanical", Dosage::new(500.0, Mg), (500.0, 1500.0), WithFood, Moderate)
        },
        Supplement {
            benefits: "Supports cartilage and joint comfort.".into(),
            contraindications: "Usually derived from shellfish.".into(),
            interactions: "May increase the effect of warfarin.".into(),
            allergens: allergens(&["shellfish"]),
            onset_window: onset(28, 84),
            ..base("glucosamine", GLUCOSAMINE, "joint support", Dosage::new(1500.0, Mg), (1000.0, 1500.0), WithFood, Moderate)
        },
        Supplement {
            benefits: "Supports keratin production for hair and nails.".into(),
            notes: "Pause 72 hours before blood tests; it skews thyroid and troponin assays.".into(),
            onset_window: onset(60, 90),
            ..base("biotin", BIOTIN, "vitamin", Dosage::new(2500.0, Mcg), (30.0, 5000.0), Morning, Emerging)
        },
    ]
}

fn weighted(entries: &[(&str, u8)]) -> Vec<GoalSupplementEntry> {
    entries
        .iter()
        .map(|(name, weight)| GoalSupplementEntry::new(*name, *weight))
        .collect()
}

fn goal_mappings() -> BTreeMap<HealthGoal, Vec<GoalSupplementEntry>> {
    BTreeMap::from([
        (
            HealthGoal::Sleep,
            weighted(&[
                (MAGNESIUM_GLYCINATE, 3),
                (GLYCINE, 2),
                (MELATONIN, 2),
                (L_THEANINE, 2),
                (ASHWAGANDHA, 1),
            ]),
        ),
        (
            HealthGoal::Energy,
            weighted(&[
                (VITAMIN_B_COMPLEX, 3),
                (IRON, 2),
                (COQ10, 2),
                (RHODIOLA, 2),
                (VITAMIN_D3_K2, 1),
                (CREATINE, 1),
            ]),
        ),
        (
            HealthGoal::Focus,
            weighted(&[
                (LIONS_MANE, 2),
                (L_THEANINE, 2),
                (CREATINE, 2),
                (OMEGA_3, 2),
                (L_TYROSINE, 2),
                (RHODIOLA, 1),
            ]),
        ),
        (
            HealthGoal::StressAnxiety,
            weighted(&[
                (ASHWAGANDHA, 3),
                (L_THEANINE, 2),
                (MAGNESIUM_GLYCINATE, 2),
                (RHODIOLA, 2),
                (SAFFRON, 1),
            ]),
        ),
        (
            HealthGoal::Immunity,
            weighted(&[
                (VITAMIN_C, 3),
                (VITAMIN_D3_K2, 3),
                (ZINC, 3),
                (PROBIOTIC, 2),
                (CURCUMIN, 1),
            ]),
        ),
        (
            HealthGoal::GutHealth,
            weighted(&[(PROBIOTIC, 3), (PSYLLIUM, 3), (ZINC, 1), (CURCUMIN, 1)]),
        ),
        (
            HealthGoal::MuscleRecovery,
            weighted(&[
                (CREATINE, 3),
                (MAGNESIUM_GLYCINATE, 2),
                (OMEGA_3, 2),
                (COLLAGEN, 2),
                (CURCUMIN, 1),
                (VITAMIN_D3_K2, 1),
            ]),
        ),
        (
            HealthGoal::HeartHealth,
            weighted(&[
                (OMEGA_3, 3),
                (COQ10, 3),
                (BERBERINE, 2),
                (PSYLLIUM, 2),
                (MAGNESIUM_GLYCINATE, 1),
                (VITAMIN_D3_K2, 1),
            ]),
        ),
        (
            HealthGoal::SkinHairNails,
            weighted(&[
                (COLLAGEN, 3),
                (BIOTIN, 2),
                (VITAMIN_C, 2),
                (ZINC, 2),
                (OMEGA_3, 1),
            ]),
        ),
        (
            HealthGoal::Longevity,
            weighted(&[
                (OMEGA_3, 2),
                (COQ10, 2),
                (CURCUMIN, 2),
                (VITAMIN_D3_K2, 2),
                (BERBERINE, 1),
                (CREATINE, 1),
                (MAGNESIUM_GLYCINATE, 1),
            ]),
        ),
        (
            HealthGoal::Mood,
            weighted(&[
                (SAFFRON, 3),
                (OMEGA_3, 2),
                (FIVE_HTP, 2),
                (VITAMIN_D3_K2, 2),
                (LIONS_MANE, 1),
                (VITAMIN_B_COMPLEX, 1),
            ]),
        ),
        (
            HealthGoal::JointHealth,
            weighted(&[
                (GLUCOSAMINE, 3),
                (CURCUMIN, 3),
                (COLLAGEN, 2),
                (OMEGA_3, 2),
            ]),
        ),
        (
            HealthGoal::GeneralWellness,
            weighted(&[
                (VITAMIN_D3_K2, 3),
                (OMEGA_3, 3),
                (MAGNESIUM_GLYCINATE, 2),
                (VITAMIN_C, 1),
                (PROBIOTIC, 1),
                (VITAMIN_B_COMPLEX, 1),
            ]),
        ),
    ])
}

fn interaction(supplement: &str, keywords: &[&str], description: &str) -> DrugInteraction {
    DrugInteraction {
        supplement: supplement.to_owned(),
        keywords: keywords.iter().map(|keyword| (*keyword).to_owned()).collect(),
        description: description.to_owned(),
    }
}

fn interactions() -> Vec<DrugInteraction> {
    vec![
        interaction(
            VITAMIN_D3_K2,
            &["warfarin", "coumadin", "jantoven", "vitamin k antagonist"],
            "Vitamin K2 counteracts vitamin K antagonists.",
        ),
        interaction(
            OMEGA_3,
            &["warfarin", "anticoagulant", "blood thinner", "clopidogrel", "apixaban", "rivaroxaban"],
            "Additive bleeding risk.",
        ),
        interaction(
            MAGNESIUM_GLYCINATE,
            &["tetracycline", "doxycycline", "ciprofloxacin", "levofloxacin", "bisphosphonate", "alendronate"],
            "Magnesium binds these drugs and blocks their absorption.",
        ),
        interaction(
            VITAMIN_B_COMPLEX,
            &["levodopa"],
            "Pyridoxine accelerates peripheral levodopa breakdown.",
        ),
        interaction(
            ZINC,
            &["tetracycline", "doxycycline", "ciprofloxacin", "penicillamine"],
            "Zinc chelates these drugs.",
        ),
        interaction(
            IRON,
            &["levothyroxine", "synthroid", "thyroid", "tetracycline", "doxycycline", "proton pump", "omeprazole", "antacid"],
            "Iron blocks levothyroxine absorption; acid suppression blocks iron absorption.",
        ),
        interaction(
            PROBIOTIC,
            &["immunosuppressant", "tacrolimus", "cyclosporine"],
            "Infection risk when the immune system is suppressed.",
        ),
        interaction(
            ASHWAGANDHA,
            &["levothyroxine", "thyroid", "sedative", "benzodiazepine", "immunosuppressant"],
            "May raise thyroid hormone levels and deepen sedation.",
        ),
        interaction(
            L_THEANINE,
            &["antihypertensive"],
            "May lower blood pressure further.",
        ),
        interaction(
            RHODIOLA,
            &["ssri", "antidepressant", "maoi"],
            "Possible serotonergic interaction.",
        ),
        interaction(
            COQ10,
            &["warfarin", "coumadin"],
            "Structurally similar to vitamin K; may reduce anticoagulation.",
        ),
        interaction(CREATINE, &["diuretic"], "Increased kidney strain."),
        interaction(
            MELATONIN,
            &["sedative", "benzodiazepine", "warfarin", "anticoagulant", "immunosuppressant"],
            "Additive sedation and possible anticoagulant effect.",
        ),
        interaction(GLYCINE, &["clozapine"], "Reduces clozapine effectiveness."),
        interaction(LIONS_MANE, &["anticoagulant"], "Possible antiplatelet effect."),
        interaction(
            CURCUMIN,
            &["warfarin", "anticoagulant", "blood thinner", "clopidogrel"],
            "Additive bleeding risk.",
        ),
        interaction(
            SAFFRON,
            &["ssri", "antidepressant"],
            "Additive serotonergic effect.",
        ),
        interaction(
            FIVE_HTP,
            &["ssri", "maoi", "antidepressant", "tramadol", "triptan"],
            "Risk of serotonin syndrome.",
        ),
        interaction(
            L_TYROSINE,
            &["maoi", "levothyroxine", "thyroid"],
            "Tyramine-like pressor response with MAOIs; raises thyroid hormone.",
        ),
        interaction(
            BERBERINE,
            &["metformin", "diabetes", "cyclosporine", "antihypertensive"],
            "Additive glucose and blood pressure lowering; raises cyclosporine levels.",
        ),
        interaction(
            GLUCOSAMINE,
            &["warfarin", "anticoagulant"],
            "May increase INR.",
        ),
    ]
}

fn contraindication(
    supplement: &str,
    condition: ContraindicationCondition,
    severity: ContraindicationSeverity,
    description: &str,
) -> Contraindication {
    Contraindication {
        supplement: supplement.to_owned(),
        condition,
        severity,
        description: description.to_owned(),
    }
}

fn contraindications() -> Vec<Contraindication> {
    use ContraindicationCondition::{Breastfeeding, Pregnancy};
    use ContraindicationSeverity::{Absolute, Caution};

    vec![
        contraindication(ASHWAGANDHA, Pregnancy, Absolute, "Associated with miscarriage risk."),
        contraindication(ASHWAGANDHA, Breastfeeding, Absolute, "No safety data."),
        contraindication(MELATONIN, Pregnancy, Absolute, "Crosses the placenta."),
        contraindication(MELATONIN, Breastfeeding, Absolute, "Passes into breast milk."),
        contraindication(RHODIOLA, Pregnancy, Caution, "Limited safety data; check with your doctor."),
        contraindication(RHODIOLA, Breastfeeding, Caution, "Limited safety data; check with your doctor."),
        contraindication(CURCUMIN, Pregnancy, Caution, "Stick to culinary amounts unless your doctor agrees."),
        contraindication(SAFFRON, Pregnancy, Absolute, "High doses can stimulate the uterus."),
        contraindication(FIVE_HTP, Pregnancy, Absolute, "No safety data."),
        contraindication(FIVE_HTP, Breastfeeding, Absolute, "No safety data."),
        contraindication(BERBERINE, Pregnancy, Absolute, "Crosses the placenta."),
        contraindication(BERBERINE, Breastfeeding, Absolute, "Passes into breast milk."),
        contraindication(LIONS_MANE, Pregnancy, Caution, "Limited safety data; check with your doctor."),
        contraindication(L_TYROSINE, Pregnancy, Caution, "Limited safety data; check with your doctor."),
    ]
}

fn synergy(first: &str, second: &str, kind: SynergyKind, note: &str) -> Synergy {
    Synergy {
        first: first.to_owned(),
        second: second.to_owned(),
        kind,
        note: note.to_owned(),
    }
}

fn synergies() -> Vec<Synergy> {
    vec![
        synergy(
            VITAMIN_D3_K2,
            OMEGA_3,
            SynergyKind::Enhances,
            "Fat-soluble nutrients absorb best with the same fat-containing meal.",
        ),
        synergy(
            IRON,
            VITAMIN_C,
            SynergyKind::Enhances,
            "Vitamin C increases non-heme iron absorption.",
        ),
        synergy(
            MAGNESIUM_GLYCINATE,
            GLYCINE,
            SynergyKind::Enhances,
            "Both support sleep onset when taken together before bed.",
        ),
        synergy(
            IRON,
            ZINC,
            SynergyKind::Competes,
            "Iron and zinc compete for the same intestinal transporter.",
        ),
        synergy(
            IRON,
            PSYLLIUM,
            SynergyKind::Competes,
            "Fiber binds minerals and lowers iron absorption.",
        ),
        synergy(
            ZINC,
            PSYLLIUM,
            SynergyKind::Competes,
            "Fiber binds minerals and lowers zinc absorption.",
        ),
    ]
}

fn dosage_adjustments() -> Vec<DosageAdjustment> {
    vec![
        DosageAdjustment {
            supplement: IRON.to_owned(),
            condition: PopulationCondition::Pregnant,
            amount: 27.0,
        },
        DosageAdjustment {
            supplement: IRON.to_owned(),
            condition: PopulationCondition::Female,
            amount: 27.0,
        },
        DosageAdjustment {
            supplement: VITAMIN_D3_K2.to_owned(),
            condition: PopulationCondition::AgeAtLeast(65),
            amount: 3000.0,
        },
        DosageAdjustment {
            supplement: VITAMIN_B_COMPLEX.to_owned(),
            condition: PopulationCondition::PlantBasedDiet,
            amount: 100.0,
        },
        DosageAdjustment {
            supplement: MELATONIN.to_owned(),
            condition: PopulationCondition::AgeAtLeast(65),
            amount: 1.0,
        },
    ]
}
