// ABOUTME: User health profile collected during onboarding
// ABOUTME: Health goals, diet, lifestyle, medications, allergies, and baseline wellness scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use super::wellness::DimensionScores;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Health goals a user can select during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Fall asleep faster and sleep deeper
    Sleep,
    /// Sustained daytime energy
    Energy,
    /// Focus and cognition
    Focus,
    /// Stress and anxiety relief
    StressAnxiety,
    /// Immune support
    Immunity,
    /// Digestive health
    GutHealth,
    /// Muscle growth and exercise recovery
    MuscleRecovery,
    /// Cardiovascular health
    HeartHealth,
    /// Skin, hair and nails
    SkinHairNails,
    /// Healthy aging
    Longevity,
    /// Mood balance
    Mood,
    /// Joint comfort and mobility
    JointHealth,
    /// Fallback weighting used when no goal is selected
    GeneralWellness,
}

impl HealthGoal {
    /// Goals a user can pick (excludes the general wellness fallback)
    pub const SELECTABLE: [Self; 12] = [
        Self::Sleep,
        Self::Energy,
        Self::Focus,
        Self::StressAnxiety,
        Self::Immunity,
        Self::GutHealth,
        Self::MuscleRecovery,
        Self::HeartHealth,
        Self::SkinHairNails,
        Self::Longevity,
        Self::Mood,
        Self::JointHealth,
    ];

    /// Stable key matching the catalog's goal mapping keys
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Energy => "energy",
            Self::Focus => "focus",
            Self::StressAnxiety => "stress_anxiety",
            Self::Immunity => "immunity",
            Self::GutHealth => "gut_health",
            Self::MuscleRecovery => "muscle_recovery",
            Self::HeartHealth => "heart_health",
            Self::SkinHairNails => "skin_hair_nails",
            Self::Longevity => "longevity",
            Self::Mood => "mood",
            Self::JointHealth => "joint_health",
            Self::GeneralWellness => "general_wellness",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sleep => "Better Sleep",
            Self::Energy => "More Energy",
            Self::Focus => "Focus & Clarity",
            Self::StressAnxiety => "Stress & Anxiety",
            Self::Immunity => "Immunity",
            Self::GutHealth => "Gut Health",
            Self::MuscleRecovery => "Muscle & Recovery",
            Self::HeartHealth => "Heart Health",
            Self::SkinHairNails => "Skin, Hair & Nails",
            Self::Longevity => "Healthy Aging",
            Self::Mood => "Mood Balance",
            Self::JointHealth => "Joint Health",
            Self::GeneralWellness => "General Wellness",
        }
    }

    /// Parse a goal from its stable key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::SELECTABLE
            .into_iter()
            .chain([Self::GeneralWellness])
            .find(|goal| goal.key() == key)
    }
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Biological sex, used only for dosage adjustments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Male
    Male,
    /// Female
    Female,
    /// Not disclosed; unisex defaults apply
    #[default]
    Unspecified,
}

/// Dietary pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// No restrictions
    #[default]
    Omnivore,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Vegetarian plus fish
    Pescatarian,
    /// Very low carbohydrate
    Keto,
    /// Paleolithic
    Paleo,
}

impl DietType {
    /// Plant-based diets share the same nutrient gaps
    #[must_use]
    pub const fn is_plant_based(self) -> bool {
        matches!(self, Self::Vegan | Self::Vegetarian)
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::Keto => "keto",
            Self::Paleo => "paleo",
        }
    }
}

/// How often the user exercises
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFrequency {
    /// Never
    Never,
    /// One or two sessions a week
    #[default]
    Occasionally,
    /// Three or four sessions a week
    Regularly,
    /// Five or more sessions a week
    Daily,
}

/// Daily caffeine consumption
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaffeineIntake {
    /// No caffeine
    #[default]
    None,
    /// About one cup of coffee
    Low,
    /// Two cups
    Moderate,
    /// Three or more cups
    High,
}

/// Weekly alcohol consumption
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholIntake {
    /// No alcohol
    #[default]
    None,
    /// A few drinks a month
    Occasional,
    /// A few drinks a week
    Moderate,
    /// Daily drinking
    Heavy,
}

/// Self-reported stress level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    /// Rarely stressed
    Low,
    /// Occasionally stressed
    #[default]
    Moderate,
    /// Frequently stressed
    High,
    /// Constantly stressed
    VeryHigh,
}

/// Demographic and lifestyle snapshot used to generate a supplement plan
///
/// # Examples
///
/// ```rust
/// use vitalis_core::models::{DietType, HealthGoal, UserProfile};
///
/// let profile = UserProfile {
///     name: "Sam".into(),
///     goals: vec![HealthGoal::Sleep],
///     diet_type: DietType::Vegan,
///     ..UserProfile::default()
/// };
/// assert!(profile.diet_type.is_plant_based());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    pub sex: BiologicalSex,
    /// Currently pregnant
    pub is_pregnant: bool,
    /// Currently breastfeeding
    pub is_breastfeeding: bool,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Selected health goals
    pub goals: Vec<HealthGoal>,
    /// Supplements already taken before onboarding
    pub current_supplements: Vec<String>,
    /// Medications as free text
    pub medications: Vec<String>,
    /// Known allergies as free text
    pub allergies: Vec<String>,
    /// Diet type
    pub diet_type: DietType,
    /// Exercise frequency
    pub exercise_frequency: ExerciseFrequency,
    /// Caffeine intake
    pub caffeine_intake: CaffeineIntake,
    /// Alcohol intake
    pub alcohol_intake: AlcoholIntake,
    /// Stress level
    pub stress_level: StressLevel,
    /// Baseline wellness scores captured at onboarding
    pub baselines: DimensionScores,
}

impl UserProfile {
    /// Goals used for scoring; falls back to general wellness when none are selected
    #[must_use]
    pub fn effective_goals(&self) -> Vec<HealthGoal> {
        let mut goals: Vec<HealthGoal> = Vec::with_capacity(self.goals.len());
        for goal in &self.goals {
            if !goals.contains(goal) {
                goals.push(*goal);
            }
        }
        if goals.is_empty() {
            goals.push(HealthGoal::GeneralWellness);
        }
        goals
    }
}
