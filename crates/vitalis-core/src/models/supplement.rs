// ABOUTME: Supplement catalog entries with dosage, timing, evidence, and safety text
// ABOUTME: Supplement, Dosage, DosageRange, SupplementTiming, EvidenceLevel, EffectClass definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use serde::{Deserialize, Serialize};
use std::fmt;

/// When in the day a supplement should be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementTiming {
    /// With or after breakfast
    Morning,
    /// Early afternoon
    Afternoon,
    /// With dinner or early evening
    Evening,
    /// 30-60 minutes before sleep
    Bedtime,
    /// Alongside a meal containing fat
    WithFood,
    /// At least 30 minutes before eating
    EmptyStomach,
}

impl SupplementTiming {
    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Bedtime => "Bedtime",
            Self::WithFood => "With food",
            Self::EmptyStomach => "Empty stomach",
        }
    }
}

impl fmt::Display for SupplementTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strength of the research behind a supplement
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceLevel {
    /// Multiple randomized controlled trials
    Strong,
    /// Some controlled trials
    Moderate,
    /// Early or mechanistic research
    Emerging,
}

/// Physiological effect class that pins timing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectClass {
    /// Energizing; always taken in the morning
    Stimulant,
    /// Relaxing or sleep-supporting; taken in the evening or at bedtime
    Calming,
    /// No timing constraint from its effect
    #[default]
    Neutral,
}

/// Dosage unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DosageUnit {
    /// Milligrams
    Mg,
    /// Micrograms
    Mcg,
    /// Grams
    G,
    /// International units
    Iu,
    /// Billion colony forming units
    BillionCfu,
}

impl DosageUnit {
    /// Unit suffix for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mg => "mg",
            Self::Mcg => "mcg",
            Self::G => "g",
            Self::Iu => "IU",
            Self::BillionCfu => "billion CFU",
        }
    }
}

/// A single dose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dosage {
    /// Numeric amount
    pub amount: f64,
    /// Unit of `amount`
    pub unit: DosageUnit,
}

impl Dosage {
    /// Create a dosage
    #[must_use]
    pub const fn new(amount: f64, unit: DosageUnit) -> Self {
        Self { amount, unit }
    }
}

impl fmt::Display for Dosage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.fract() == 0.0 {
            write!(f, "{:.0} {}", self.amount, self.unit.symbol())
        } else {
            write!(f, "{} {}", self.amount, self.unit.symbol())
        }
    }
}

/// Inclusive dosage range expressed in the supplement's unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosageRange {
    /// Lowest effective dose
    pub min: f64,
    /// Highest routinely recommended dose
    pub max: f64,
}

/// Days until benefits are typically noticed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnsetWindow {
    /// Earliest noticeable effect
    pub min_days: u32,
    /// Typical full effect
    pub max_days: u32,
}

/// A catalog supplement entry
///
/// `name` is the unique key every plan line traces back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplement {
    /// Stable identifier (slug)
    pub id: String,
    /// Unique display name
    pub name: String,
    /// Category (mineral, vitamin, adaptogen, ...)
    pub category: String,
    /// Dosage range in the recommended dosage's unit
    pub dosage_range: DosageRange,
    /// Default recommended dose
    pub recommended_dosage: Dosage,
    /// Tolerable upper limit; falls back to `dosage_range.max`
    #[serde(default)]
    pub upper_limit: Option<f64>,
    /// Default timing
    pub timing: SupplementTiming,
    /// Evidence level
    pub evidence: EvidenceLevel,
    /// Effect class
    #[serde(default)]
    pub effect_class: EffectClass,
    /// Benefits summary
    #[serde(default)]
    pub benefits: String,
    /// Contraindications as free text
    #[serde(default)]
    pub contraindications: String,
    /// Interactions as free text
    #[serde(default)]
    pub interactions: String,
    /// Additional notes
    #[serde(default)]
    pub notes: String,
    /// Allergen keywords (fish, shellfish, soy, ...)
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Typical onset window
    #[serde(default)]
    pub onset_window: Option<OnsetWindow>,
}

impl Supplement {
    /// Lowest dose a plan may assign
    #[must_use]
    pub const fn safety_floor(&self) -> f64 {
        self.dosage_range.min
    }

    /// Highest dose a plan may assign
    #[must_use]
    pub fn safety_ceiling(&self) -> f64 {
        self.upper_limit
            .unwrap_or(self.dosage_range.max)
            .max(self.dosage_range.min)
    }

    /// Clamp an amount into the safe dosage window
    #[must_use]
    pub fn clamp_dose(&self, amount: f64) -> f64 {
        amount.clamp(self.safety_floor(), self.safety_ceiling())
    }
}
