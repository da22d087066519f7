// ABOUTME: Wellness dimensions, per-dimension score bundles, and the wellbeing aggregate
// ABOUTME: WellbeingScore is the unweighted mean that trends and averages depend on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use crate::constants::scores::{DEFAULT_SCORE, MAX_SCORE, MIN_SCORE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five self-reported wellness dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessDimension {
    /// Sleep quality
    Sleep,
    /// Daytime energy
    Energy,
    /// Mental clarity and focus
    Clarity,
    /// Mood
    Mood,
    /// Digestive comfort
    Gut,
}

impl WellnessDimension {
    /// All dimensions in canonical order
    pub const ALL: [Self; 5] = [
        Self::Sleep,
        Self::Energy,
        Self::Clarity,
        Self::Mood,
        Self::Gut,
    ];

    /// Stable key used in insight keys and serialized data
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Energy => "energy",
            Self::Clarity => "clarity",
            Self::Mood => "mood",
            Self::Gut => "gut",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sleep => "Sleep",
            Self::Energy => "Energy",
            Self::Clarity => "Clarity",
            Self::Mood => "Mood",
            Self::Gut => "Gut health",
        }
    }

    /// Parse a dimension from its stable key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dimension| dimension.key() == key)
    }
}

impl fmt::Display for WellnessDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scores for all five dimensions (0-100 each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    /// Sleep score
    pub sleep: u8,
    /// Energy score
    pub energy: u8,
    /// Clarity score
    pub clarity: u8,
    /// Mood score
    pub mood: u8,
    /// Gut score
    pub gut: u8,
}

impl Default for DimensionScores {
    fn default() -> Self {
        Self::uniform(DEFAULT_SCORE)
    }
}

impl DimensionScores {
    /// Create a score bundle, clamping every value to 0-100
    #[must_use]
    pub fn new(sleep: u8, energy: u8, clarity: u8, mood: u8, gut: u8) -> Self {
        Self {
            sleep: sleep.clamp(MIN_SCORE, MAX_SCORE),
            energy: energy.clamp(MIN_SCORE, MAX_SCORE),
            clarity: clarity.clamp(MIN_SCORE, MAX_SCORE),
            mood: mood.clamp(MIN_SCORE, MAX_SCORE),
            gut: gut.clamp(MIN_SCORE, MAX_SCORE),
        }
    }

    /// Same score for every dimension
    #[must_use]
    pub fn uniform(score: u8) -> Self {
        Self::new(score, score, score, score, score)
    }

    /// Score for one dimension
    #[must_use]
    pub const fn get(&self, dimension: WellnessDimension) -> u8 {
        match dimension {
            WellnessDimension::Sleep => self.sleep,
            WellnessDimension::Energy => self.energy,
            WellnessDimension::Clarity => self.clarity,
            WellnessDimension::Mood => self.mood,
            WellnessDimension::Gut => self.gut,
        }
    }

    /// Replace the score for one dimension (clamped to 0-100)
    pub fn set(&mut self, dimension: WellnessDimension, score: u8) {
        let score = score.clamp(MIN_SCORE, MAX_SCORE);
        match dimension {
            WellnessDimension::Sleep => self.sleep = score,
            WellnessDimension::Energy => self.energy = score,
            WellnessDimension::Clarity => self.clarity = score,
            WellnessDimension::Mood => self.mood = score,
            WellnessDimension::Gut => self.gut = score,
        }
    }

    /// Wellbeing aggregate of these scores
    #[must_use]
    pub fn wellbeing(&self) -> f64 {
        WellbeingScore::calculate(self.sleep, self.energy, self.clarity, self.mood, self.gut)
    }
}

/// Overall wellbeing aggregate
pub struct WellbeingScore;

impl WellbeingScore {
    /// Arithmetic mean of the five dimension scores, without rounding
    #[must_use]
    pub fn calculate(sleep: u8, energy: u8, clarity: u8, mood: u8, gut: u8) -> f64 {
        let total = u32::from(sleep)
            + u32::from(energy)
            + u32::from(clarity)
            + u32::from(mood)
            + u32::from(gut);
        f64::from(total) / 5.0
    }
}
