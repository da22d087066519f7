// ABOUTME: Time-of-day assignment for plan lines with effect-class locks and synergy rules
// ABOUTME: Stimulants go to the morning, calming supplements to the evening, pairs are co-located or separated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

//! Timing Resolution
//!
//! Resolution runs in a fixed priority order so the result never depends on
//! iteration accidents:
//!
//! 1. Pinned timings from profile rules (e.g. L-Theanine with high caffeine)
//! 2. Effect-class locks: stimulants in the morning, calming supplements in the
//!    evening (or at bedtime when the catalog says so)
//! 3. Competing pairs sharing a slot: the later-ranked unlocked line moves to
//!    the first free alternative slot
//! 4. Enhancing pairs in different slots: the later-ranked unlocked line joins
//!    its partner
//! 5. Everything else keeps its catalog timing

use std::collections::BTreeMap;
use tracing::debug;
use vitalis_core::catalog::{SupplementCatalog, SynergyKind};
use vitalis_core::models::{EffectClass, PlanSupplement, Supplement, SupplementTiming};

/// Slots tried, in order, when separating competing supplements
const ALTERNATIVE_SLOTS: [SupplementTiming; 4] = [
    SupplementTiming::Afternoon,
    SupplementTiming::Evening,
    SupplementTiming::Morning,
    SupplementTiming::WithFood,
];

/// A timing change made by a synergy rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingAdjustment {
    /// Line that moved
    pub supplement: String,
    /// Partner that caused the move
    pub partner: String,
    /// Previous timing
    pub from: SupplementTiming,
    /// New timing
    pub to: SupplementTiming,
    /// Pair relationship
    pub kind: SynergyKind,
    /// Catalog explanation of the pair
    pub note: String,
}

/// Timing lookups keyed by lowercase supplement name
pub type TimingPins = BTreeMap<String, SupplementTiming>;

/// Resolves the time of day for plan lines
pub struct TimingResolver;

impl TimingResolver {
    /// Timing for a single supplement before any pair rules, and whether it is locked
    #[must_use]
    pub fn default_timing(supplement: &Supplement, pins: &TimingPins) -> (SupplementTiming, bool) {
        if let Some(timing) = pins.get(&supplement.name.to_lowercase()) {
            return (*timing, true);
        }
        match supplement.effect_class {
            EffectClass::Stimulant => (SupplementTiming::Morning, true),
            EffectClass::Calming if supplement.timing == SupplementTiming::Bedtime => {
                (SupplementTiming::Bedtime, true)
            }
            EffectClass::Calming => (SupplementTiming::Evening, true),
            EffectClass::Neutral => (supplement.timing, false),
        }
    }

    /// Assign timings to `lines`, which must be in rank order
    ///
    /// Lines whose name is not in the catalog keep their current timing and are
    /// treated as locked.
    pub fn resolve(
        lines: &mut [PlanSupplement],
        catalog: &SupplementCatalog,
        pins: &TimingPins,
    ) -> Vec<TimingAdjustment> {
        let mut locked = Vec::with_capacity(lines.len());
        for line in lines.iter_mut() {
            if let Some(supplement) = catalog.supplement(&line.name) {
                let (timing, is_locked) = Self::default_timing(supplement, pins);
                line.timing = timing;
                locked.push(is_locked);
            } else {
                locked.push(true);
            }
        }

        let mut adjustments = Self::separate_competitors(lines, &mut locked, catalog);
        adjustments.extend(Self::colocate_enhancers(lines, &mut locked, catalog));
        adjustments
    }

    fn position(lines: &[PlanSupplement], name: &str) -> Option<usize> {
        lines
            .iter()
            .position(|line| line.name.eq_ignore_ascii_case(name))
    }

    /// Timings occupied by lines that compete with `lines[index]`
    fn competitor_slots(
        lines: &[PlanSupplement],
        index: usize,
        catalog: &SupplementCatalog,
    ) -> Vec<SupplementTiming> {
        catalog
            .synergies_for(&lines[index].name)
            .filter(|synergy| synergy.kind == SynergyKind::Competes)
            .filter_map(|synergy| synergy.partner_of(&lines[index].name))
            .filter_map(|partner| Self::position(lines, partner))
            .map(|partner| lines[partner].timing)
            .collect()
    }

    /// Pick which of two ranked lines moves: the later one unless it is locked
    fn mover(first: usize, second: usize, locked: &[bool]) -> Option<(usize, usize)> {
        let (earlier, later) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        if !locked[later] {
            Some((later, earlier))
        } else if !locked[earlier] {
            Some((earlier, later))
        } else {
            None
        }
    }

    fn separate_competitors(
        lines: &mut [PlanSupplement],
        locked: &mut [bool],
        catalog: &SupplementCatalog,
    ) -> Vec<TimingAdjustment> {
        let mut adjustments = Vec::new();
        for synergy in catalog
            .synergies
            .iter()
            .filter(|synergy| synergy.kind == SynergyKind::Competes)
        {
            let (Some(first), Some(second)) = (
                Self::position(lines, &synergy.first),
                Self::position(lines, &synergy.second),
            ) else {
                continue;
            };
            if lines[first].timing != lines[second].timing {
                continue;
            }
            let Some((moving, anchor)) = Self::mover(first, second, locked) else {
                debug!(
                    first = %synergy.first,
                    second = %synergy.second,
                    "Competing supplements share a slot but both are locked"
                );
                continue;
            };

            let taken = Self::competitor_slots(lines, moving, catalog);
            let Some(slot) = ALTERNATIVE_SLOTS
                .into_iter()
                .find(|slot| !taken.contains(slot))
            else {
                continue;
            };

            adjustments.push(TimingAdjustment {
                supplement: lines[moving].name.clone(),
                partner: lines[anchor].name.clone(),
                from: lines[moving].timing,
                to: slot,
                kind: SynergyKind::Competes,
                note: synergy.note.clone(),
            });
            lines[moving].timing = slot;
            locked[moving] = true;
        }
        adjustments
    }

    fn colocate_enhancers(
        lines: &mut [PlanSupplement],
        locked: &mut [bool],
        catalog: &SupplementCatalog,
    ) -> Vec<TimingAdjustment> {
        let mut adjustments = Vec::new();
        for synergy in catalog
            .synergies
            .iter()
            .filter(|synergy| synergy.kind == SynergyKind::Enhances)
        {
            let (Some(first), Some(second)) = (
                Self::position(lines, &synergy.first),
                Self::position(lines, &synergy.second),
            ) else {
                continue;
            };
            if lines[first].timing == lines[second].timing {
                continue;
            }
            let Some((moving, anchor)) = Self::mover(first, second, locked) else {
                continue;
            };

            let target = lines[anchor].timing;
            if Self::competitor_slots(lines, moving, catalog).contains(&target) {
                debug!(
                    supplement = %lines[moving].name,
                    partner = %lines[anchor].name,
                    "Not co-locating: target slot holds a competing supplement"
                );
                continue;
            }

            adjustments.push(TimingAdjustment {
                supplement: lines[moving].name.clone(),
                partner: lines[anchor].name.clone(),
                from: lines[moving].timing,
                to: target,
                kind: SynergyKind::Enhances,
                note: synergy.note.clone(),
            });
            lines[moving].timing = target;
            locked[moving] = true;
        }
        adjustments
    }
}
