// ABOUTME: Static knowledge base of supplement tips and wellness fun facts
// ABOUTME: Fallback insights picked deterministically per calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use vitalis_core::catalog::names::{
    ASHWAGANDHA, COQ10, CREATINE, FIVE_HTP, IRON, LIONS_MANE, L_THEANINE, MAGNESIUM_GLYCINATE,
    MELATONIN, OMEGA_3, PROBIOTIC, PSYLLIUM, VITAMIN_B_COMPLEX, VITAMIN_C, VITAMIN_D3_K2, ZINC,
};

/// Practical tips keyed by catalog supplement name
const SUPPLEMENT_TIPS: &[(&str, &str)] = &[
    (
        VITAMIN_D3_K2,
        "Vitamin D3 + K2 is fat-soluble. Taking it with your largest meal can noticeably improve absorption.",
    ),
    (
        OMEGA_3,
        "Keep your Omega-3 in the fridge. Cold capsules are less likely to cause fishy aftertaste.",
    ),
    (
        MAGNESIUM_GLYCINATE,
        "Magnesium Glycinate works best as part of a wind-down routine, about an hour before bed.",
    ),
    (
        VITAMIN_B_COMPLEX,
        "B vitamins can turn your urine bright yellow. That's harmless riboflavin leaving your body.",
    ),
    (
        VITAMIN_C,
        "Vitamin C is water-soluble, so splitting larger doses across the day keeps levels steadier.",
    ),
    (
        ZINC,
        "Zinc on an empty stomach can cause nausea. Pair it with a meal if that happens to you.",
    ),
    (
        IRON,
        "Coffee and tea reduce iron absorption. Leave at least an hour between them and your iron.",
    ),
    (
        PROBIOTIC,
        "Probiotics settle in over a few weeks. Mild bloating early on usually fades.",
    ),
    (
        ASHWAGANDHA,
        "Ashwagandha builds up gradually. Most studies measured stress benefits after about eight weeks.",
    ),
    (
        L_THEANINE,
        "L-Theanine pairs well with coffee: it keeps the alertness and softens the jittery edge.",
    ),
    (
        COQ10,
        "CoQ10 is fat-soluble. A meal with some healthy fat helps your body absorb it.",
    ),
    (
        CREATINE,
        "Creatine works by saturation, so timing matters less than taking it every day.",
    ),
    (
        MELATONIN,
        "Less is often more with melatonin. Small doses mimic your body's own evening signal.",
    ),
    (
        LIONS_MANE,
        "Lion's Mane effects on focus are subtle and build over several weeks of daily use.",
    ),
    (
        FIVE_HTP,
        "5-HTP is best taken away from protein-heavy meals, which compete for the same uptake.",
    ),
    (
        PSYLLIUM,
        "Always take psyllium with a full glass of water, and keep it apart from other supplements.",
    ),
];

/// General wellness facts shown when nothing more specific applies
const FUN_FACTS: &[&str] = &[
    "Your gut produces around 90% of your body's serotonin.",
    "Even a 2% drop in hydration can measurably reduce focus and mood.",
    "Morning daylight within an hour of waking helps anchor your sleep rhythm.",
    "Ten minutes of walking after a meal can blunt blood sugar spikes.",
    "Your brain uses about 20% of your body's energy despite being 2% of its weight.",
    "Deep sleep is when most muscle repair and growth hormone release happen.",
    "Slow breathing with longer exhales activates your body's relaxation response.",
    "Fermented foods like yogurt and kimchi add beneficial microbes to your gut.",
    "Consistency beats intensity: small daily habits compound over weeks.",
    "A regular wake-up time does more for sleep quality than a regular bedtime.",
];

/// Lowercase identifier for insight keys: runs of non-alphanumerics become one underscore
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Tip text for a supplement, if the knowledge base has one
#[must_use]
pub fn supplement_tip(name: &str) -> Option<&'static str> {
    SUPPLEMENT_TIPS
        .iter()
        .find(|(supplement, _)| supplement.eq_ignore_ascii_case(name))
        .map(|(_, tip)| *tip)
}

/// All fun facts in key order (`fun_fact_0`, `fun_fact_1`, ...)
#[must_use]
pub const fn fun_facts() -> &'static [&'static str] {
    FUN_FACTS
}
