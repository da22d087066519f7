// ABOUTME: Display names of the supplements in the bundled reference catalog
// ABOUTME: Names are the unique key that plan lines, rules, and logs refer to
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

/// Vitamin D3 + K2
pub const VITAMIN_D3_K2: &str = "Vitamin D3 + K2";
/// Omega-3 (EPA/DHA)
pub const OMEGA_3: &str = "Omega-3 (EPA/DHA)";
/// Magnesium Glycinate
pub const MAGNESIUM_GLYCINATE: &str = "Magnesium Glycinate";
/// Vitamin B Complex
pub const VITAMIN_B_COMPLEX: &str = "Vitamin B Complex";
/// Vitamin C
pub const VITAMIN_C: &str = "Vitamin C";
/// Zinc
pub const ZINC: &str = "Zinc";
/// Iron
pub const IRON: &str = "Iron";
/// Probiotic
pub const PROBIOTIC: &str = "Probiotic";
/// Ashwagandha KSM-66
pub const ASHWAGANDHA: &str = "Ashwagandha KSM-66";
/// L-Theanine
pub const L_THEANINE: &str = "L-Theanine";
/// Rhodiola Rosea
pub const RHODIOLA: &str = "Rhodiola Rosea";
/// CoQ10
pub const COQ10: &str = "CoQ10";
/// Creatine Monohydrate
pub const CREATINE: &str = "Creatine Monohydrate";
/// Melatonin
pub const MELATONIN: &str = "Melatonin";
/// Glycine
pub const GLYCINE: &str = "Glycine";
/// Lion's Mane
pub const LIONS_MANE: &str = "Lion's Mane";
/// Collagen Peptides
pub const COLLAGEN: &str = "Collagen Peptides";
/// Curcumin
pub const CURCUMIN: &str = "Curcumin";
/// Saffron Extract
pub const SAFFRON: &str = "Saffron Extract";
/// 5-HTP
pub const FIVE_HTP: &str = "5-HTP";
/// Psyllium Husk
pub const PSYLLIUM: &str = "Psyllium Husk";
/// L-Tyrosine
pub const L_TYROSINE: &str = "L-Tyrosine";
/// Berberine
pub const BERBERINE: &str = "Berberine";
/// Glucosamine Sulfate
pub const GLUCOSAMINE: &str = "Glucosamine Sulfate";
/// Biotin
pub const BIOTIN: &str = "Biotin";
