// ABOUTME: Output formatting helpers for vitalis-cli
// ABOUTME: Pretty JSON for machine-readable results and aligned rows for catalog listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use anyhow::Result;
use serde::Serialize;
use vitalis::models::Supplement;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One catalog line: name, default dose, timing, evidence, and goal weight when listing a goal
pub fn print_supplement_row(supplement: &Supplement, weight: Option<u8>) {
    let weight = weight.map_or_else(String::new, |weight| format!("  weight {weight}"));
    let dose = supplement.recommended_dosage.to_string();
    println!(
        "  {:<24} {dose:>10}  {:<14} {:?}{weight}",
        supplement.name,
        supplement.timing.label(),
        supplement.evidence,
    );
}
