// ABOUTME: Catalog subcommand for vitalis-cli
// ABOUTME: Lists catalog supplements, optionally only those mapped to one goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use crate::helpers::output::print_supplement_row;
use anyhow::{Context, Result};
use std::path::Path;
use vitalis::config::AppConfig;
use vitalis::errors::AppError;
use vitalis::models::HealthGoal;
use vitalis::storage::load_catalog;

pub fn run(config: &AppConfig, catalog_path: Option<&Path>, goal: Option<&str>) -> Result<()> {
    let catalog = load_catalog(config.resolve_catalog_path(catalog_path))
        .context("Failed to load supplement catalog")?;

    match goal {
        Some(key) => {
            let goal = HealthGoal::from_key(key)
                .ok_or_else(|| AppError::invalid_input(format!("Unknown goal '{key}'")))?;
            println!("{} ({} supplements)", goal.label(), catalog.goal_mappings(goal).len());
            for entry in catalog.goal_mappings(goal) {
                if let Some(supplement) = catalog.supplement(&entry.supplement) {
                    print_supplement_row(supplement, Some(entry.bounded_weight()));
                }
            }
        }
        None => {
            println!("{} supplements", catalog.all_supplements().len());
            for supplement in catalog.all_supplements() {
                print_supplement_row(supplement, None);
            }
        }
    }
    Ok(())
}
