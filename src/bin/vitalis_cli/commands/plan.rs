// ABOUTME: Plan subcommand for vitalis-cli
// ABOUTME: Loads a profile and catalog, generates a supplement plan and prints it as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use crate::helpers::output::print_json;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use vitalis::config::AppConfig;
use vitalis::intelligence::RecommendationEngine;
use vitalis::storage::{load_catalog, load_profile};

pub fn run(config: &AppConfig, profile_path: &Path, catalog_path: Option<&Path>) -> Result<()> {
    let profile = load_profile(profile_path)
        .with_context(|| format!("Failed to load profile from {}", profile_path.display()))?;
    let catalog = load_catalog(config.resolve_catalog_path(catalog_path))
        .context("Failed to load supplement catalog")?;

    let plan = RecommendationEngine::new().generate_plan(&profile, &catalog);
    info!(
        plan_id = %plan.id,
        supplements = plan.supplements.len(),
        excluded = plan.excluded.len(),
        "Plan ready"
    );
    print_json(&plan)
}
