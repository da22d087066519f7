// ABOUTME: Insight subcommand for vitalis-cli
// ABOUTME: Merges persisted recent keys into the context, generates an insight and records it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

use crate::helpers::output::print_json;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use vitalis::config::AppConfig;
use vitalis::intelligence::{CheckInInsightGenerator, RecentInsightTracker};
use vitalis::models::Insight;
use vitalis::storage::{load_catalog, load_insight_context, FileInsightKeyStore};

pub fn run(
    config: &AppConfig,
    context_path: &Path,
    catalog_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let mut context = load_insight_context(context_path)
        .with_context(|| format!("Failed to load insight context from {}", context_path.display()))?;
    let catalog = load_catalog(config.resolve_catalog_path(catalog_path))
        .context("Failed to load supplement catalog")?;

    let store = FileInsightKeyStore::new(config.insight_history_path());
    let mut tracker = RecentInsightTracker::open(store).context("Failed to open insight history")?;
    context.recent_keys.extend(tracker.recent_keys());

    let generator = CheckInInsightGenerator::new().with_catalog(&catalog);
    let Some(insight) = generator.generate(&context) else {
        info!("Every insight was shown recently; nothing new today");
        return print_json(&serde_json::Value::Null);
    };

    if !dry_run {
        tracker
            .record(&insight.key)
            .context("Failed to record shown insight")?;
    }
    print_json(&Insight::from_check_in(&insight, context.date))
}
