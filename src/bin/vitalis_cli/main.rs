// ABOUTME: Vitalis CLI - generate supplement plans and check-in insights from JSON inputs
// ABOUTME: Wires environment configuration, logging, file storage and the intelligence crate together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness
//!
//! Usage:
//! ```bash
//! # Generate a plan for a profile using the bundled catalog
//! vitalis-cli plan --profile profile.json
//!
//! # Generate a plan against an external catalog snapshot
//! vitalis-cli plan --profile profile.json --catalog catalog.json
//!
//! # Pick today's insight and remember it so it is not repeated
//! vitalis-cli insight --context context.json
//!
//! # List catalog supplements, optionally for one goal
//! vitalis-cli catalog --goal sleep
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use vitalis::config::AppConfig;
use vitalis::errors::AppError;
use vitalis::intelligence::IntelligenceConfig;

#[derive(Parser)]
#[command(
    name = "vitalis-cli",
    about = "Vitalis supplement plan and insight CLI",
    long_about = "Generate personalised supplement plans and daily check-in insights from JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override (defaults to VITALIS_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a supplement plan for a profile and print it as JSON
    Plan {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Catalog snapshot JSON file (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Generate today's check-in insight and record it as shown
    Insight {
        /// Insight context JSON file
        #[arg(long)]
        context: PathBuf,

        /// Catalog snapshot JSON file, used for supplement milestone intervals
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Do not record the insight in the recent insight history
        #[arg(long)]
        dry_run: bool,
    },

    /// List catalog supplements
    Catalog {
        /// Catalog snapshot JSON file (defaults to the bundled catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only supplements mapped to this goal key (e.g. `sleep`, `stress_anxiety`)
        #[arg(long)]
        goal: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let logging = if cli.verbose {
        config.logging.clone().with_level("debug")
    } else {
        config.logging.clone()
    };
    logging.init()?;
    debug!(data_dir = %config.data_dir.display(), "Vitalis CLI starting");

    // Threshold overrides must validate before any command runs
    IntelligenceConfig::load().map_err(AppError::from)?;

    match cli.command {
        Command::Plan { profile, catalog } => {
            commands::plan::run(&config, &profile, catalog.as_deref())
        }
        Command::Insight {
            context,
            catalog,
            dry_run,
        } => commands::insight::run(&config, &context, catalog.as_deref(), dry_run),
        Command::Catalog { catalog, goal } => {
            commands::catalog::run(&config, catalog.as_deref(), goal.as_deref())
        }
    }
}
