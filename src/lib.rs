// ABOUTME: Main library entry point for the Vitalis supplement and check-in engine
// ABOUTME: Re-exports the core and intelligence crates plus configuration, logging and file storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

#![deny(unsafe_code)]

//! # Vitalis
//!
//! Personalised supplement plans and daily check-in insights for a wellness
//! tracking app. The decision logic is pure and synchronous; this crate adds
//! the edges a host application needs around it.
//!
//! ## Architecture
//!
//! - **Core** (`vitalis-core`): Errors, constants, models and the supplement catalog
//! - **Intelligence** (`vitalis-intelligence`): Plan generation and insight selection
//! - **Config**: Data directory and catalog location from the environment
//! - **Logging**: `tracing-subscriber` setup with json, pretty and compact output
//! - **Storage**: JSON loaders and the file-backed insight key store
//!
//! ## Example Usage
//!
//! ```rust
//! use vitalis::catalog::SupplementCatalog;
//! use vitalis::intelligence::RecommendationEngine;
//! use vitalis::models::{HealthGoal, UserProfile};
//!
//! let profile = UserProfile {
//!     goals: vec![HealthGoal::Sleep],
//!     ..UserProfile::default()
//! };
//! let plan = RecommendationEngine::new().generate_plan(&profile, &SupplementCatalog::reference());
//! assert!(plan.supplements.len() >= 3);
//! ```

/// Environment configuration for the host application
pub mod config;

/// Structured logging setup
pub mod logging;

/// JSON persistence adapters
pub mod storage;

/// Supplement catalog snapshot and bundled reference data
pub use vitalis_core::catalog;

/// Application constants
pub use vitalis_core::constants;

/// Unified error handling
pub use vitalis_core::errors;

/// Core data models
pub use vitalis_core::models;

/// Recommendation and insight algorithms
pub use vitalis_intelligence as intelligence;
