// ABOUTME: Core types and constants for the Vitalis wellness engine
// ABOUTME: Foundation crate with error handling, data models, constants, and the supplement catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

#![deny(unsafe_code)]

//! # Vitalis Core
//!
//! Foundation crate providing shared types and constants for the Vitalis
//! wellness engine. It holds plain data and no algorithms beyond derived
//! values, so it changes infrequently and keeps incremental builds cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Plan sizing, tier thresholds, and insight margins
//! - **models**: Profiles, supplements, plans, check-ins, streaks, and insights
//! - **catalog**: Read-only supplement catalog snapshot and the bundled reference table

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, supplement, plan, check-in, streak, insight)
pub mod models;

/// Supplement catalog snapshot and bundled reference data
pub mod catalog;
