// ABOUTME: Configuration module for vitalis-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

/// Intelligence module configuration (plan generation, insights, tracker)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
