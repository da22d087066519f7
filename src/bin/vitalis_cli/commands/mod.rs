// ABOUTME: Re-exports command modules for vitalis-cli
// ABOUTME: Provides the plan, insight and catalog subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Vitalis Wellness

pub mod catalog;
pub mod insight;
pub mod plan;
