// ABOUTME: Configuration management module for catalog settings
// ABOUTME: Environment-driven seed, fixture source, fallback policy, and display limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: catalog configuration from `CATALOG_*` variables
//!
//! Logging configuration lives in [`crate::logging`].

/// Environment configuration
pub mod environment;

pub use environment::{parse_sport_fallback, seed_from_clock, CatalogConfig};
