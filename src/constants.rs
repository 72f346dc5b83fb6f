// ABOUTME: Catalog constants for browsing limits, duration thresholds, and fixtures
// ABOUTME: Re-exports the domain-separated constant modules from workout-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::constants::*;
