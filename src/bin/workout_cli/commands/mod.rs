// ABOUTME: Command modules for workout-cli
// ABOUTME: Shared context handed to every command plus browse and catalog commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod browse;
pub mod catalog;

use workout_catalog::catalog::Catalog;
use workout_catalog::config::CatalogConfig;

/// Loaded catalog and effective settings
pub struct Context {
    pub catalog: Catalog,
    pub config: CatalogConfig,
    pub json: bool,
}
