// ABOUTME: Benchmark test fixtures for generating workout catalogs
// ABOUTME: Provides deterministic catalogs of several sizes for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating workout catalogs.

use workout_catalog::catalog::Catalog;
use workout_catalog::fixtures::{FixtureConfig, FixtureGenerator};

/// Seed shared by every benchmark catalog
pub const BENCH_SEED: u64 = 42;

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// 20 workouts per sport
    Small,
    /// The default 100 workouts per sport
    Default,
    /// 1000 workouts per sport
    Large,
}

impl CatalogSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Default, Self::Large];

    #[must_use]
    pub const fn per_sport(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Default => 100,
            Self::Large => 1_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "120",
            Self::Default => "600",
            Self::Large => "6000",
        }
    }
}

/// Generate a catalog of the given size
///
/// # Panics
///
/// Panics if the generator rejects the default configuration.
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Catalog {
    let config = FixtureConfig {
        workouts_per_sport: size.per_sport(),
        ..FixtureConfig::with_seed(BENCH_SEED)
    };
    FixtureGenerator::new(config).generate().unwrap()
}
