// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides workout builders, hand-made catalogs, and generated catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `workout_catalog`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::collections::BTreeSet;
use std::sync::Once;

use workout_catalog::catalog::Catalog;
use workout_catalog::fixtures::{FixtureConfig, FixtureGenerator};
use workout_catalog::models::{Difficulty, SportType, Workout};

/// Seed used by tests that need a generated catalog
pub const TEST_SEED: u64 = 2024;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Builder for hand-made workouts
pub struct WorkoutBuilder {
    workout: Workout,
}

impl WorkoutBuilder {
    pub fn new(id: &str, sport: SportType, duration: u32) -> Self {
        Self {
            workout: Workout {
                id: id.to_owned(),
                title: format!("Workout {id}"),
                description: "Test workout".to_owned(),
                duration,
                sport_type: sport,
                tags: BTreeSet::new(),
                collection: None,
                difficulty: Difficulty::Beginner,
                thumbnail: None,
                is_popular: false,
                is_new_release: false,
            },
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.workout.tags.insert(tag.to_owned());
        self
    }

    pub fn collection(mut self, name: &str) -> Self {
        self.workout.collection = Some(name.to_owned());
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.workout.difficulty = difficulty;
        self
    }

    pub fn popular(mut self) -> Self {
        self.workout.is_popular = true;
        self
    }

    pub fn new_release(mut self) -> Self {
        self.workout.is_new_release = true;
        self
    }

    pub fn build(self) -> Workout {
        self.workout
    }
}

/// Shorthand for a plain cycling workout
pub fn cycling(id: &str, duration: u32) -> WorkoutBuilder {
    WorkoutBuilder::new(id, SportType::Cycling, duration)
}

/// `count` cycling workouts with ids `c-1..=c-count` and durations cycling through 15..=104
pub fn cycling_series(count: usize) -> Vec<Workout> {
    (1..=count)
        .map(|n| cycling(&format!("c-{n}"), 15 + (n as u32 * 7) % 90).build())
        .collect()
}

/// Catalog over hand-made workouts
pub fn catalog_of(workouts: Vec<Workout>) -> Catalog {
    Catalog::new(workouts).unwrap()
}

/// Default-sized generated catalog
pub fn generated_catalog() -> Catalog {
    init_test_logging();
    FixtureGenerator::new(FixtureConfig::with_seed(TEST_SEED))
        .generate()
        .unwrap()
}

/// Ids of a list of workouts, in order
pub fn ids(workouts: &[&Workout]) -> Vec<String> {
    workouts.iter().map(|workout| workout.id.clone()).collect()
}
