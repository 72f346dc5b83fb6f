// ABOUTME: Seeded synthetic workout generator for demos, tests, and fixture files
// ABOUTME: Deterministic for a given seed; vocabularies are configurable per sport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fixture Generator
//!
//! Produces a [`Catalog`] of synthetic workouts. For each configured sport the
//! generator emits `workouts_per_sport` records:
//!
//! - duration drawn uniformly from the configured minute range
//! - one to `max_tags` distinct tags and one collection from the sport vocabulary
//! - the first `new_release_ratio` share of the sport's records are new releases
//! - popular with `popular_probability`, or additionally with
//!   `new_release_popular_probability` for new releases
//!
//! The same configuration always yields the same catalog.

mod vocabulary;

pub use vocabulary::{SportVocabulary, DESCRIPTIONS, TITLE_TEMPLATES};

use std::collections::{BTreeSet, HashSet};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::constants::fixtures::{
    DEFAULT_THUMBNAIL, DEFAULT_WORKOUTS_PER_SPORT, FALLBACK_SEED, MAX_GENERATED_MINUTES,
    MAX_GENERATED_WORKOUTS, MAX_TAGS_PER_WORKOUT, MAX_WORKOUTS_PER_SPORT,
    MIN_GENERATED_MINUTES, NEW_RELEASE_POPULAR_PROBABILITY, NEW_RELEASE_RATIO,
    POPULAR_PROBABILITY,
};
use crate::errors::{AppError, AppResult};
use crate::models::{Difficulty, Workout};

/// Generator settings
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureConfig {
    /// RNG seed
    pub seed: u64,
    /// Records generated for each vocabulary
    pub workouts_per_sport: usize,
    /// Shortest duration in minutes, inclusive
    pub min_minutes: u32,
    /// Longest duration in minutes, inclusive
    pub max_minutes: u32,
    /// Upper bound on tags per workout
    pub max_tags: usize,
    /// Leading share of each sport flagged as new releases
    pub new_release_ratio: f64,
    /// Base popularity probability
    pub popular_probability: f64,
    /// Second popularity draw for new releases
    pub new_release_popular_probability: f64,
    /// Thumbnail stamped on every workout
    pub thumbnail: Option<String>,
    /// One vocabulary per generated sport, in output order
    pub vocabularies: Vec<SportVocabulary>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            seed: FALLBACK_SEED,
            workouts_per_sport: DEFAULT_WORKOUTS_PER_SPORT,
            min_minutes: MIN_GENERATED_MINUTES,
            max_minutes: MAX_GENERATED_MINUTES,
            max_tags: MAX_TAGS_PER_WORKOUT,
            new_release_ratio: NEW_RELEASE_RATIO,
            popular_probability: POPULAR_PROBABILITY,
            new_release_popular_probability: NEW_RELEASE_POPULAR_PROBABILITY,
            thumbnail: Some(DEFAULT_THUMBNAIL.to_owned()),
            vocabularies: SportVocabulary::defaults(),
        }
    }
}

impl FixtureConfig {
    /// Default settings with the given seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Check ranges and probabilities
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first offending setting.
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=MAX_WORKOUTS_PER_SPORT).contains(&self.workouts_per_sport) {
            return Err(AppError::config(format!(
                "workouts_per_sport must be within 1..={MAX_WORKOUTS_PER_SPORT}, got {}",
                self.workouts_per_sport
            )));
        }
        self.total_workouts()?;
        if self.min_minutes == 0 || self.min_minutes > self.max_minutes {
            return Err(AppError::config(format!(
                "Invalid duration range {}..={} minutes",
                self.min_minutes, self.max_minutes
            )));
        }
        if self.max_tags == 0 {
            return Err(AppError::config("max_tags must be at least 1"));
        }
        for (name, value) in [
            ("new_release_ratio", self.new_release_ratio),
            ("popular_probability", self.popular_probability),
            (
                "new_release_popular_probability",
                self.new_release_popular_probability,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AppError::config(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }
        let mut sports = HashSet::new();
        for vocabulary in &self.vocabularies {
            if !sports.insert(vocabulary.sport) {
                return Err(AppError::config(format!(
                    "Duplicate vocabulary for {}",
                    vocabulary.sport
                )));
            }
        }
        Ok(())
    }

    /// Number of workouts the configuration generates
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the total exceeds the catalog cap.
    pub fn total_workouts(&self) -> AppResult<usize> {
        self.workouts_per_sport
            .checked_mul(self.vocabularies.len())
            .filter(|total| *total <= MAX_GENERATED_WORKOUTS)
            .ok_or_else(|| {
                AppError::config(format!(
                    "{} workouts for {} sports exceeds the cap of {MAX_GENERATED_WORKOUTS}",
                    self.workouts_per_sport,
                    self.vocabularies.len()
                ))
            })
    }
}

/// Seeded workout generator
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    config: FixtureConfig,
}

impl FixtureGenerator {
    /// Generator for the given settings
    #[must_use]
    pub const fn new(config: FixtureConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Generate the catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the settings fail validation.
    pub fn generate(&self) -> AppResult<Catalog> {
        self.config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut workouts = Vec::with_capacity(self.config.total_workouts()?);

        for vocabulary in &self.config.vocabularies {
            let before = workouts.len();
            for ordinal in 0..self.config.workouts_per_sport {
                workouts.push(self.generate_workout(&mut rng, vocabulary, ordinal));
            }
            let generated = &workouts[before..];
            debug!(
                sport = %vocabulary.sport,
                workouts = generated.len(),
                new_releases = generated.iter().filter(|w| w.is_new_release).count(),
                popular = generated.iter().filter(|w| w.is_popular).count(),
                "Generated sport fixtures"
            );
        }

        info!(
            seed = self.config.seed,
            workouts = workouts.len(),
            sports = self.config.vocabularies.len(),
            "Generated workout catalog"
        );
        Catalog::new(workouts)
    }

    fn new_release_count(&self) -> usize {
        (self.config.workouts_per_sport as f64 * self.config.new_release_ratio).floor() as usize
    }

    fn generate_workout(
        &self,
        rng: &mut ChaCha8Rng,
        vocabulary: &SportVocabulary,
        ordinal: usize,
    ) -> Workout {
        let config = &self.config;
        let number = ordinal + 1;

        let duration = rng.gen_range(config.min_minutes..=config.max_minutes);
        let tag_count = rng.gen_range(1..=config.max_tags);
        let tags: BTreeSet<String> = vocabulary
            .tags
            .choose_multiple(rng, tag_count)
            .cloned()
            .collect();
        let collection = vocabulary.collections.choose(rng).cloned();
        let template = TITLE_TEMPLATES.choose(rng).unwrap_or(&"Workout");
        let description = DESCRIPTIONS.choose(rng).unwrap_or(&"");
        let difficulty = Difficulty::ALL
            .choose(rng)
            .copied()
            .unwrap_or(Difficulty::Beginner);

        let is_new_release = ordinal < self.new_release_count();
        let is_popular = rng.gen_bool(config.popular_probability)
            || (is_new_release && rng.gen_bool(config.new_release_popular_probability));

        Workout {
            id: format!("{}-{number}", vocabulary.sport.slug()),
            title: format!("{template} {number}"),
            description: (*description).to_owned(),
            duration,
            sport_type: vocabulary.sport,
            tags,
            collection,
            difficulty,
            thumbnail: config.thumbnail.clone(),
            is_popular,
            is_new_release,
        }
    }
}
