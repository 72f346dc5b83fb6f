// ABOUTME: Category resolution for a sport's workout list
// ABOUTME: Applies the category selector, then user filters, and derives the page heading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Category Resolver
//!
//! Resolution is a pipeline over borrowed workouts:
//!
//! ```text
//! sport list ──category──► category set ──UserFilters::apply──► result
//! ```
//!
//! Nothing here fails: an empty list is a valid result. Unknown duration
//! sub-selectors leave the base set unchanged, unknown collection slugs match
//! nothing. The personalized category draws from a seeded [`ChaCha8Rng`]
//! owned by the resolver, always shuffling a copy of the input.

mod category;
mod filters;
mod heading;

pub use category::Category;
pub use filters::{SecondaryCategory, UserFilters};
pub use heading::CategoryHeading;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use crate::constants::browsing::{
    NEW_RELEASES_LIMIT, PERSONALIZED_SAMPLE_SIZE, POPULAR_FALLBACK_LIMIT,
};
use crate::models::{DurationBucket, SportType, Workout};

/// A resolved category page: heading plus workouts
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPage<'a> {
    /// Title and description
    pub heading: CategoryHeading,
    /// Workouts to display, in display order
    pub workouts: Vec<&'a Workout>,
}

/// Resolves categories and filters into display lists
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    rng: ChaCha8Rng,
}

impl CategoryResolver {
    /// Resolver whose personalized sampling is reproducible for `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Resolve a category and user filters over a sport's workouts.
    ///
    /// The input slice is never reordered. Personalized calls advance the
    /// resolver's RNG, so repeated calls may return different samples.
    pub fn resolve<'a>(
        &mut self,
        workouts: &[&'a Workout],
        category: &Category,
        filters: &UserFilters,
    ) -> Vec<&'a Workout> {
        let selected = self.select(workouts, category);
        debug!(
            category = %category,
            input = workouts.len(),
            selected = selected.len(),
            "Resolved category"
        );
        let result = filters.apply(selected);
        debug!(category = %category, result = result.len(), "Applied user filters");
        result
    }

    /// Resolve and attach the heading for `sport`
    pub fn resolve_page<'a>(
        &mut self,
        workouts: &[&'a Workout],
        sport: SportType,
        category: &Category,
        filters: &UserFilters,
    ) -> ResolvedPage<'a> {
        let workouts = self.resolve(workouts, category, filters);
        ResolvedPage {
            heading: CategoryHeading::for_category(category, workouts.len(), sport),
            workouts,
        }
    }

    fn select<'a>(&mut self, workouts: &[&'a Workout], category: &Category) -> Vec<&'a Workout> {
        match category {
            Category::All | Category::Duration(None) | Category::Collection(None) => {
                workouts.to_vec()
            }
            Category::New => leading(workouts.to_vec(), NEW_RELEASES_LIMIT),
            Category::Personalized => self.sample(workouts),
            Category::Popular => popular_or_leading(workouts.to_vec()),
            Category::Duration(Some(name)) => match DurationBucket::from_name(name) {
                Some(bucket) => workouts
                    .iter()
                    .copied()
                    .filter(|workout| workout.fits(bucket))
                    .collect(),
                None => {
                    debug!(bucket = %name, "Unknown duration bucket, keeping base set");
                    workouts.to_vec()
                }
            },
            Category::Collection(Some(slug)) => workouts
                .iter()
                .copied()
                .filter(|workout| workout.collection_slug().as_deref() == Some(slug.as_str()))
                .collect(),
        }
    }

    fn sample<'a>(&mut self, workouts: &[&'a Workout]) -> Vec<&'a Workout> {
        let mut sample = workouts.to_vec();
        sample.shuffle(&mut self.rng);
        sample.truncate(PERSONALIZED_SAMPLE_SIZE);
        sample
    }
}

pub(crate) fn leading(mut workouts: Vec<&Workout>, limit: usize) -> Vec<&Workout> {
    workouts.truncate(limit);
    workouts
}

pub(crate) fn popular_or_leading(workouts: Vec<&Workout>) -> Vec<&Workout> {
    let popular: Vec<&Workout> = workouts
        .iter()
        .copied()
        .filter(|workout| workout.has_popular_marker())
        .collect();
    if popular.is_empty() {
        leading(workouts, POPULAR_FALLBACK_LIMIT)
    } else {
        popular
    }
}
