// ABOUTME: Per-sport index over the borrowed catalog
// ABOUTME: Sport subsets, tag/collection/difficulty sets, duration and collection groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use serde::Serialize;

use super::groups::{CollectionGroup, DurationGroup};
use crate::errors::{AppError, AppResult};
use crate::models::{slugify, Difficulty, DurationBucket, SportType, Workout};

/// Number of workouts available for a sport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SportSummary {
    /// Sport
    pub sport: SportType,
    /// Workouts in the catalog for that sport
    pub workout_count: usize,
}

/// Borrowed view answering per-sport questions about the catalog.
///
/// Every method recomputes its answer from the underlying slice; nothing is
/// cached.
#[derive(Debug, Clone, Copy)]
pub struct CatalogIndex<'a> {
    workouts: &'a [Workout],
}

impl<'a> CatalogIndex<'a> {
    /// Index over an arbitrary workout slice
    #[must_use]
    pub const fn new(workouts: &'a [Workout]) -> Self {
        Self { workouts }
    }

    /// Every workout of the sport, in source order
    #[must_use]
    pub fn workouts_for_sport(&self, sport: SportType) -> Vec<&'a Workout> {
        self.workouts
            .iter()
            .filter(|workout| workout.sport_type == sport)
            .collect()
    }

    /// Union of the sport's tags
    #[must_use]
    pub fn tags_for_sport(&self, sport: SportType) -> BTreeSet<String> {
        self.workouts
            .iter()
            .filter(|workout| workout.sport_type == sport)
            .flat_map(|workout| workout.tags.iter().cloned())
            .collect()
    }

    /// Distinct collection names of the sport
    #[must_use]
    pub fn collections_for_sport(&self, sport: SportType) -> BTreeSet<String> {
        self.workouts
            .iter()
            .filter(|workout| workout.sport_type == sport)
            .filter_map(|workout| workout.collection.clone())
            .collect()
    }

    /// Difficulty levels that occur for the sport
    #[must_use]
    pub fn difficulties_for_sport(&self, sport: SportType) -> BTreeSet<Difficulty> {
        self.workouts
            .iter()
            .filter(|workout| workout.sport_type == sport)
            .map(|workout| workout.difficulty)
            .collect()
    }

    /// One group per duration bucket, shortest first
    #[must_use]
    pub fn duration_groups_for_sport(&self, sport: SportType) -> Vec<DurationGroup<'a>> {
        let workouts = self.workouts_for_sport(sport);
        DurationBucket::ALL
            .into_iter()
            .map(|bucket| DurationGroup::collect(bucket, &workouts))
            .collect()
    }

    /// One group per collection, in order of first appearance
    #[must_use]
    pub fn collection_groups_for_sport(&self, sport: SportType) -> Vec<CollectionGroup<'a>> {
        let workouts = self.workouts_for_sport(sport);
        let mut groups: Vec<CollectionGroup<'a>> = Vec::new();
        for workout in workouts {
            let Some(name) = workout.collection.as_deref() else {
                continue;
            };
            match groups.iter_mut().find(|group| group.name == name) {
                Some(group) => group.workouts.push(workout),
                None => groups.push(CollectionGroup {
                    slug: slugify(name),
                    name: name.to_owned(),
                    workouts: vec![workout],
                }),
            }
        }
        groups
    }

    /// Look up a single workout for its detail view
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no workout has the id.
    pub fn workout_by_id(&self, id: &str) -> AppResult<&'a Workout> {
        self.workouts
            .iter()
            .find(|workout| workout.id == id)
            .ok_or_else(|| AppError::not_found(format!("Workout '{id}'")))
    }

    /// Workout counts for every sport, landing-page order
    #[must_use]
    pub fn sport_summaries(&self) -> Vec<SportSummary> {
        SportType::ALL
            .into_iter()
            .map(|sport| SportSummary {
                sport,
                workout_count: self
                    .workouts
                    .iter()
                    .filter(|workout| workout.sport_type == sport)
                    .count(),
            })
            .collect()
    }
}
