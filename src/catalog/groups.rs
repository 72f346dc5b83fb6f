// ABOUTME: Derived duration and collection groupings for a sport
// ABOUTME: Recomputed on every request from the borrowed workout list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use crate::models::{DurationBucket, Workout};

/// Workouts falling into one duration bucket
#[derive(Debug, Clone, Serialize)]
pub struct DurationGroup<'a> {
    /// Bucket the workouts were matched against
    pub bucket: DurationBucket,
    /// Matching workouts, source order
    pub workouts: Vec<&'a Workout>,
}

impl<'a> DurationGroup<'a> {
    pub(crate) fn collect(bucket: DurationBucket, workouts: &[&'a Workout]) -> Self {
        Self {
            bucket,
            workouts: workouts
                .iter()
                .copied()
                .filter(|workout| workout.fits(bucket))
                .collect(),
        }
    }

    /// Path segment name (`short-medium`)
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.bucket.name()
    }

    /// Display label (`15-30m`)
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.bucket.label()
    }

    /// Inclusive lower bound in minutes
    #[must_use]
    pub fn min_minutes(&self) -> u32 {
        self.bucket.min_minutes()
    }

    /// Inclusive upper bound in minutes, if bounded
    #[must_use]
    pub fn max_minutes(&self) -> Option<u32> {
        self.bucket.max_minutes()
    }

    /// Number of matching workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether no workout matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

/// Workouts sharing a collection name
#[derive(Debug, Clone, Serialize)]
pub struct CollectionGroup<'a> {
    /// Slugified name, used as the path segment
    pub slug: String,
    /// Collection name as stored on the workouts
    pub name: String,
    /// Workouts whose collection equals `name`, source order
    pub workouts: Vec<&'a Workout>,
}

impl CollectionGroup<'_> {
    /// Number of workouts in the collection
    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
