// ABOUTME: User-selected filters narrowing a resolved category
// ABOUTME: Duration bucket, secondary category, tag set, and difficulty, ANDed in that order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{leading, popular_or_leading};
use crate::constants::browsing::NEW_RELEASES_LIMIT;
use crate::errors::SelectorError;
use crate::models::{Difficulty, DurationBucket, Workout};

/// Secondary category filter offered next to the duration filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryCategory {
    /// No narrowing
    #[default]
    All,
    /// Leading workouts of the narrowed list
    #[serde(rename = "New Releases")]
    NewReleases,
    /// Popular marker, falling back to the leading workouts
    Popular,
}

impl SecondaryCategory {
    /// Every option, in filter-panel order
    pub const ALL: [Self; 3] = [Self::All, Self::NewReleases, Self::Popular];

    /// Label shown in the filter panel
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::NewReleases => "New Releases",
            Self::Popular => "Popular",
        }
    }

    /// Parse a label or kebab-case name, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', " ").as_str() {
            "all" => Some(Self::All),
            "new releases" | "new" => Some(Self::NewReleases),
            "popular" => Some(Self::Popular),
            _ => None,
        }
    }
}

impl fmt::Display for SecondaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SecondaryCategory {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SelectorError::unknown_secondary_category(s))
    }
}

/// Filters chosen by the user on top of a category.
///
/// An empty tag set means "any tags"; a non-empty set keeps workouts sharing
/// at least one tag with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilters {
    /// Duration bucket
    #[serde(default)]
    pub duration: Option<DurationBucket>,
    /// Secondary category
    #[serde(default)]
    pub category: SecondaryCategory,
    /// Tags, matched with OR semantics
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Exact difficulty
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl UserFilters {
    /// Restrict to a duration bucket
    #[must_use]
    pub const fn with_duration(mut self, bucket: DurationBucket) -> Self {
        self.duration = Some(bucket);
        self
    }

    /// Restrict to a secondary category
    #[must_use]
    pub const fn with_category(mut self, category: SecondaryCategory) -> Self {
        self.category = category;
        self
    }

    /// Add a tag to the OR set
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Restrict to a difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Whether applying the filters leaves any list unchanged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duration.is_none()
            && self.category == SecondaryCategory::All
            && self.tags.is_empty()
            && self.difficulty.is_none()
    }

    /// Narrow a list; order is preserved
    #[must_use]
    pub fn apply<'a>(&self, workouts: Vec<&'a Workout>) -> Vec<&'a Workout> {
        if self.is_empty() {
            return workouts;
        }

        let mut narrowed = workouts;
        if let Some(bucket) = self.duration {
            narrowed.retain(|workout| workout.fits(bucket));
            debug!(bucket = bucket.name(), remaining = narrowed.len(), "Applied duration filter");
        }

        narrowed = match self.category {
            SecondaryCategory::All => narrowed,
            SecondaryCategory::NewReleases => leading(narrowed, NEW_RELEASES_LIMIT),
            SecondaryCategory::Popular => popular_or_leading(narrowed),
        };

        if !self.tags.is_empty() {
            narrowed.retain(|workout| workout.has_any_tag(&self.tags));
            debug!(tags = self.tags.len(), remaining = narrowed.len(), "Applied tag filter");
        }

        if let Some(difficulty) = self.difficulty {
            narrowed.retain(|workout| workout.difficulty == difficulty);
            debug!(difficulty = %difficulty, remaining = narrowed.len(), "Applied difficulty filter");
        }

        narrowed
    }
}
