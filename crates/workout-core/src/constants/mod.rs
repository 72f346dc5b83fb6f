// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Browsing limits, duration thresholds, and fixture defaults for the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single list.

/// Limits applied when selecting curated groupings
pub mod browsing {
    /// Number of leading workouts shown under "New Releases"
    pub const NEW_RELEASES_LIMIT: usize = 20;
    /// Maximum size of the personalized sample
    pub const PERSONALIZED_SAMPLE_SIZE: usize = 25;
    /// Leading workouts used when no workout carries the popular marker
    pub const POPULAR_FALLBACK_LIMIT: usize = 30;
    /// Marker looked up in tags (exact) and collection names (substring)
    pub const POPULAR_MARKER: &str = "Popular";
    /// Number of trailing workouts on the "Recently Played" shelf
    pub const RECENTLY_PLAYED_LIMIT: usize = 10;
    /// Default number of workouts rendered per overview shelf
    pub const DEFAULT_CAROUSEL_SIZE: usize = 10;
}

/// Duration thresholds in minutes; all bounds are inclusive
pub mod durations {
    /// The "short" bucket matches exactly this duration
    pub const SHORT_MINUTES: u32 = 15;
    /// Upper bound of the short-medium bucket
    pub const SHORT_MEDIUM_MAX_MINUTES: u32 = 30;
    /// Upper bound of the medium bucket
    pub const MEDIUM_MAX_MINUTES: u32 = 45;
    /// Upper bound of the long bucket
    pub const LONG_MAX_MINUTES: u32 = 60;
    /// Lower bound of the extended bucket (strictly more than an hour)
    pub const EXTENDED_MIN_MINUTES: u32 = LONG_MAX_MINUTES + 1;
}

/// Defaults for synthetic fixture generation
pub mod fixtures {
    /// Workouts generated per sport
    pub const DEFAULT_WORKOUTS_PER_SPORT: usize = 100;
    /// Upper bound on workouts generated per sport
    pub const MAX_WORKOUTS_PER_SPORT: usize = 100_000;
    /// Upper bound on workouts in one generated catalog
    pub const MAX_GENERATED_WORKOUTS: usize = 1_000_000;
    /// Shortest generated workout in minutes
    pub const MIN_GENERATED_MINUTES: u32 = 15;
    /// Longest generated workout in minutes
    pub const MAX_GENERATED_MINUTES: u32 = 104;
    /// Maximum number of tags drawn per workout
    pub const MAX_TAGS_PER_WORKOUT: usize = 4;
    /// Share of each sport's workouts flagged as new releases
    pub const NEW_RELEASE_RATIO: f64 = 0.15;
    /// Probability that any workout is flagged popular
    pub const POPULAR_PROBABILITY: f64 = 0.2;
    /// Extra popularity chance for new releases
    pub const NEW_RELEASE_POPULAR_PROBABILITY: f64 = 0.3;
    /// Placeholder artwork
    pub const DEFAULT_THUMBNAIL: &str = "https://picsum.photos/200/300?grayscale";
    /// Seed used when neither configuration nor the clock provides one
    pub const FALLBACK_SEED: u64 = 12345;
}
