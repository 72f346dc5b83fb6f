// ABOUTME: Title and description shown above a resolved workout list
// ABOUTME: Derived from the category, the result count, and the sport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

use super::Category;
use crate::models::{DurationBucket, SportType};

/// Heading for a category page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryHeading {
    /// Page title
    pub title: String,
    /// One-line description
    pub description: String,
}

impl CategoryHeading {
    /// Heading for `category` when `count` workouts were resolved for `sport`
    #[must_use]
    pub fn for_category(category: &Category, count: usize, sport: SportType) -> Self {
        match category {
            Category::All => Self::new(
                format!("All {sport} Workouts"),
                format!(
                    "{count} {} workouts available",
                    sport.display_name().to_lowercase()
                ),
            ),
            Category::New => Self::new("New Releases", "Latest workouts and fresh content"),
            Category::Personalized => Self::new("Tailored to You", "Workouts selected just for you"),
            Category::Popular => Self::new("Popular Workouts", "Most viewed and trending workouts"),
            Category::Duration(None) => {
                Self::new("Duration Workouts", "Browse workouts by duration")
            }
            Category::Duration(Some(name)) => Self::new(
                DurationBucket::from_name(name).map_or("Duration Workouts", DurationBucket::title),
                format!("{count} workouts in this duration range"),
            ),
            Category::Collection(None) => {
                Self::new("Collection Workouts", "Browse workouts by collection")
            }
            Category::Collection(Some(slug)) => Self::new(
                format!("{} Collection", slug.replace('-', " ")),
                format!("{count} workouts in this collection"),
            ),
        }
    }

    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
