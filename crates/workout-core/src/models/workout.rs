// ABOUTME: Workout record held by the catalog
// ABOUTME: Immutable content entry with sport, tags, collection, and difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Difficulty, DurationBucket, SportType};
use crate::constants::browsing::POPULAR_MARKER;

/// A single workout in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier (`cycling-12`)
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Length in minutes, always positive
    pub duration: u32,
    /// Sport this workout belongs to
    pub sport_type: SportType,
    /// Tags drawn from the sport's vocabulary
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Collection name, if the workout belongs to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Artwork reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Editorially flagged as popular
    #[serde(default)]
    pub is_popular: bool,
    /// Editorially flagged as a new release
    #[serde(default)]
    pub is_new_release: bool,
}

impl Workout {
    /// Whether the workout carries the exact tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Whether any of the given tags is present
    #[must_use]
    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag))
    }

    /// Slug of the collection name, if any
    #[must_use]
    pub fn collection_slug(&self) -> Option<String> {
        self.collection.as_deref().map(slugify)
    }

    /// Popular marker: a "Popular" tag, or "Popular" anywhere in the collection name
    #[must_use]
    pub fn has_popular_marker(&self) -> bool {
        self.has_tag(POPULAR_MARKER)
            || self
                .collection
                .as_deref()
                .is_some_and(|collection| collection.contains(POPULAR_MARKER))
    }

    /// Whether the duration falls into the bucket
    #[must_use]
    pub fn fits(&self, bucket: DurationBucket) -> bool {
        bucket.contains(self.duration)
    }
}

/// Lowercase and replace each run of whitespace with a single hyphen
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout(tags: &[&str], collection: Option<&str>) -> Workout {
        Workout {
            id: "yoga-1".to_owned(),
            title: "Flexibility Flow 1".to_owned(),
            description: "Mindful movement".to_owned(),
            duration: 30,
            sport_type: SportType::Yoga,
            tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
            collection: collection.map(str::to_owned),
            difficulty: Difficulty::Beginner,
            thumbnail: None,
            is_popular: false,
            is_new_release: false,
        }
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Power Yoga"), "power-yoga");
        assert_eq!(slugify("From  Sufferfest"), "from-sufferfest");
        assert_eq!(slugify("NoVid"), "novid");
    }

    #[test]
    fn test_popular_marker_matches_tag_or_collection_substring() {
        assert!(workout(&["Popular"], None).has_popular_marker());
        assert!(workout(&[], Some("Most Popular Flows")).has_popular_marker());
        assert!(!workout(&["popular"], Some("Power Yoga")).has_popular_marker());
    }

    #[test]
    fn test_collection_slug() {
        assert_eq!(
            workout(&[], Some("Power Yoga")).collection_slug().as_deref(),
            Some("power-yoga")
        );
        assert_eq!(workout(&[], None).collection_slug(), None);
    }
}
