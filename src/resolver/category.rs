// ABOUTME: Category selectors parsed from browsing path segments
// ABOUTME: all, new, personalized, popular, duration/{bucket}, collection/{slug}
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SelectorError;
use crate::models::{slugify, DurationBucket, SportType};

/// Curated grouping a browsing request asks for.
///
/// The duration and collection variants keep their sub-selector as raw text:
/// an unrecognised bucket name or collection slug is not an error, it only
/// changes what the resolver returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "selector", rename_all = "lowercase")]
#[non_exhaustive]
pub enum Category {
    /// Every workout of the sport
    #[default]
    All,
    /// Leading workouts in catalog order
    New,
    /// Random sample drawn by the resolver's RNG
    Personalized,
    /// Workouts carrying the popular marker
    Popular,
    /// Workouts within a duration bucket, by bucket name
    Duration(Option<String>),
    /// Workouts of one collection, by collection slug
    Collection(Option<String>),
}

impl Category {
    /// Parse a category path segment and its optional sub-selector
    ///
    /// An empty sub-selector is treated as absent. The sub-selector is ignored
    /// for categories that do not take one.
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::UnknownCategory` for an unrecognised segment.
    pub fn parse(segment: &str, sub: Option<&str>) -> Result<Self, SelectorError> {
        let sub = sub
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        match segment.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "new" => Ok(Self::New),
            "personalized" => Ok(Self::Personalized),
            "popular" => Ok(Self::Popular),
            "duration" => Ok(Self::Duration(sub)),
            "collection" => Ok(Self::Collection(sub)),
            _ => Err(SelectorError::unknown_category(segment)),
        }
    }

    /// Parse a `category[/sub]` path such as `duration/long`
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::UnknownCategory` for an unrecognised segment.
    pub fn from_path(path: &str) -> Result<Self, SelectorError> {
        let trimmed = path.trim().trim_matches('/');
        match trimmed.split_once('/') {
            Some((segment, sub)) => Self::parse(segment, Some(sub)),
            None => Self::parse(trimmed, None),
        }
    }

    /// Duration category for a known bucket
    #[must_use]
    pub fn duration(bucket: DurationBucket) -> Self {
        Self::Duration(Some(bucket.name().to_owned()))
    }

    /// Collection category for a collection name; the name is slugified
    #[must_use]
    pub fn collection(name: &str) -> Self {
        Self::Collection(Some(slugify(name)))
    }

    /// Path segment for this category
    #[must_use]
    pub const fn segment(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::New => "new",
            Self::Personalized => "personalized",
            Self::Popular => "popular",
            Self::Duration(_) => "duration",
            Self::Collection(_) => "collection",
        }
    }

    /// Sub-selector, if the category carries one
    #[must_use]
    pub fn sub_selector(&self) -> Option<&str> {
        match self {
            Self::Duration(sub) | Self::Collection(sub) => sub.as_deref(),
            Self::All | Self::New | Self::Personalized | Self::Popular => None,
        }
    }

    /// Bucket named by a duration sub-selector, if it is recognised
    #[must_use]
    pub fn duration_bucket(&self) -> Option<DurationBucket> {
        match self {
            Self::Duration(Some(name)) => DurationBucket::from_name(name),
            _ => None,
        }
    }

    /// Browsing path for the category under a sport
    #[must_use]
    pub fn path(&self, sport: SportType) -> String {
        match self.sub_selector() {
            Some(sub) => format!("/sport/{}/{}/{sub}", sport.slug(), self.segment()),
            None => format!("/sport/{}/{}", sport.slug(), self.segment()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sub_selector() {
            Some(sub) => write!(f, "{}/{sub}", self.segment()),
            None => f.write_str(self.segment()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_empty_sub_selector() {
        assert_eq!(
            Category::parse("duration", Some("  ")).ok(),
            Some(Category::Duration(None))
        );
        assert_eq!(Category::parse("new", Some("ignored")).ok(), Some(Category::New));
    }

    #[test]
    fn test_unknown_segment_is_rejected() {
        let error = Category::parse("trending", None).err();
        assert_eq!(error, Some(SelectorError::unknown_category("trending")));
    }

    #[test]
    fn test_path_round_trip() {
        let category = Category::collection("Climbing Series");
        assert_eq!(category.to_string(), "collection/climbing-series");
        assert_eq!(Category::from_path("collection/climbing-series").ok(), Some(category));
        assert_eq!(
            Category::duration(DurationBucket::Long).path(SportType::Yoga),
            "/sport/yoga/duration/long"
        );
    }
}
