// ABOUTME: Duration buckets used to browse and filter workouts by length
// ABOUTME: Adjacent buckets share their boundary minute; both endpoints are inclusive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::durations::{
    EXTENDED_MIN_MINUTES, LONG_MAX_MINUTES, MEDIUM_MAX_MINUTES, SHORT_MEDIUM_MAX_MINUTES,
    SHORT_MINUTES,
};
use crate::errors::SelectorError;

/// Named duration range.
///
/// 15, 30, 45 and 60 minutes each fall into two adjacent buckets. Extended
/// is strictly longer than an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationBucket {
    /// Exactly 15 minutes
    Short,
    /// 15 to 30 minutes
    ShortMedium,
    /// 30 to 45 minutes
    Medium,
    /// 45 to 60 minutes
    Long,
    /// More than 60 minutes
    Extended,
}

impl DurationBucket {
    /// All buckets, shortest first
    pub const ALL: [Self; 5] = [
        Self::Short,
        Self::ShortMedium,
        Self::Medium,
        Self::Long,
        Self::Extended,
    ];

    /// Path segment name (`short-medium`)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::ShortMedium => "short-medium",
            Self::Medium => "medium",
            Self::Long => "long",
            Self::Extended => "extended",
        }
    }

    /// Filter label (`15-30m`)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "15m",
            Self::ShortMedium => "15-30m",
            Self::Medium => "30-45m",
            Self::Long => "45-60m",
            Self::Extended => "More than 60m",
        }
    }

    /// Page title for a duration listing
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Short => "15m Workouts",
            Self::ShortMedium => "15-30m Workouts",
            Self::Medium => "30-45m Workouts",
            Self::Long => "45-60m Workouts",
            Self::Extended => "60m+ Workouts",
        }
    }

    /// Inclusive lower bound in minutes
    #[must_use]
    pub const fn min_minutes(self) -> u32 {
        match self {
            Self::Short | Self::ShortMedium => SHORT_MINUTES,
            Self::Medium => SHORT_MEDIUM_MAX_MINUTES,
            Self::Long => MEDIUM_MAX_MINUTES,
            Self::Extended => EXTENDED_MIN_MINUTES,
        }
    }

    /// Inclusive upper bound in minutes; open-ended for `Extended`
    #[must_use]
    pub const fn max_minutes(self) -> Option<u32> {
        match self {
            Self::Short => Some(SHORT_MINUTES),
            Self::ShortMedium => Some(SHORT_MEDIUM_MAX_MINUTES),
            Self::Medium => Some(MEDIUM_MAX_MINUTES),
            Self::Long => Some(LONG_MAX_MINUTES),
            Self::Extended => None,
        }
    }

    /// Whether a duration in minutes falls into this bucket
    #[must_use]
    pub fn contains(self, minutes: u32) -> bool {
        minutes >= self.min_minutes() && self.max_minutes().map_or(true, |max| minutes <= max)
    }

    /// Look up a bucket by path segment name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.name() == name)
    }

    /// Look up a bucket by filter label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.label() == label)
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DurationBucket {
    type Err = SelectorError;

    /// Accepts a path segment name or a filter label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_name(trimmed)
            .or_else(|| Self::from_label(trimmed))
            .ok_or_else(|| SelectorError::unknown_duration_bucket(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_both_neighbours() {
        assert!(DurationBucket::Short.contains(15));
        assert!(DurationBucket::ShortMedium.contains(15));
        assert!(DurationBucket::ShortMedium.contains(30));
        assert!(DurationBucket::Medium.contains(30));
        assert!(DurationBucket::Medium.contains(45));
        assert!(DurationBucket::Long.contains(45));
        assert!(DurationBucket::Long.contains(60));
        assert!(!DurationBucket::Extended.contains(60));
        assert!(DurationBucket::Extended.contains(61));
    }

    #[test]
    fn test_short_is_exactly_fifteen() {
        assert!(!DurationBucket::Short.contains(14));
        assert!(!DurationBucket::Short.contains(16));
    }

    #[test]
    fn test_parse_name_or_label() {
        assert_eq!("long".parse::<DurationBucket>(), Ok(DurationBucket::Long));
        assert_eq!("More than 60m".parse::<DurationBucket>(), Ok(DurationBucket::Extended));
        assert!("90m".parse::<DurationBucket>().is_err());
    }
}
