// ABOUTME: Sport type enumeration for catalog workouts
// ABOUTME: Owns the single sport <-> slug table plus the explicit fallback policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::SelectorError;

/// Enumeration of the sports the catalog is organized by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SportType {
    /// Road, mountain, and indoor cycling
    Cycling,
    /// Trail, road, and track running
    Running,
    /// Pool and open water swimming
    Swimming,
    /// Yoga flows
    Yoga,
    /// Weight training and bodyweight exercises
    #[serde(rename = "Strength Training")]
    StrengthTraining,
    /// Meditation and mindfulness practices
    #[serde(rename = "Mental Training")]
    MentalTraining,
}

/// Slug table, indexed by enum discriminant.
///
/// This is the only place where sports are mapped to URL segments.
const SPORT_SLUGS: [(SportType, &str); 6] = [
    (SportType::Cycling, "cycling"),
    (SportType::Running, "running"),
    (SportType::Swimming, "swimming"),
    (SportType::Yoga, "yoga"),
    (SportType::StrengthTraining, "strength-training"),
    (SportType::MentalTraining, "mental-training"),
];

impl SportType {
    /// All sports in landing-page order
    pub const ALL: [Self; 6] = [
        Self::Cycling,
        Self::Running,
        Self::Swimming,
        Self::Yoga,
        Self::StrengthTraining,
        Self::MentalTraining,
    ];

    /// URL slug for this sport (`strength-training`)
    #[must_use]
    pub const fn slug(self) -> &'static str {
        SPORT_SLUGS[self as usize].1
    }

    /// Map a slug back onto a sport; `None` for anything not in the table
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim();
        SPORT_SLUGS
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(slug))
            .map(|(sport, _)| *sport)
    }

    /// Human-readable name, as stored in fixtures (`Strength Training`)
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cycling => "Cycling",
            Self::Running => "Running",
            Self::Swimming => "Swimming",
            Self::Yoga => "Yoga",
            Self::StrengthTraining => "Strength Training",
            Self::MentalTraining => "Mental Training",
        }
    }

    /// One-line description shown on the landing list
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Cycling => "Road, mountain, and indoor cycling workouts",
            Self::Running => "Trail, road, and track running sessions",
            Self::Swimming => "Pool and open water swimming workouts",
            Self::Yoga => "Vinyasa, Hatha, and restorative yoga flows",
            Self::StrengthTraining => "Weight training and bodyweight exercises",
            Self::MentalTraining => "Meditation and mindfulness practices",
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SportType {
    type Err = SelectorError;

    /// Accepts either the slug or the display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|sport| sport.display_name().eq_ignore_ascii_case(s.trim()))
            })
            .ok_or_else(|| SelectorError::unknown_sport(s))
    }
}

/// What to do with a sport slug that is not in the table.
///
/// Browsing pages historically rendered Cycling for any unknown slug. That
/// behavior is opt-in here; the default rejects the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SportFallback {
    /// Reject unknown slugs
    #[default]
    Strict,
    /// Substitute the given sport and log a warning
    FallbackTo(SportType),
}

impl SportFallback {
    /// Resolve a free-form sport selector under this policy
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::UnknownSport` under `Strict` when the input is
    /// neither a known slug nor a display name.
    pub fn select(self, input: &str) -> Result<SportType, SelectorError> {
        match (input.parse::<SportType>(), self) {
            (Ok(sport), _) => Ok(sport),
            (Err(error), Self::Strict) => Err(error),
            (Err(_), Self::FallbackTo(sport)) => {
                warn!(
                    input = %input,
                    fallback = %sport,
                    "Unknown sport selector, substituting fallback sport"
                );
                Ok(sport)
            }
        }
    }
}
