// ABOUTME: Difficulty levels for catalog workouts
// ABOUTME: Closed enumeration with explicit parsing of filter input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SelectorError;

/// Difficulty level of a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// Suitable for beginners with no prior experience
    Beginner,
    /// Requires some practice
    Intermediate,
    /// For experienced athletes
    Advanced,
}

impl Difficulty {
    /// All difficulty levels, easiest first
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Display name, as stored in fixtures
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse a difficulty, case-insensitively; `None` for anything else
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| SelectorError::unknown_difficulty(s))
    }
}
