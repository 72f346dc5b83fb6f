// ABOUTME: Selector-specific error types for browsing path segments and filter values
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Selector Error Types
//!
//! Raised when free-form input (URL segments, CLI arguments, filter values)
//! cannot be mapped onto one of the closed enumerations of the catalog.

use std::error::Error;
use std::fmt;

use super::{AppError, ErrorCode};

/// Errors raised while mapping free-form input onto catalog selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Sport slug or name is not one of the supported sports
    UnknownSport {
        /// Input as received
        input: String,
    },
    /// Category segment is not one of the browsing categories
    UnknownCategory {
        /// Input as received
        input: String,
    },
    /// Duration bucket name or label is not recognized
    UnknownDurationBucket {
        /// Input as received
        input: String,
    },
    /// Difficulty is not Beginner, Intermediate, or Advanced
    UnknownDifficulty {
        /// Input as received
        input: String,
    },
    /// Secondary category filter value is not recognized
    UnknownSecondaryCategory {
        /// Input as received
        input: String,
    },
}

impl SelectorError {
    /// Create an "unknown sport" error
    #[must_use]
    pub fn unknown_sport(input: impl Into<String>) -> Self {
        Self::UnknownSport {
            input: input.into(),
        }
    }

    /// Create an "unknown category" error
    #[must_use]
    pub fn unknown_category(input: impl Into<String>) -> Self {
        Self::UnknownCategory {
            input: input.into(),
        }
    }

    /// Create an "unknown duration bucket" error
    #[must_use]
    pub fn unknown_duration_bucket(input: impl Into<String>) -> Self {
        Self::UnknownDurationBucket {
            input: input.into(),
        }
    }

    /// Create an "unknown difficulty" error
    #[must_use]
    pub fn unknown_difficulty(input: impl Into<String>) -> Self {
        Self::UnknownDifficulty {
            input: input.into(),
        }
    }

    /// Create an "unknown secondary category" error
    #[must_use]
    pub fn unknown_secondary_category(input: impl Into<String>) -> Self {
        Self::UnknownSecondaryCategory {
            input: input.into(),
        }
    }

    /// Get the rejected input
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::UnknownSport { input }
            | Self::UnknownCategory { input }
            | Self::UnknownDurationBucket { input }
            | Self::UnknownDifficulty { input }
            | Self::UnknownSecondaryCategory { input } => input,
        }
    }
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSport { input } => {
                write!(f, "Unknown sport '{input}'")
            }
            Self::UnknownCategory { input } => {
                write!(
                    f,
                    "Unknown category '{input}' (expected all, new, personalized, popular, duration, or collection)"
                )
            }
            Self::UnknownDurationBucket { input } => {
                write!(f, "Unknown duration bucket '{input}'")
            }
            Self::UnknownDifficulty { input } => {
                write!(
                    f,
                    "Unknown difficulty '{input}' (expected Beginner, Intermediate, or Advanced)"
                )
            }
            Self::UnknownSecondaryCategory { input } => {
                write!(
                    f,
                    "Unknown category filter '{input}' (expected All, New Releases, or Popular)"
                )
            }
        }
    }
}

impl Error for SelectorError {}

impl From<SelectorError> for AppError {
    fn from(error: SelectorError) -> Self {
        Self::new(ErrorCode::InvalidInput, error.to_string()).with_source(error)
    }
}
