// ABOUTME: Core data models and types for the workout catalog
// ABOUTME: Re-exports Workout, SportType, Difficulty, and DurationBucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The catalog holds a single record type, `Workout`, whose categorical fields
//! are closed enumerations. Free-form input is mapped onto them at the edges
//! (`SportType::from_slug`, `Difficulty::parse`, `DurationBucket::parse`).
//!
//! ## Core Models
//!
//! - `Workout`: An immutable catalog record
//! - `SportType`: The six supported sports, with the one slug table
//! - `Difficulty`: Beginner / Intermediate / Advanced
//! - `DurationBucket`: The five duration ranges used for browsing and filtering

mod difficulty;
mod duration;
mod sport;
mod workout;

pub use difficulty::Difficulty;
pub use duration::DurationBucket;
pub use sport::{SportFallback, SportType};
pub use workout::{slugify, Workout};
