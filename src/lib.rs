// ABOUTME: Main library entry point for the workout catalog
// ABOUTME: Sport browsing, curated groupings, and filter resolution over an in-memory catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Catalog
//!
//! Browsing logic for a catalog of fitness workouts: pick a sport, list curated
//! groupings (new, popular, personalized, by duration, by collection), narrow
//! them with user filters, and look up individual workouts.
//!
//! Everything is a pure computation over an immutable, in-memory list. The
//! list is produced once at startup, either by the seeded fixture generator or
//! from a fixture file, and is only ever borrowed afterwards.
//!
//! ## Architecture
//!
//! - **Catalog**: the validated workout list and its per-sport index
//! - **Resolver**: category selection, user filters, and page headings
//! - **Overview**: the shelves and cards of a sport's landing page
//! - **Fixtures**: deterministic synthetic data generation
//! - **Config** / **Logging**: environment-driven setup for the binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use workout_catalog::fixtures::{FixtureConfig, FixtureGenerator};
//! use workout_catalog::models::SportType;
//! use workout_catalog::resolver::{Category, CategoryResolver, UserFilters};
//!
//! let catalog = FixtureGenerator::new(FixtureConfig::with_seed(7)).generate()?;
//! let yoga = catalog.index().workouts_for_sport(SportType::Yoga);
//!
//! let mut resolver = CategoryResolver::new(7);
//! let category = Category::parse("duration", Some("long"))?;
//! let workouts = resolver.resolve(&yoga, &category, &UserFilters::default());
//! assert!(workouts.iter().all(|w| (45..=60).contains(&w.duration)));
//! # Ok::<(), workout_catalog::errors::AppError>(())
//! ```

/// Validated workout list and per-sport index
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Catalog constants re-exported from the core crate
pub mod constants;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Deterministic synthetic workout generation
pub mod fixtures;

/// Logging configuration and subscriber setup
pub mod logging;

/// Core data models re-exported from the core crate
pub mod models;

/// Sport landing page shelves and browse cards
pub mod overview;

/// Category resolution, user filters, and headings
pub mod resolver;
