// ABOUTME: Validated, immutable workout list shared by every browsing operation
// ABOUTME: Enforces id uniqueness and positive durations, then hands out borrowed views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog
//!
//! The catalog is built once, either by the fixture generator or from a fixture
//! file, and never mutated afterwards. All browsing operations borrow it through
//! [`CatalogIndex`] and produce fresh lists of references.
//!
//! ```text
//! Catalog ──index()──► CatalogIndex ──workouts_for_sport()──► CategoryResolver
//!                           │
//!                           ├── tags / collections / difficulties
//!                           └── duration groups / collection groups
//! ```

mod groups;
mod index;
mod snapshot;

pub use groups::{CollectionGroup, DurationGroup};
pub use index::{CatalogIndex, SportSummary};
pub use snapshot::CatalogSnapshot;

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::config::CatalogConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::fixtures::FixtureGenerator;
use crate::models::Workout;

/// The complete, validated workout list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    workouts: Vec<Workout>,
}

impl Catalog {
    /// Build a catalog, validating record invariants
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` for a duplicate id and `ValueOutOfRange`
    /// for a zero duration.
    pub fn new(workouts: Vec<Workout>) -> AppResult<Self> {
        validate(&workouts)?;
        Ok(Self { workouts })
    }

    /// Load a catalog from a fixture file when configured, otherwise generate one
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file cannot be read or parsed, or if the
    /// generator configuration is invalid.
    pub fn load_or_generate(config: &CatalogConfig) -> AppResult<Self> {
        let catalog = match &config.fixture_path {
            Some(path) => Self::load(path)?,
            None => FixtureGenerator::new(config.fixture_config()).generate()?,
        };
        let source = config
            .fixture_path
            .as_deref()
            .map_or_else(|| "generator".to_owned(), |p| p.display().to_string());
        info!(workouts = catalog.len(), source = %source, "Catalog ready");
        Ok(catalog)
    }

    /// Read a catalog from a fixture file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure, `SerializationError` on malformed
    /// JSON, and validation errors for invalid records.
    pub fn load(path: &Path) -> AppResult<Self> {
        CatalogSnapshot::read(path)?.into_catalog()
    }

    /// Write the catalog to a fixture file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn save(&self, path: &Path, seed: Option<u64>) -> AppResult<()> {
        CatalogSnapshot::capture(self, seed).write(path)
    }

    /// Serialize to the fixture JSON format
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails.
    pub fn to_json(&self, seed: Option<u64>) -> AppResult<String> {
        CatalogSnapshot::capture(self, seed).to_json()
    }

    /// Parse and validate fixture JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` on malformed JSON and validation errors for
    /// invalid records.
    pub fn from_json(content: &str) -> AppResult<Self> {
        CatalogSnapshot::from_json(content)?.into_catalog()
    }

    /// All workouts in source order
    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Number of workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the catalog holds no workouts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Borrowed, per-sport view of the catalog
    #[must_use]
    pub fn index(&self) -> CatalogIndex<'_> {
        CatalogIndex::new(&self.workouts)
    }
}

fn validate(workouts: &[Workout]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(workouts.len());
    for workout in workouts {
        if workout.duration == 0 {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("Workout '{}' has a zero duration", workout.id),
            ));
        }
        if !seen.insert(workout.id.as_str()) {
            return Err(AppError::already_exists(format!("Workout '{}'", workout.id)));
        }
    }
    Ok(())
}
