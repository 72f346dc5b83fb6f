// ABOUTME: JSON fixture file format for persisting a generated catalog
// ABOUTME: Envelope with generation timestamp and seed around the workout list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Catalog;
use crate::errors::AppResult;
use crate::models::Workout;

/// On-disk representation of a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// When the snapshot was produced
    pub generated_at: DateTime<Utc>,
    /// Generator seed, absent for hand-written fixtures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Workouts in catalog order
    pub workouts: Vec<Workout>,
}

impl CatalogSnapshot {
    /// Capture a catalog, stamping the current time
    #[must_use]
    pub fn capture(catalog: &Catalog, seed: Option<u64>) -> Self {
        Self {
            generated_at: Utc::now(),
            seed,
            workouts: catalog.workouts().to_vec(),
        }
    }

    /// Parse a snapshot from JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` when the JSON is malformed.
    pub fn from_json(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure, `SerializationError` on malformed JSON.
    pub fn read(path: &Path) -> AppResult<Self> {
        debug!(path = %path.display(), "Reading catalog snapshot");
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write the snapshot, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    pub fn write(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        debug!(path = %path.display(), workouts = self.workouts.len(), "Wrote catalog snapshot");
        Ok(())
    }

    /// Validate the records and build a catalog
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`Catalog::new`].
    pub fn into_catalog(self) -> AppResult<Catalog> {
        Catalog::new(self.workouts)
    }
}
