// ABOUTME: Environment configuration for catalog loading and browsing defaults
// ABOUTME: Reads CATALOG_* variables with typed parsing and ConfigInvalid errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the workout catalog

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::constants::browsing::DEFAULT_CAROUSEL_SIZE;
use crate::constants::fixtures::{DEFAULT_WORKOUTS_PER_SPORT, FALLBACK_SEED};
use crate::errors::{AppError, AppResult};
use crate::fixtures::FixtureConfig;
use crate::models::{SportFallback, SportType};

/// Environment variable names
pub mod keys {
    /// Generator and resolver seed
    pub const SEED: &str = "CATALOG_SEED";
    /// Generated workouts per sport
    pub const WORKOUTS_PER_SPORT: &str = "CATALOG_WORKOUTS_PER_SPORT";
    /// Fixture file to load instead of generating
    pub const FIXTURE_PATH: &str = "CATALOG_FIXTURE_PATH";
    /// `strict` or the slug of the sport to substitute for unknown slugs
    pub const SPORT_FALLBACK: &str = "CATALOG_SPORT_FALLBACK";
    /// Workouts per overview shelf
    pub const CAROUSEL_SIZE: &str = "CATALOG_CAROUSEL_SIZE";
}

/// Catalog runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Seed for the generator and the personalized sampling
    pub seed: Option<u64>,
    /// Generated workouts per sport
    pub workouts_per_sport: usize,
    /// Fixture file; when set the generator is not used
    pub fixture_path: Option<PathBuf>,
    /// Policy for unknown sport slugs
    pub sport_fallback: SportFallback,
    /// Workouts per overview shelf
    pub carousel_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: None,
            workouts_per_sport: DEFAULT_WORKOUTS_PER_SPORT,
            fixture_path: None,
            sport_fallback: SportFallback::Strict,
            carousel_size: DEFAULT_CAROUSEL_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set but cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            seed: env_var(keys::SEED).map(|raw| parse_value(keys::SEED, &raw)).transpose()?,
            workouts_per_sport: parse_env_or(keys::WORKOUTS_PER_SPORT, defaults.workouts_per_sport)?,
            fixture_path: env_var(keys::FIXTURE_PATH).map(PathBuf::from),
            sport_fallback: env_var(keys::SPORT_FALLBACK)
                .map(|raw| parse_sport_fallback(&raw))
                .transpose()?
                .unwrap_or_default(),
            carousel_size: parse_env_or(keys::CAROUSEL_SIZE, defaults.carousel_size)?,
        };
        if config.workouts_per_sport == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                keys::WORKOUTS_PER_SPORT
            )));
        }
        if config.carousel_size == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                keys::CAROUSEL_SIZE
            )));
        }
        Ok(config)
    }

    /// Configured seed, or the fixed fallback seed
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(FALLBACK_SEED)
    }

    /// Generator settings derived from this configuration
    #[must_use]
    pub fn fixture_config(&self) -> FixtureConfig {
        FixtureConfig {
            workouts_per_sport: self.workouts_per_sport,
            ..FixtureConfig::with_seed(self.seed())
        }
    }

    /// Log the effective configuration
    pub fn log_summary(&self) {
        info!(
            seed = self.seed(),
            workouts_per_sport = self.workouts_per_sport,
            fixture = ?self.fixture_path,
            sport_fallback = ?self.sport_fallback,
            carousel_size = self.carousel_size,
            "Catalog configuration loaded"
        );
    }
}

/// Seed from the system clock, falling back to a fixed value
#[must_use]
pub fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(FALLBACK_SEED, |elapsed| elapsed.as_secs())
}

/// Parse a fallback policy: `strict`, or a sport slug / name to substitute
///
/// # Errors
///
/// Returns `ConfigInvalid` for anything else.
pub fn parse_sport_fallback(raw: &str) -> AppResult<SportFallback> {
    if raw.trim().eq_ignore_ascii_case("strict") {
        return Ok(SportFallback::Strict);
    }
    raw.parse::<SportType>()
        .map(SportFallback::FallbackTo)
        .map_err(|e| {
            AppError::config(format!(
                "{} must be 'strict' or a sport slug, got '{raw}'",
                keys::SPORT_FALLBACK
            ))
            .with_source(e)
        })
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    env_var(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::config(format!("{key} has an invalid value '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sport_fallback() {
        assert_eq!(parse_sport_fallback("strict").ok(), Some(SportFallback::Strict));
        assert_eq!(
            parse_sport_fallback("cycling").ok(),
            Some(SportFallback::FallbackTo(SportType::Cycling))
        );
        assert!(parse_sport_fallback("curling").is_err());
    }

    #[test]
    fn test_fixture_config_carries_seed_and_count() {
        let config = CatalogConfig {
            seed: Some(99),
            workouts_per_sport: 12,
            ..CatalogConfig::default()
        };
        let fixture = config.fixture_config();
        assert_eq!(fixture.seed, 99);
        assert_eq!(fixture.workouts_per_sport, 12);
    }
}
