// ABOUTME: Workout fixture seeder writing a generated catalog to a JSON file
// ABOUTME: Reproducible for a given seed; logs a per-sport breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout fixture seeder.
//!
//! Usage:
//! ```bash
//! # Write the default catalog (100 workouts per sport)
//! cargo run --bin seed-workouts -- --output data/workouts.json
//!
//! # Reproducible output
//! cargo run --bin seed-workouts -- --output data/workouts.json --seed 42
//!
//! # Smaller catalog
//! cargo run --bin seed-workouts -- --output data/small.json --per-sport 20
//!
//! # Verbose output
//! cargo run --bin seed-workouts -- --output data/workouts.json -v
//! ```

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use workout_catalog::config::{seed_from_clock, CatalogConfig};
use workout_catalog::errors::AppError;
use workout_catalog::fixtures::FixtureGenerator;
use workout_catalog::logging::LoggingConfig;
use workout_catalog::models::SportType;

/// CLI-specific error type for the seed binary
#[derive(Error, Debug)]
enum SeedError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] AppError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("{0}")]
    Validation(String),
}

type SeedResult<T> = Result<T, SeedError>;

#[derive(Parser)]
#[command(
    name = "seed-workouts",
    about = "Workout Catalog Fixture Seeder",
    long_about = "Generate a synthetic workout catalog and write it to a JSON fixture file"
)]
struct SeedArgs {
    /// Fixture file to write
    #[arg(long, short = 'o')]
    output: PathBuf,

    /// Random seed for reproducible data (default: CATALOG_SEED, then the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Workouts generated per sport (default: CATALOG_WORKOUTS_PER_SPORT or 100)
    #[arg(long)]
    per_sport: Option<usize>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> SeedResult<()> {
    let args = SeedArgs::parse();

    let mut logging = LoggingConfig::for_cli(args.verbose);
    if !args.verbose && env::var("RUST_LOG").is_err() {
        "info".clone_into(&mut logging.level);
    }
    logging
        .init()
        .map_err(|e| SeedError::Logging(e.to_string()))?;

    let mut config = CatalogConfig::from_env()?;
    if let Some(per_sport) = args.per_sport {
        if per_sport == 0 {
            return Err(SeedError::Validation(
                "--per-sport must be at least 1".to_owned(),
            ));
        }
        config.workouts_per_sport = per_sport;
    }
    let seed = args.seed.or(config.seed).unwrap_or_else(seed_from_clock);
    config.seed = Some(seed);

    info!("Workout Catalog Fixture Seeder");
    info!("   Output: {}", args.output.display());
    info!("   Workouts per sport: {}", config.workouts_per_sport);
    info!("   Random seed: {}", seed);

    let catalog = FixtureGenerator::new(config.fixture_config()).generate()?;
    catalog.save(&args.output, Some(seed))?;

    let mut breakdown: BTreeMap<SportType, (usize, usize, usize)> = BTreeMap::new();
    for workout in catalog.workouts() {
        let entry = breakdown.entry(workout.sport_type).or_default();
        entry.0 += 1;
        entry.1 += usize::from(workout.is_new_release);
        entry.2 += usize::from(workout.is_popular);
    }

    info!("Created {} workouts", catalog.len());
    info!("Workout breakdown:");
    for (sport, (total, new_releases, popular)) in &breakdown {
        info!(
            "   {}: {} ({} new, {} popular)",
            sport, total, new_releases, popular
        );
    }

    Ok(())
}
