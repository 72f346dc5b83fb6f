// ABOUTME: Workout CLI - command-line front-end for browsing the workout catalog
// ABOUTME: Lists sports, shows sport overviews, resolves categories with filters, and shows workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List sports with workout counts
//! workout-cli sports
//!
//! # Shelves and browse cards for a sport
//! workout-cli overview yoga
//!
//! # Resolve a category with filters
//! workout-cli browse cycling duration long --tag Endurance --difficulty advanced
//!
//! # Show a single workout as JSON
//! workout-cli --json show running-12
//!
//! # Browse a fixture file instead of the generated catalog
//! workout-cli --fixture data/workouts.json browse swimming popular
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use workout_catalog::catalog::Catalog;
use workout_catalog::config::CatalogConfig;
use workout_catalog::logging::LoggingConfig;

use commands::browse::BrowseArgs;
use commands::Context;

#[derive(Parser)]
#[command(
    name = "workout-cli",
    about = "Workout catalog browser",
    long_about = "Browse the workout catalog by sport, curated category, and user filters."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Fixture file to browse instead of the generated catalog
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Seed for catalog generation and personalized sampling
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List sports with workout counts
    Sports,

    /// Show shelves and browse cards for a sport
    Overview {
        /// Sport slug (e.g. `strength-training`)
        sport: String,
    },

    /// Resolve a category and filters into a workout list
    Browse(BrowseArgs),

    /// Show a single workout
    Show {
        /// Workout id (e.g. `yoga-7`)
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = CatalogConfig::from_env()?;
    if cli.fixture.is_some() {
        config.fixture_path = cli.fixture;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.log_summary();

    let catalog = Catalog::load_or_generate(&config)?;
    debug!(workouts = catalog.len(), "Catalog loaded for CLI");

    let context = Context {
        catalog,
        config,
        json: cli.json,
    };

    match cli.command {
        Command::Sports => commands::catalog::sports(&context)?,
        Command::Overview { sport } => commands::catalog::overview(&context, &sport)?,
        Command::Browse(args) => commands::browse::browse(&context, &args)?,
        Command::Show { id } => commands::catalog::show(&context, &id)?,
    }

    Ok(())
}
