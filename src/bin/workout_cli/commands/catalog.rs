// ABOUTME: Catalog commands for workout-cli
// ABOUTME: Sport listing, sport overview, and single workout detail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use workout_catalog::errors::AppResult;
use workout_catalog::overview::{landing, SportOverview};

use super::Context;
use crate::helpers::display::{print_json, print_landing, print_overview, print_workout};

type Result<T> = AppResult<T>;

/// List every sport with its workout count
pub fn sports(context: &Context) -> Result<()> {
    let listings = landing(&context.catalog.index());
    if context.json {
        return print_json(&listings);
    }
    print_landing(&listings);
    Ok(())
}

/// Print the landing view of one sport
pub fn overview(context: &Context, sport: &str) -> Result<()> {
    let sport = context.config.sport_fallback.select(sport)?;
    let index = context.catalog.index();
    let mut rng = ChaCha8Rng::seed_from_u64(context.config.seed());
    let overview = SportOverview::build(&index, sport, context.config.carousel_size, &mut rng);
    if context.json {
        return print_json(&overview);
    }
    print_overview(&overview);
    Ok(())
}

/// Print one workout
pub fn show(context: &Context, id: &str) -> Result<()> {
    let workout = context.catalog.index().workout_by_id(id)?;
    if context.json {
        return print_json(workout);
    }
    print_workout(workout);
    Ok(())
}
