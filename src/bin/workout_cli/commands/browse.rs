// ABOUTME: Browse command for workout-cli
// ABOUTME: Parses category and filter arguments, resolves them, and prints the page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use clap::Args;
use tracing::info;
use workout_catalog::errors::AppResult;
use workout_catalog::models::{Difficulty, DurationBucket};
use workout_catalog::resolver::{Category, CategoryResolver, SecondaryCategory, UserFilters};

use super::Context;
use crate::helpers::display::{print_json, print_page};

type Result<T> = AppResult<T>;

/// Arguments of `workout-cli browse`
#[derive(Args)]
pub struct BrowseArgs {
    /// Sport slug
    sport: String,

    /// Category: all, new, personalized, popular, duration, collection
    category: String,

    /// Bucket name for `duration`, collection slug for `collection`
    sub: Option<String>,

    /// Duration filter: bucket name or label (`15-30m`)
    #[arg(long)]
    duration: Option<String>,

    /// Secondary category filter: All, New Releases, Popular
    #[arg(long = "category")]
    category_filter: Option<String>,

    /// Tag filter; repeat to match any of several tags
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Difficulty filter
    #[arg(long)]
    difficulty: Option<String>,

    /// Print at most this many workouts
    #[arg(long)]
    limit: Option<usize>,
}

impl BrowseArgs {
    fn filters(&self) -> Result<UserFilters> {
        let mut filters = UserFilters::default();
        if let Some(duration) = &self.duration {
            filters = filters.with_duration(duration.parse::<DurationBucket>()?);
        }
        if let Some(category) = &self.category_filter {
            filters = filters.with_category(category.parse::<SecondaryCategory>()?);
        }
        if let Some(difficulty) = &self.difficulty {
            filters = filters.with_difficulty(difficulty.parse::<Difficulty>()?);
        }
        for tag in &self.tags {
            filters = filters.with_tag(tag.as_str());
        }
        Ok(filters)
    }
}

/// Resolve and print a category page
pub fn browse(context: &Context, args: &BrowseArgs) -> Result<()> {
    let sport = context.config.sport_fallback.select(&args.sport)?;
    let category = Category::parse(&args.category, args.sub.as_deref())?;
    let filters = args.filters()?;

    let workouts = context.catalog.index().workouts_for_sport(sport);
    let mut resolver = CategoryResolver::new(context.config.seed());
    let mut page = resolver.resolve_page(&workouts, sport, &category, &filters);
    info!(
        sport = %sport,
        category = %category,
        results = page.workouts.len(),
        "Browse resolved"
    );

    if let Some(limit) = args.limit {
        page.workouts.truncate(limit);
    }

    if context.json {
        print_json(&page)
    } else {
        print_page(&page);
        Ok(())
    }
}
