// ABOUTME: Output formatting helpers for workout-cli
// ABOUTME: Consistent text layout for sports, overviews, category pages, and workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use workout_catalog::errors::AppResult;
use workout_catalog::models::Workout;
use workout_catalog::overview::{BrowseCard, SportListing, SportOverview};
use workout_catalog::resolver::ResolvedPage;

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary of a workout
fn workout_line(workout: &Workout) -> String {
    let mut flags = String::new();
    if workout.is_new_release {
        flags.push_str(" [new]");
    }
    if workout.is_popular {
        flags.push_str(" [popular]");
    }
    format!(
        "{:<22} {:>4}m  {:<12}  {}{flags}",
        workout.id,
        workout.duration,
        workout.difficulty.as_str(),
        workout.title
    )
}

/// Sport picker
pub fn print_landing(listings: &[SportListing]) {
    println!("\nSports");
    println!("{}", "=".repeat(60));
    for listing in listings {
        println!(
            "{:<20} {:>4} workouts   {}",
            listing.slug,
            listing.workout_count,
            listing.sport.display_name()
        );
        println!("    {}", listing.description);
    }
}

fn print_cards(title: &str, cards: &[BrowseCard]) {
    println!("\n{title}");
    println!("{}", "-".repeat(60));
    for card in cards {
        println!("  {:<24} {:<16} {}", card.title, card.description, card.link);
    }
}

/// Sport landing view
pub fn print_overview(overview: &SportOverview<'_>) {
    println!("\n{}", overview.sport);
    println!("{}", "=".repeat(60));
    println!("{} workouts available", overview.workout_count);

    for shelf in &overview.shelves {
        println!("\n{} ({})", shelf.title, shelf.link);
        if let Some(description) = shelf.description {
            println!("  {description}");
        }
        println!("{}", "-".repeat(60));
        if shelf.workouts.is_empty() {
            println!("  (none)");
        }
        for workout in &shelf.workouts {
            println!("  {}", workout_line(workout));
        }
    }

    print_cards("Browse by Duration", &overview.duration_cards);
    print_cards("Browse by Collection", &overview.collection_cards);
}

/// Resolved category page
pub fn print_page(page: &ResolvedPage<'_>) {
    println!("\n{}", page.heading.title);
    println!("{}", "=".repeat(60));
    println!("{}\n", page.heading.description);
    if page.workouts.is_empty() {
        println!("No workouts match the selected filters.");
        return;
    }
    for workout in &page.workouts {
        println!("  {}", workout_line(workout));
    }
}

/// Workout detail
pub fn print_workout(workout: &Workout) {
    println!("\n{}", workout.title);
    println!("{}", "=".repeat(60));
    println!("   Id: {}", workout.id);
    println!("   Sport: {}", workout.sport_type);
    println!("   Duration: {} minutes", workout.duration);
    println!("   Difficulty: {}", workout.difficulty);
    println!(
        "   Collection: {}",
        workout.collection.as_deref().unwrap_or("-")
    );
    let tags: Vec<&str> = workout.tags.iter().map(String::as_str).collect();
    println!("   Tags: {}", tags.join(", "));
    println!("   New release: {}", if workout.is_new_release { "yes" } else { "no" });
    println!("   Popular: {}", if workout.is_popular { "yes" } else { "no" });
    if let Some(thumbnail) = &workout.thumbnail {
        println!("   Thumbnail: {thumbnail}");
    }
    println!("\n{}", workout.description);
}
