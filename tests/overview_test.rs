// ABOUTME: Integration tests for the sport overview and landing list
// ABOUTME: Validates shelves, carousel truncation, browse cards, and links
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{catalog_of, cycling, cycling_series, generated_catalog, ids, TEST_SEED};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use workout_catalog::models::SportType;
use workout_catalog::overview::{landing, ShelfKind, SportOverview};

#[test]
fn test_recently_played_is_last_ten_reversed() {
    let catalog = catalog_of(cycling_series(15));
    let index = catalog.index();
    let mut rng = ChaCha8Rng::seed_from_u64(TEST_SEED);
    let overview = SportOverview::build(&index, SportType::Cycling, 10, &mut rng);

    let recent = overview.shelf(ShelfKind::RecentlyPlayed).unwrap();
    let expected: Vec<String> = (6..=15).rev().map(|n| format!("c-{n}")).collect();
    assert_eq!(ids(&recent.workouts), expected);
    assert_eq!(recent.link, "/sport/cycling/history");
}

#[test]
fn test_flag_shelves_use_workout_flags() {
    let catalog = generated_catalog();
    let index = catalog.index();
    let mut rng = ChaCha8Rng::seed_from_u64(TEST_SEED);
    let overview = SportOverview::build(&index, SportType::Running, 50, &mut rng);

    let new_releases = overview.shelf(ShelfKind::NewReleases).unwrap();
    assert_eq!(new_releases.workouts.len(), 15);
    assert!(new_releases.workouts.iter().all(|w| w.is_new_release));

    let popular = overview.shelf(ShelfKind::Popular).unwrap();
    assert!(popular.workouts.iter().all(|w| w.is_popular));
}

#[test]
fn test_shelves_truncate_to_carousel_size() {
    let catalog = generated_catalog();
    let index = catalog.index();
    let mut rng = ChaCha8Rng::seed_from_u64(TEST_SEED);
    let overview = SportOverview::build(&index, SportType::Yoga, 4, &mut rng);

    assert_eq!(overview.shelves.len(), 4);
    assert!(overview.shelves.iter().all(|shelf| shelf.workouts.len() <= 4));
    assert_eq!(overview.shelf(ShelfKind::ForYou).unwrap().workouts.len(), 4);
    assert_eq!(overview.workout_count, 100);
}

#[test]
fn test_for_you_does_not_reorder_catalog() {
    let catalog = catalog_of(cycling_series(12));
    let before = ids(&catalog.index().workouts_for_sport(SportType::Cycling));
    let mut rng = ChaCha8Rng::seed_from_u64(TEST_SEED);
    let _ = SportOverview::build(&catalog.index(), SportType::Cycling, 12, &mut rng);
    assert_eq!(ids(&catalog.index().workouts_for_sport(SportType::Cycling)), before);
}

#[test]
fn test_browse_cards() {
    let catalog = catalog_of(vec![
        cycling("a", 15).collection("Pro Rides").build(),
        cycling("b", 61).collection("NoVid").build(),
        cycling("c", 60).collection("Pro Rides").build(),
    ]);
    let mut rng = ChaCha8Rng::seed_from_u64(TEST_SEED);
    let overview = SportOverview::build(&catalog.index(), SportType::Cycling, 10, &mut rng);

    let titles: Vec<&str> = overview.duration_cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["15m", "15-30m", "30-45m", "45-60m", "More than 60m"]);
    let extended = &overview.duration_cards[4];
    assert_eq!(extended.workout_count, 1);
    assert_eq!(extended.description, "1 workouts");
    assert_eq!(extended.link, "/sport/cycling/duration/extended");

    assert_eq!(overview.collection_cards.len(), 2);
    let pro = &overview.collection_cards[0];
    assert_eq!(pro.title, "Pro Rides");
    assert_eq!(pro.workout_count, 2);
    assert_eq!(pro.link, "/sport/cycling/collection/pro-rides");
}

#[test]
fn test_landing_lists_every_sport() {
    let catalog = generated_catalog();
    let listings = landing(&catalog.index());
    let slugs: Vec<&str> = listings.iter().map(|l| l.slug).collect();
    assert_eq!(
        slugs,
        [
            "cycling",
            "running",
            "swimming",
            "yoga",
            "strength-training",
            "mental-training"
        ]
    );
    assert!(listings.iter().all(|l| !l.description.is_empty()));
    assert_eq!(listings[4].link, "/sport/strength-training");
}
