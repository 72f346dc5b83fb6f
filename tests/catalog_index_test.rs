// ABOUTME: Integration tests for the catalog and its per-sport index
// ABOUTME: Validates sport partitioning, derived sets, groupings, lookups, and record validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use common::{catalog_of, cycling, generated_catalog, ids, WorkoutBuilder};
use workout_catalog::catalog::Catalog;
use workout_catalog::errors::ErrorCode;
use workout_catalog::models::{Difficulty, DurationBucket, SportType};

#[test]
fn test_every_workout_belongs_to_exactly_one_sport() {
    let catalog = generated_catalog();
    let index = catalog.index();

    let mut seen = HashSet::new();
    for sport in SportType::ALL {
        let workouts = index.workouts_for_sport(sport);
        assert!(workouts.iter().all(|w| w.sport_type == sport));
        for workout in workouts {
            assert!(seen.insert(workout.id.clone()), "{} seen twice", workout.id);
        }
    }
    assert_eq!(seen.len(), catalog.len());
}

#[test]
fn test_workouts_for_sport_preserves_source_order() {
    let catalog = catalog_of(vec![
        cycling("a", 20).build(),
        WorkoutBuilder::new("b", SportType::Yoga, 20).build(),
        cycling("c", 20).build(),
    ]);
    let workouts = catalog.index().workouts_for_sport(SportType::Cycling);
    assert_eq!(ids(&workouts), ["a", "c"]);
}

#[test]
fn test_tags_for_sport_come_from_that_sport() {
    let catalog = generated_catalog();
    let index = catalog.index();
    for sport in SportType::ALL {
        let workouts = index.workouts_for_sport(sport);
        let tags = index.tags_for_sport(sport);
        assert!(!tags.is_empty());
        for tag in &tags {
            assert!(
                workouts.iter().any(|w| w.has_tag(tag)),
                "{tag} not on any {sport} workout"
            );
        }
    }
}

#[test]
fn test_collections_and_difficulties_for_sport() {
    let catalog = catalog_of(vec![
        cycling("a", 20).collection("Pro Rides").build(),
        cycling("b", 20)
            .collection("Pro Rides")
            .difficulty(Difficulty::Advanced)
            .build(),
        cycling("c", 20).build(),
        WorkoutBuilder::new("d", SportType::Yoga, 20)
            .collection("Power Yoga")
            .build(),
    ]);
    let index = catalog.index();

    let collections = index.collections_for_sport(SportType::Cycling);
    assert_eq!(collections.into_iter().collect::<Vec<_>>(), ["Pro Rides"]);

    let difficulties = index.difficulties_for_sport(SportType::Cycling);
    assert_eq!(
        difficulties.into_iter().collect::<Vec<_>>(),
        [Difficulty::Beginner, Difficulty::Advanced]
    );
}

#[test]
fn test_duration_groups_share_boundaries() {
    let catalog = catalog_of(vec![
        cycling("fifteen", 15).build(),
        cycling("thirty", 30).build(),
        cycling("sixty", 60).build(),
        cycling("sixty-one", 61).build(),
    ]);
    let groups = catalog.index().duration_groups_for_sport(SportType::Cycling);
    assert_eq!(groups.len(), DurationBucket::ALL.len());

    let by_name = |name: &str| {
        let group = groups.iter().find(|g| g.name() == name).unwrap();
        ids(&group.workouts)
    };
    assert_eq!(by_name("short"), ["fifteen"]);
    assert_eq!(by_name("short-medium"), ["fifteen", "thirty"]);
    assert_eq!(by_name("medium"), ["thirty"]);
    assert_eq!(by_name("long"), ["sixty"]);
    assert_eq!(by_name("extended"), ["sixty-one"]);
}

#[test]
fn test_collection_groups_in_first_seen_order() {
    let catalog = catalog_of(vec![
        cycling("a", 20).collection("A Week With").build(),
        cycling("b", 20).collection("From Sufferfest").build(),
        cycling("c", 20).collection("A Week With").build(),
    ]);
    let groups = catalog.index().collection_groups_for_sport(SportType::Cycling);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].slug, "a-week-with");
    assert_eq!(groups[0].name, "A Week With");
    assert_eq!(ids(&groups[0].workouts), ["a", "c"]);
    assert_eq!(groups[1].slug, "from-sufferfest");
    assert_eq!(groups[1].len(), 1);
}

#[test]
fn test_workout_by_id() {
    let catalog = generated_catalog();
    let index = catalog.index();

    let workout = index.workout_by_id("strength-training-3").unwrap();
    assert_eq!(workout.sport_type, SportType::StrengthTraining);

    let error = index.workout_by_id("curling-1").unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_sport_summaries_cover_all_sports() {
    let catalog = generated_catalog();
    let summaries = catalog.index().sport_summaries();
    assert_eq!(summaries.len(), SportType::ALL.len());
    assert!(summaries.iter().all(|s| s.workout_count == 100));
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let error = Catalog::new(vec![cycling("dup", 20).build(), cycling("dup", 30).build()])
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
}

#[test]
fn test_catalog_rejects_zero_duration() {
    let error = Catalog::new(vec![cycling("zero", 0).build()]).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}
