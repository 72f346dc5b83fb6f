// ABOUTME: Unit tests for category page headings
// ABOUTME: Validates titles and descriptions for every category and sub-selector case
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_catalog::models::{DurationBucket, SportType};
use workout_catalog::resolver::{Category, CategoryHeading};

fn heading(category: &Category, count: usize) -> (String, String) {
    let heading = CategoryHeading::for_category(category, count, SportType::StrengthTraining);
    (heading.title, heading.description)
}

#[test]
fn test_all_heading_uses_sport_name() {
    let (title, description) = heading(&Category::All, 100);
    assert_eq!(title, "All Strength Training Workouts");
    assert_eq!(description, "100 strength training workouts available");
}

#[test]
fn test_fixed_headings() {
    assert_eq!(
        heading(&Category::New, 20),
        (
            "New Releases".to_owned(),
            "Latest workouts and fresh content".to_owned()
        )
    );
    assert_eq!(
        heading(&Category::Personalized, 25),
        (
            "Tailored to You".to_owned(),
            "Workouts selected just for you".to_owned()
        )
    );
    assert_eq!(
        heading(&Category::Popular, 3),
        (
            "Popular Workouts".to_owned(),
            "Most viewed and trending workouts".to_owned()
        )
    );
}

#[test]
fn test_duration_headings() {
    let titles: Vec<String> = DurationBucket::ALL
        .into_iter()
        .map(|bucket| heading(&Category::duration(bucket), 4).0)
        .collect();
    assert_eq!(
        titles,
        [
            "15m Workouts",
            "15-30m Workouts",
            "30-45m Workouts",
            "45-60m Workouts",
            "60m+ Workouts"
        ]
    );

    let (_, description) = heading(&Category::duration(DurationBucket::Long), 4);
    assert_eq!(description, "4 workouts in this duration range");

    let (title, _) = heading(&Category::parse("duration", Some("forever")).unwrap(), 0);
    assert_eq!(title, "Duration Workouts");

    assert_eq!(
        heading(&Category::Duration(None), 0),
        (
            "Duration Workouts".to_owned(),
            "Browse workouts by duration".to_owned()
        )
    );
}

#[test]
fn test_collection_headings() {
    let (title, description) = heading(&Category::collection("Bodyweight Only"), 7);
    assert_eq!(title, "bodyweight only Collection");
    assert_eq!(description, "7 workouts in this collection");

    assert_eq!(
        heading(&Category::Collection(None), 0),
        (
            "Collection Workouts".to_owned(),
            "Browse workouts by collection".to_owned()
        )
    );
}
