// ABOUTME: Per-sport landing view with workout shelves and browse cards
// ABOUTME: New Releases, Popular, For You, Recently Played, duration and collection cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sport Overview
//!
//! Assembles what a sport's landing page shows. Shelves are cut to the
//! carousel size; cards carry counts and the browsing path they link to.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::catalog::CatalogIndex;
use crate::constants::browsing::RECENTLY_PLAYED_LIMIT;
use crate::models::{SportType, Workout};
use crate::resolver::Category;

/// Which shelf a list of workouts belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShelfKind {
    /// Workouts flagged as new releases
    NewReleases,
    /// Workouts flagged popular
    Popular,
    /// Shuffled selection
    ForYou,
    /// Last workouts of the sport, newest first
    RecentlyPlayed,
}

impl ShelfKind {
    /// Shelves in display order
    pub const ALL: [Self; 4] = [
        Self::NewReleases,
        Self::Popular,
        Self::ForYou,
        Self::RecentlyPlayed,
    ];

    /// Shelf title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NewReleases => "New Releases",
            Self::Popular => "Popular",
            Self::ForYou => "For you",
            Self::RecentlyPlayed => "Recently Played",
        }
    }

    /// Optional subtitle
    #[must_use]
    pub const fn description(self) -> Option<&'static str> {
        match self {
            Self::ForYou => Some("Work on your strengths and weaknesses"),
            Self::NewReleases | Self::Popular | Self::RecentlyPlayed => None,
        }
    }

    /// "See all" path for the shelf
    #[must_use]
    pub fn link(self, sport: SportType) -> String {
        let segment = match self {
            Self::NewReleases => "new",
            Self::Popular => "popular",
            Self::ForYou => "personalized",
            Self::RecentlyPlayed => "history",
        };
        format!("/sport/{}/{segment}", sport.slug())
    }
}

/// One horizontal shelf of workouts
#[derive(Debug, Clone, Serialize)]
pub struct Shelf<'a> {
    /// Shelf kind
    pub kind: ShelfKind,
    /// Title
    pub title: &'static str,
    /// Subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// "See all" path
    pub link: String,
    /// Workouts, truncated to the carousel size
    pub workouts: Vec<&'a Workout>,
}

/// Navigation card for a duration bucket or collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowseCard {
    /// Bucket label or collection name
    pub title: String,
    /// `"{n} workouts"`
    pub description: String,
    /// Browsing path
    pub link: String,
    /// Number of workouts behind the card
    pub workout_count: usize,
}

impl BrowseCard {
    fn new(title: impl Into<String>, link: String, workout_count: usize) -> Self {
        Self {
            title: title.into(),
            description: format!("{workout_count} workouts"),
            link,
            workout_count,
        }
    }
}

/// Everything the landing page of one sport displays
#[derive(Debug, Clone, Serialize)]
pub struct SportOverview<'a> {
    /// Sport
    pub sport: SportType,
    /// All workouts of the sport
    pub workout_count: usize,
    /// Shelves in display order
    pub shelves: Vec<Shelf<'a>>,
    /// One card per duration bucket
    pub duration_cards: Vec<BrowseCard>,
    /// One card per collection, first-seen order
    pub collection_cards: Vec<BrowseCard>,
}

impl<'a> SportOverview<'a> {
    /// Build the overview; `rng` drives the For You shuffle
    pub fn build<R: Rng + ?Sized>(
        index: &CatalogIndex<'a>,
        sport: SportType,
        carousel_size: usize,
        rng: &mut R,
    ) -> Self {
        let workouts = index.workouts_for_sport(sport);

        let shelves = ShelfKind::ALL
            .into_iter()
            .map(|kind| {
                let mut shelf = shelf_workouts(kind, &workouts, &mut *rng);
                shelf.truncate(carousel_size);
                Shelf {
                    kind,
                    title: kind.title(),
                    description: kind.description(),
                    link: kind.link(sport),
                    workouts: shelf,
                }
            })
            .collect();

        let duration_cards = index
            .duration_groups_for_sport(sport)
            .iter()
            .map(|group| {
                BrowseCard::new(
                    group.label(),
                    Category::duration(group.bucket).path(sport),
                    group.len(),
                )
            })
            .collect();

        let collection_cards = index
            .collection_groups_for_sport(sport)
            .iter()
            .map(|group| {
                BrowseCard::new(
                    group.name.as_str(),
                    Category::Collection(Some(group.slug.clone())).path(sport),
                    group.len(),
                )
            })
            .collect::<Vec<_>>();

        debug!(
            sport = %sport,
            workouts = workouts.len(),
            collections = collection_cards.len(),
            "Built sport overview"
        );

        Self {
            sport,
            workout_count: workouts.len(),
            shelves,
            duration_cards,
            collection_cards,
        }
    }

    /// Shelf of the given kind
    #[must_use]
    pub fn shelf(&self, kind: ShelfKind) -> Option<&Shelf<'a>> {
        self.shelves.iter().find(|shelf| shelf.kind == kind)
    }
}

fn shelf_workouts<'a, R: Rng + ?Sized>(
    kind: ShelfKind,
    workouts: &[&'a Workout],
    rng: &mut R,
) -> Vec<&'a Workout> {
    match kind {
        ShelfKind::NewReleases => workouts
            .iter()
            .copied()
            .filter(|workout| workout.is_new_release)
            .collect(),
        ShelfKind::Popular => workouts
            .iter()
            .copied()
            .filter(|workout| workout.is_popular)
            .collect(),
        ShelfKind::ForYou => {
            let mut shuffled = workouts.to_vec();
            shuffled.shuffle(rng);
            shuffled
        }
        ShelfKind::RecentlyPlayed => workouts
            .iter()
            .rev()
            .take(RECENTLY_PLAYED_LIMIT)
            .copied()
            .collect(),
    }
}

/// Entry of the sport picker on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportListing {
    /// Sport
    pub sport: SportType,
    /// Path slug
    pub slug: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Workouts available
    pub workout_count: usize,
    /// Landing path
    pub link: String,
}

/// Home page sport list, in fixed sport order
#[must_use]
pub fn landing(index: &CatalogIndex<'_>) -> Vec<SportListing> {
    index
        .sport_summaries()
        .into_iter()
        .map(|summary| SportListing {
            sport: summary.sport,
            slug: summary.sport.slug(),
            description: summary.sport.description(),
            workout_count: summary.workout_count,
            link: format!("/sport/{}", summary.sport.slug()),
        })
        .collect()
}
