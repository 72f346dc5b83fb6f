// ABOUTME: Per-sport tag and collection vocabularies for synthetic workouts
// ABOUTME: Title templates and descriptions shared by every sport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::models::SportType;

/// Title prefixes; the generator appends the workout's ordinal
pub const TITLE_TEMPLATES: &[&str] = &[
    "Morning Power Session",
    "Endurance Builder",
    "Speed Intervals",
    "Recovery Ride",
    "Hill Climbing",
    "Sprint Training",
    "Long Distance",
    "Tempo Workout",
    "Strength Building",
    "Flexibility Flow",
    "Cardio Blast",
    "Mindful Movement",
    "High Intensity",
    "Low Impact",
    "Core Focus",
    "Full Body Burn",
    "Upper Body",
    "Lower Body",
    "Balance Training",
    "Agility Work",
];

/// Workout descriptions
pub const DESCRIPTIONS: &[&str] = &[
    "Perfect for building endurance and stamina",
    "High-intensity intervals to boost your performance",
    "Recovery-focused session to help you bounce back",
    "Strength-building workout for power and stability",
    "Mindful movement to improve flexibility and balance",
    "Cardio-focused session to boost your heart health",
    "Core-strengthening exercises for better stability",
    "Full-body workout to target all major muscle groups",
];

const CYCLING_TAGS: &[&str] = &[
    "Endurance",
    "Sprint",
    "Hill Climbing",
    "Recovery",
    "Tempo",
    "Intervals",
    "Long Distance",
    "Power",
    "Speed",
    "Strength",
];
const CYCLING_COLLECTIONS: &[&str] = &[
    "From Sufferfest",
    "A Week With",
    "Pro Rides",
    "Inspirational",
    "NoVid",
    "Fitness Tests",
];

const RUNNING_TAGS: &[&str] = &[
    "5K",
    "10K",
    "Half Marathon",
    "Marathon",
    "Sprint",
    "Endurance",
    "Recovery",
    "Speed Work",
    "Hill Training",
    "Trail Running",
];
const RUNNING_COLLECTIONS: &[&str] = &[
    "Couch to 5K",
    "Marathon Prep",
    "Speed Training",
    "Trail Adventures",
    "Recovery Runs",
];

const SWIMMING_TAGS: &[&str] = &[
    "Freestyle",
    "Breaststroke",
    "Butterfly",
    "Backstroke",
    "Endurance",
    "Sprint",
    "Recovery",
    "Technique",
    "Open Water",
    "Pool Training",
];
const SWIMMING_COLLECTIONS: &[&str] = &[
    "Swim Technique",
    "Open Water Prep",
    "Triathlon Training",
    "Speed Development",
    "Recovery Swims",
];

const YOGA_TAGS: &[&str] = &[
    "Vinyasa",
    "Hatha",
    "Ashtanga",
    "Yin",
    "Power",
    "Restorative",
    "Meditation",
    "Flexibility",
    "Strength",
    "Balance",
];
const YOGA_COLLECTIONS: &[&str] = &[
    "Morning Flow",
    "Evening Relaxation",
    "Power Yoga",
    "Gentle Stretching",
    "Meditation Series",
];

const STRENGTH_TAGS: &[&str] = &[
    "Upper Body",
    "Lower Body",
    "Core",
    "Full Body",
    "Powerlifting",
    "Bodyweight",
    "Resistance",
    "Functional",
    "Isolation",
    "Compound",
];
const STRENGTH_COLLECTIONS: &[&str] = &[
    "Beginner Strength",
    "Powerlifting Program",
    "Bodyweight Only",
    "Functional Fitness",
    "Core Focus",
];

const MENTAL_TAGS: &[&str] = &[
    "Meditation",
    "Mindfulness",
    "Breathing",
    "Visualization",
    "Stress Relief",
    "Focus",
    "Relaxation",
    "Anxiety Relief",
    "Sleep",
    "Confidence",
];
const MENTAL_COLLECTIONS: &[&str] = &[
    "Daily Meditation",
    "Stress Management",
    "Sleep Better",
    "Confidence Building",
    "Mindful Living",
];

/// Tags and collections the generator may assign to one sport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportVocabulary {
    /// Sport the vocabulary applies to
    pub sport: SportType,
    /// Candidate tags
    pub tags: Vec<String>,
    /// Candidate collection names
    pub collections: Vec<String>,
}

impl SportVocabulary {
    /// Build a vocabulary from string slices
    #[must_use]
    pub fn new(sport: SportType, tags: &[&str], collections: &[&str]) -> Self {
        Self {
            sport,
            tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
            collections: collections.iter().map(|&name| name.to_owned()).collect(),
        }
    }

    /// Built-in vocabulary for a sport
    #[must_use]
    pub fn default_for(sport: SportType) -> Self {
        let (tags, collections) = match sport {
            SportType::Cycling => (CYCLING_TAGS, CYCLING_COLLECTIONS),
            SportType::Running => (RUNNING_TAGS, RUNNING_COLLECTIONS),
            SportType::Swimming => (SWIMMING_TAGS, SWIMMING_COLLECTIONS),
            SportType::Yoga => (YOGA_TAGS, YOGA_COLLECTIONS),
            SportType::StrengthTraining => (STRENGTH_TAGS, STRENGTH_COLLECTIONS),
            SportType::MentalTraining => (MENTAL_TAGS, MENTAL_COLLECTIONS),
        };
        Self::new(sport, tags, collections)
    }

    /// Built-in vocabularies for every sport, in sport order
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        SportType::ALL.into_iter().map(Self::default_for).collect()
    }
}
