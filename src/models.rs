// ABOUTME: Core data models for the workout catalog
// ABOUTME: Re-exports Workout, SportType, Difficulty, and DurationBucket from workout-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::models::*;
