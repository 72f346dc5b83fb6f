// ABOUTME: Core types and constants for the workout catalog
// ABOUTME: Foundation crate with error handling, domain models, and browsing limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing the shared types of the workout catalog. It holds
//! no catalog logic of its own, so it changes rarely and keeps incremental
//! builds of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `SelectorError`
//! - **constants**: Browsing limits, duration thresholds, and fixture defaults
//! - **models**: `Workout`, `SportType`, `Difficulty`, `DurationBucket`

/// Unified error handling system with standard error codes
pub mod errors;

/// Catalog constants organized by domain
pub mod constants;

/// Core data models (Workout, SportType, Difficulty, DurationBucket)
pub mod models;
