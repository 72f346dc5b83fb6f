// ABOUTME: Unified error handling for the workout catalog
// ABOUTME: Re-exports AppError, ErrorCode, and SelectorError from workout-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::errors::*;
