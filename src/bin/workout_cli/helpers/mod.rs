// ABOUTME: Helper modules for workout-cli
// ABOUTME: Provides text and JSON display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
