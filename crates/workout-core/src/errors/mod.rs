// ABOUTME: Unified error handling for the workout catalog
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Standard error codes and a single error type shared by the catalog, the
//! fixture generator, and the binaries. Category resolution itself never fails;
//! errors only come from parsing selectors, validating a catalog, configuration,
//! and fixture file I/O.

mod selector;

pub use selector::SelectorError;

use std::error::Error as StdError;
use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // Configuration (6000-6999)
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input provided",
            Self::ValueOutOfRange => "Value is out of the allowed range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "The resource already exists",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource: String = resource.into();
        Self::new(ErrorCode::ResourceNotFound, format!("{resource} not found"))
    }

    /// Resource already exists
    #[must_use]
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let resource: String = resource.into();
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{resource} already exists"),
        )
    }

    /// Configuration value could not be used
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
