// ABOUTME: Logging configuration and structured logging setup for the catalog tools
// ABOUTME: Configures log levels and formatters; output goes to stderr so stdout stays clean
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration

use std::env;
use std::io;

use anyhow::{anyhow, Result};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines
    Json,
    /// Full human readable output
    Pretty,
    /// Single-line output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to compact
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: env!("CARGO_PKG_NAME").to_owned(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: defaults.service_version,
        }
    }

    /// Environment configuration, raised to debug when `verbose` is set
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        let mut config = Self::from_env();
        if verbose {
            "debug".clone_into(&mut config.level);
        }
        config
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(EnvFilter::new(&self.level));

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
