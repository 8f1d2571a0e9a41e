// ABOUTME: Logging configuration and structured logging setup for the Tajine library and CLI
// ABOUTME: Configures log level, output format, and stderr output for tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Structured logging configuration
//!
//! Logs always go to stderr so command output on stdout stays machine readable.

use serde_json::json;
use std::env;
use std::io;
use tajine_core::errors::{AppError, AppResult};
use tajine_core::models::ScanMode;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Default service name used in structured logs
pub const SERVICE_NAME: &str = "tajine";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminal use
    Compact,
}

impl LogFormat {
    /// Parse a format name, defaulting to compact
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
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
            include_thread: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());

        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Compact, |value| LogFormat::from_str_lossy(&value));

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Build the filter: `RUST_LOG` wins, otherwise the configured level for our crates
    fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG").map_or_else(
            |_| {
                EnvFilter::new("warn")
                    .add_directive(
                        format!("tajine={}", self.level)
                            .parse()
                            .unwrap_or_else(|_| Level::WARN.into()),
                    )
                    .add_directive(
                        format!("tajine_intelligence={}", self.level)
                            .parse()
                            .unwrap_or_else(|_| Level::WARN.into()),
                    )
            },
            EnvFilter::new,
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;
        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "thread": self.include_thread
            }
        });
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "logging initialized: {summary}"
        );
    }
}

/// Structured log events shared by the application layers
pub struct AppLogger;

impl AppLogger {
    /// Log a catalog load
    pub fn log_catalog_loaded(version: &str, recipes: usize, source: &str) {
        info!(
            catalog.version = %version,
            catalog.recipes = recipes,
            catalog.source = %source,
            "Recipe catalog loaded"
        );
    }

    /// Log a recommendation query
    pub fn log_recommendation_query(
        available: usize,
        mode: ScanMode,
        displayed: usize,
        hidden: usize,
        has_profile: bool,
    ) {
        info!(
            query.available = available,
            query.mode = ?mode,
            result.displayed = displayed,
            result.hidden = hidden,
            profile.present = has_profile,
            "Recommendation query"
        );
    }

    /// Log a profile session transition
    pub fn log_session_event(event: &str, conditions: usize) {
        info!(
            session.event = %event,
            profile.conditions = conditions,
            "Profile session event"
        );
    }
}
