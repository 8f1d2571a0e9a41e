// ABOUTME: Application configuration combining engine settings, catalog location, and logging
// ABOUTME: Defaults plus environment overrides, validated once and shared through a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Application configuration
//!
//! Engines never read this directly: callers take the [`EngineConfig`] out of
//! it and pass it explicitly.
//!
//! Environment overrides:
//!
//! | Variable | Field |
//! |---|---|
//! | `TAJINE_CATALOG_PATH` | `catalog_path` |
//! | `TAJINE_MIN_MATCH_PERCENTAGE` | `engine.matcher.min_match_percentage` |
//! | `TAJINE_TIER_NEAR_MIN` | `engine.matcher.tiers.near_min` |
//! | `TAJINE_TIER_PARTIAL_MIN` | `engine.matcher.tiers.partial_min` |

use crate::logging::LoggingConfig;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use tajine_intelligence::config::{ConfigError, EngineConfig};
use tracing::warn;

/// Catalog path override
pub const CATALOG_PATH_ENV: &str = "TAJINE_CATALOG_PATH";
/// Inclusion threshold override
pub const MIN_MATCH_PERCENTAGE_ENV: &str = "TAJINE_MIN_MATCH_PERCENTAGE";
/// Near tier floor override
pub const TIER_NEAR_MIN_ENV: &str = "TAJINE_TIER_NEAR_MIN";
/// Partial tier floor override
pub const TIER_PARTIAL_MIN_ENV: &str = "TAJINE_TIER_PARTIAL_MIN";

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Matcher, nutrition, and scoring settings
    pub engine: EngineConfig,
    /// Default recipe catalog file
    pub catalog_path: Option<PathBuf>,
    /// Logging setup
    pub logging: LoggingConfig,
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load application config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self {
            logging: LoggingConfig::from_env(),
            ..Self::default()
        }
        .apply_env_overrides()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first engine validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = env::var(CATALOG_PATH_ENV) {
            if !val.trim().is_empty() {
                self.catalog_path = Some(PathBuf::from(val));
            }
        }

        if let Ok(val) = env::var(MIN_MATCH_PERCENTAGE_ENV) {
            self.engine.matcher.min_match_percentage = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {MIN_MATCH_PERCENTAGE_ENV}")))?;
        }

        if let Ok(val) = env::var(TIER_NEAR_MIN_ENV) {
            self.engine.matcher.tiers.near_min = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {TIER_NEAR_MIN_ENV}")))?;
        }

        if let Ok(val) = env::var(TIER_PARTIAL_MIN_ENV) {
            self.engine.matcher.tiers.partial_min = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {TIER_PARTIAL_MIN_ENV}")))?;
        }

        Ok(self)
    }
}
