// ABOUTME: Engine configuration module aggregating matcher, nutrition, and scoring settings
// ABOUTME: Every struct defaults to the published constants and validates its own invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Engine configuration
//!
//! Configuration is always passed explicitly; the engines never read globals.

/// Configuration error types
pub mod error;
/// Matcher threshold and tier policy
pub mod matching;
/// Daily calorie target coefficients
pub mod nutrition;
/// Warning and score thresholds
pub mod scoring;

pub use error::ConfigError;
pub use matching::{MatcherConfig, TierPolicy};
pub use nutrition::{
    ActivityFactorsConfig, AgeAdjustmentConfig, BmrConfig, GoalAdjustmentConfig, NutritionConfig,
};
pub use scoring::HealthScoringConfig;

use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Ingredient matcher settings
    pub matcher: MatcherConfig,
    /// Daily calorie target settings
    pub nutrition: NutritionConfig,
    /// Health warning and score settings
    pub scoring: HealthScoringConfig,
}

impl EngineConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matcher.validate()?;
        self.nutrition.validate()?;
        self.scoring.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_negative_activity_factor_rejected() {
        let mut config = EngineConfig::default();
        config.nutrition.activity_factors.light = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_inverted_calorie_ratios_rejected() {
        let mut config = EngineConfig::default();
        config.scoring.high_calorie_ratio = 2.5;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
