// ABOUTME: Health scoring configuration for calorie penalties, goal advisories, and ratings
// ABOUTME: Thresholds are ratios of the per-meal calorie target or absolute kcal values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Health warning and score thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthScoringConfig {
    /// Recipe above this multiple of the meal target is flagged high-calorie: 1.5
    pub high_calorie_ratio: f64,
    /// Recipe above this multiple of the meal target gets the heavy penalty: 2.0
    pub very_high_calorie_ratio: f64,
    /// Score penalty for a high-calorie recipe: 15
    pub high_calorie_penalty: i64,
    /// Score penalty for a very high-calorie recipe: 30
    pub very_high_calorie_penalty: i64,
    /// Score penalty per contraindicated ingredient hit: 10
    pub bad_ingredient_penalty: i64,
    /// Weight-loss profiles are warned about recipes above this (kcal): 400
    pub lose_goal_calorie_limit: u32,
    /// Weight-gain profiles are advised on recipes below this (kcal): 300
    pub gain_goal_calorie_floor: u32,
    /// Minimum score rated suitable: 80
    pub suitable_min_score: u8,
    /// Minimum score rated caution: 50
    pub caution_min_score: u8,
}

impl Default for HealthScoringConfig {
    fn default() -> Self {
        Self {
            high_calorie_ratio: 1.5,
            very_high_calorie_ratio: 2.0,
            high_calorie_penalty: 15,
            very_high_calorie_penalty: 30,
            bad_ingredient_penalty: 10,
            lose_goal_calorie_limit: 400,
            gain_goal_calorie_floor: 300,
            suitable_min_score: 80,
            caution_min_score: 50,
        }
    }
}

impl HealthScoringConfig {
    /// Validate the scoring configuration
    ///
    /// # Errors
    ///
    /// Returns an error if ratios or rating thresholds are out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.high_calorie_ratio <= 0.0 || self.high_calorie_ratio > self.very_high_calorie_ratio
        {
            return Err(ConfigError::InvalidRange(
                "high_calorie_ratio must be positive and <= very_high_calorie_ratio",
            ));
        }
        if self.high_calorie_penalty < 0
            || self.very_high_calorie_penalty < 0
            || self.bad_ingredient_penalty < 0
        {
            return Err(ConfigError::ValueOutOfRange("penalties must not be negative"));
        }
        if self.caution_min_score > self.suitable_min_score || self.suitable_min_score > 100 {
            return Err(ConfigError::InvalidRange(
                "rating thresholds must satisfy caution <= suitable <= 100",
            ));
        }
        Ok(())
    }
}
