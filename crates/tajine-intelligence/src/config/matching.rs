// ABOUTME: Matcher configuration: inclusion threshold and display tier boundaries
// ABOUTME: Tier boundaries are display policy and can be overridden without touching the matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use tajine_core::models::MatchTier;

/// Ingredient matcher configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherConfig {
    /// A recipe is returned only if its match percentage is strictly above this value
    pub min_match_percentage: u8,
    /// Display tier boundaries applied by consumers
    pub tiers: TierPolicy,
}

/// Boundaries of the perfect / near / partial display tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TierPolicy {
    /// Minimum percentage of the perfect tier: 100
    pub perfect: u8,
    /// Minimum percentage of the near tier: 70
    pub near_min: u8,
    /// Minimum percentage of the partial tier: 25
    pub partial_min: u8,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            perfect: 100,
            near_min: 70,
            partial_min: 25,
        }
    }
}

impl TierPolicy {
    /// Display tier of a match percentage, `None` below the partial floor
    #[must_use]
    pub const fn tier_for(&self, match_percentage: u8) -> Option<MatchTier> {
        if match_percentage >= self.perfect {
            Some(MatchTier::Perfect)
        } else if match_percentage >= self.near_min {
            Some(MatchTier::Near)
        } else if match_percentage >= self.partial_min {
            Some(MatchTier::Partial)
        } else {
            None
        }
    }

    /// Validate tier ordering
    ///
    /// # Errors
    ///
    /// Returns an error if the boundaries are not ordered `partial <= near < perfect <= 100`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.perfect > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "perfect tier must be at most 100",
            ));
        }
        if self.near_min >= self.perfect {
            return Err(ConfigError::InvalidRange(
                "near tier floor must be < perfect tier floor",
            ));
        }
        if self.partial_min > self.near_min {
            return Err(ConfigError::InvalidRange(
                "partial tier floor must be <= near tier floor",
            ));
        }
        Ok(())
    }
}

impl MatcherConfig {
    /// Validate the matcher configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the inclusion threshold excludes every recipe or the tiers are unordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_match_percentage >= 100 {
            return Err(ConfigError::ValueOutOfRange(
                "min_match_percentage must be below 100",
            ));
        }
        self.tiers.validate()
    }
}
