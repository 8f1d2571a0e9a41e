// ABOUTME: Recipe matching and health assessment engines for Tajine
// ABOUTME: Extracted from the application crate for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

#![deny(unsafe_code)]

//! # Tajine Intelligence
//!
//! Stateless engines over plain data. Callers pass the catalog, the available
//! ingredients, an optional health profile snapshot, and an [`config::EngineConfig`]
//! explicitly; nothing here reads globals or caches results.

/// Engine configuration and validation
pub mod config;

/// Ingredient matcher, match strategies, and display tiering
pub mod matcher;

/// BMR, TDEE, and daily calorie target
pub mod nutrition_calculator;

/// Health warnings, score, and rating
pub mod health_engine;

/// Arabic advisory texts
pub mod messages;

pub use config::{EngineConfig, MatcherConfig, TierPolicy};
pub use health_engine::{HealthEngine, RecipeAssessment};
pub use matcher::{
    find_matching_recipes, BidirectionalSubstring, ExactTokenStrategy, IngredientMatcher,
    MatchStrategy, Tiered,
};
