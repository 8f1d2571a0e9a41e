// ABOUTME: Core data models shared by the matcher, health engine, and application layer
// ABOUTME: Re-exports Recipe, HealthProfile, HealthWarning, MatchResult and related enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! # Data Models
//!
//! - `Recipe`: immutable record of the static catalog
//! - `HealthProfile`: optional per-user snapshot driving the health engine
//! - `HealthWarning`: one ordered entry of a recipe's health assessment
//! - `MatchResult`: overlap between a recipe and the available ingredients

mod health;
mod matching;
mod recipe;
mod warning;

pub use health::{
    ActivityLevel, AgeGroup, AllergyKey, ConditionKey, Gender, Goal, HealthProfile,
};
pub use matching::{MatchResult, MatchTier, ScanMode};
pub use recipe::{CalorieBand, Recipe, RecipeCategory};
pub use warning::{HealthRating, HealthWarning, WarningKind};
