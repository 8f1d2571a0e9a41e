// ABOUTME: Ingredient-to-recipe matcher ranking a catalog by overlap with available ingredients
// ABOUTME: Pluggable match strategy, threshold filtering, and display tier partitioning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! # Ingredient Matcher
//!
//! For every catalog recipe the matcher decides, ingredient by ingredient, whether
//! the user has it, then reports the rounded share of available ingredients.
//! Results keep the catalog's order; sorting is left to consumers.
//!
//! The default [`BidirectionalSubstring`] strategy treats two tokens as the same
//! ingredient when either contains the other after lowercasing. This tolerates
//! plural and modifier variants ("onion" / "red onion") and over-matches short
//! tokens. [`ExactTokenStrategy`] is the strict alternative.
//!
//! Tiering is display policy: [`Tiered::partition`] applies a [`TierPolicy`]
//! to already computed results and never changes what the matcher returns.

use crate::config::{MatcherConfig, TierPolicy};
use serde::Serialize;
use tajine_core::constants::rounded_percentage;
use tajine_core::models::{MatchResult, MatchTier, Recipe};
use tracing::trace;

/// Decides whether an available ingredient satisfies a recipe ingredient
///
/// Both arguments are already case-normalized by the matcher.
pub trait MatchStrategy: Send + Sync {
    /// Whether `available` counts as having `ingredient`
    fn matches(&self, available: &str, ingredient: &str) -> bool;
}

/// Either token contains the other
#[derive(Debug, Clone, Copy, Default)]
pub struct BidirectionalSubstring;

impl MatchStrategy for BidirectionalSubstring {
    fn matches(&self, available: &str, ingredient: &str) -> bool {
        available.contains(ingredient) || ingredient.contains(available)
    }
}

/// Tokens must be equal after trimming
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactTokenStrategy;

impl MatchStrategy for ExactTokenStrategy {
    fn matches(&self, available: &str, ingredient: &str) -> bool {
        available.trim() == ingredient.trim()
    }
}

/// Ranks catalog recipes against a set of available ingredients
#[derive(Debug, Clone, Default)]
pub struct IngredientMatcher<S = BidirectionalSubstring> {
    config: MatcherConfig,
    strategy: S,
}

impl IngredientMatcher<BidirectionalSubstring> {
    /// Create a matcher with the default bidirectional substring strategy
    #[must_use]
    pub const fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            strategy: BidirectionalSubstring,
        }
    }
}

impl<S: MatchStrategy> IngredientMatcher<S> {
    /// Create a matcher with a custom strategy
    pub const fn with_strategy(config: MatcherConfig, strategy: S) -> Self {
        Self { config, strategy }
    }

    /// Matcher configuration in use
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Compute the match of a single recipe, regardless of the inclusion threshold
    pub fn evaluate<'a, A: AsRef<str>>(&self, recipe: &'a Recipe, available: &[A]) -> MatchResult<'a> {
        let normalized = normalize_all(available);
        self.evaluate_normalized(recipe, &normalized)
    }

    /// Match every catalog recipe and keep those above the inclusion threshold
    ///
    /// Recipes with no available ingredient are never returned. An empty
    /// `available` list therefore yields an empty result.
    pub fn find_matches<'a, A: AsRef<str>>(
        &self,
        catalog: &'a [Recipe],
        available: &[A],
    ) -> Vec<MatchResult<'a>> {
        let normalized = normalize_all(available);
        catalog
            .iter()
            .filter(|recipe| !recipe.ingredients.is_empty())
            .map(|recipe| self.evaluate_normalized(recipe, &normalized))
            .filter(|result| {
                !result.matched_ingredients.is_empty()
                    && result.match_percentage > self.config.min_match_percentage
            })
            .collect()
    }

    /// Match and partition into display tiers using the configured policy
    pub fn find_tiered<'a, A: AsRef<str>>(
        &self,
        catalog: &'a [Recipe],
        available: &[A],
    ) -> Tiered<MatchResult<'a>> {
        Tiered::partition(
            self.find_matches(catalog, available),
            &self.config.tiers,
            |result| result.match_percentage,
        )
    }

    fn evaluate_normalized<'a>(&self, recipe: &'a Recipe, available: &[String]) -> MatchResult<'a> {
        let (matched, missing): (Vec<&str>, Vec<&str>) = recipe
            .ingredients
            .iter()
            .map(String::as_str)
            .partition(|ingredient| self.has_ingredient(available, ingredient));

        let match_percentage = rounded_percentage(matched.len(), recipe.ingredients.len());
        trace!(
            recipe_id = %recipe.id,
            matched = matched.len(),
            total = recipe.ingredients.len(),
            match_percentage,
            "evaluated recipe"
        );

        MatchResult {
            recipe,
            match_percentage,
            matched_ingredients: matched,
            missing_ingredients: missing,
        }
    }

    fn has_ingredient(&self, available: &[String], ingredient: &str) -> bool {
        let ingredient = ingredient.to_lowercase();
        available
            .iter()
            .any(|have| self.strategy.matches(have, &ingredient))
    }
}

fn normalize_all<A: AsRef<str>>(available: &[A]) -> Vec<String> {
    available
        .iter()
        .map(|item| item.as_ref().to_lowercase())
        .collect()
}

/// Match every catalog recipe with the default configuration and strategy
#[must_use]
pub fn find_matching_recipes<'a, A: AsRef<str>>(
    catalog: &'a [Recipe],
    available: &[A],
) -> Vec<MatchResult<'a>> {
    IngredientMatcher::new(MatcherConfig::default()).find_matches(catalog, available)
}

/// Items bucketed into perfect / near / partial display tiers
///
/// Each tier keeps the input order. Items below the partial floor are counted
/// in `hidden` and dropped.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Tiered<T> {
    /// Perfect tier
    pub perfect: Vec<T>,
    /// Near tier
    pub near: Vec<T>,
    /// Partial tier
    pub partial: Vec<T>,
    /// Number of computed items below the partial floor
    pub hidden: usize,
}

impl<T> Default for Tiered<T> {
    fn default() -> Self {
        Self {
            perfect: Vec::new(),
            near: Vec::new(),
            partial: Vec::new(),
            hidden: 0,
        }
    }
}

impl<T> Tiered<T> {
    /// Partition items by the tier of their match percentage
    pub fn partition<I, F>(items: I, policy: &TierPolicy, percentage: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> u8,
    {
        let mut tiered = Self::default();
        for item in items {
            match policy.tier_for(percentage(&item)) {
                Some(MatchTier::Perfect) => tiered.perfect.push(item),
                Some(MatchTier::Near) => tiered.near.push(item),
                Some(MatchTier::Partial) => tiered.partial.push(item),
                None => tiered.hidden += 1,
            }
        }
        tiered
    }

    /// Number of displayed items
    pub fn displayed(&self) -> usize {
        self.perfect.len() + self.near.len() + self.partial.len()
    }

    /// Whether no item is displayed
    pub fn is_empty(&self) -> bool {
        self.displayed() == 0
    }

    /// Iterate displayed items tier by tier with their tier
    pub fn iter(&self) -> impl Iterator<Item = (MatchTier, &T)> {
        self.perfect
            .iter()
            .map(|item| (MatchTier::Perfect, item))
            .chain(self.near.iter().map(|item| (MatchTier::Near, item)))
            .chain(self.partial.iter().map(|item| (MatchTier::Partial, item)))
    }
}
