// ABOUTME: Integration tests for ingredient matching over the fixture catalog
// ABOUTME: Validates percentage bounds, determinism, tiers, and empty input handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use tajine_core::models::{MatchResult, MatchTier};
use tajine_intelligence::{
    find_matching_recipes, ExactTokenStrategy, IngredientMatcher, MatcherConfig, TierPolicy,
};

#[test]
fn test_matched_and_missing_partition_every_recipe() {
    common::init_test_logging();
    let catalog = common::fixture_catalog();
    let available = ["بصل", "طماطم", "زيت", "سكر", "دقيق"];

    let matches = find_matching_recipes(catalog.recipes(), &available);
    assert!(!matches.is_empty());
    for result in &matches {
        assert!(result.match_percentage <= 100);
        assert_eq!(
            result.matched_ingredients.len() + result.missing_ingredients.len(),
            result.recipe.ingredients.len()
        );
    }
}

#[test]
fn test_matching_is_deterministic() {
    let catalog = common::fixture_catalog();
    let available = ["بصل", "ثوم", "زيتون"];
    let first = find_matching_recipes(catalog.recipes(), &available);
    let second = find_matching_recipes(catalog.recipes(), &available);
    assert_eq!(first, second);
}

#[test]
fn test_three_of_four_is_near_tier() {
    let catalog = common::fixture_catalog();
    let matches = find_matching_recipes(catalog.recipes(), &["باذنجان", "طماطم", "ثوم"]);

    let zaalouk = matches
        .iter()
        .find(|m| m.recipe.id == "zaalouk")
        .expect("zaalouk matched");
    assert_eq!(zaalouk.match_percentage, 75);
    assert_eq!(zaalouk.missing_ingredients, vec!["زيت زيتون"]);
    assert_eq!(
        TierPolicy::default().tier_for(zaalouk.match_percentage),
        Some(MatchTier::Near)
    );
}

#[test]
fn test_results_keep_catalog_order() {
    let catalog = common::fixture_catalog();
    let matches = find_matching_recipes(catalog.recipes(), &["بصل"]);
    let ids: Vec<_> = matches.iter().map(|m| m.recipe.id.as_str()).collect();
    assert_eq!(ids, vec!["chicken-tagine", "harira", "couscous"]);
}

#[test]
fn test_empty_available_yields_empty_result() {
    let catalog = common::fixture_catalog();
    let none: Vec<String> = Vec::new();
    assert!(find_matching_recipes(catalog.recipes(), &none).is_empty());

    let matcher = IngredientMatcher::new(MatcherConfig::default());
    let tiered = matcher.find_tiered(catalog.recipes(), &none);
    assert!(tiered.is_empty());
    assert_eq!(tiered.hidden, 0);
}

#[test]
fn test_short_token_over_matches_with_substring_strategy() {
    let catalog = common::fixture_catalog();
    let matches = find_matching_recipes(catalog.recipes(), &["زيت"]);
    let tagine = matches
        .iter()
        .find(|m| m.recipe.id == "chicken-tagine")
        .unwrap();
    assert_eq!(tagine.matched_ingredients, vec!["زيتون", "زيت زيتون"]);

    let exact = IngredientMatcher::with_strategy(MatcherConfig::default(), ExactTokenStrategy);
    let ids: Vec<_> = exact
        .find_matches(catalog.recipes(), &["زيت"])
        .iter()
        .map(|m| m.recipe.id.clone())
        .collect();
    assert_eq!(ids, vec!["chebakia"]);
}

#[test]
fn test_tiered_buckets_and_hidden_count() {
    let catalog = common::fixture_catalog();
    let matcher = IngredientMatcher::new(MatcherConfig::default());
    let tiered = matcher.find_tiered(catalog.recipes(), &["دقيق", "عسل", "سمسم", "زيت"]);

    let ids = |tier: &[MatchResult<'_>]| {
        tier.iter().map(|m| m.recipe.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&tiered.perfect), vec!["chebakia"]);
    assert!(tiered.near.is_empty());
    assert_eq!(ids(&tiered.partial), vec!["chicken-tagine", "zaalouk"]);
    assert_eq!(tiered.hidden, 1);
}
