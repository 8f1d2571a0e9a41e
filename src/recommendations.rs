// ABOUTME: Recommendation service combining ingredient matching, scan mode, tiers, and health assessment
// ABOUTME: Produces tiered recipe recommendations for one query and one profile snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Recommendation service
//!
//! One query runs in four steps: match the catalog, keep recipes visible in the
//! scan mode, partition into display tiers, then assess the displayed recipes
//! in parallel. Tiers keep catalog order.

use crate::logging::AppLogger;
use serde::Serialize;
use tajine_core::models::{HealthProfile, MatchResult, MatchTier, Recipe, ScanMode};
use tajine_intelligence::config::EngineConfig;
use tajine_intelligence::{
    BidirectionalSubstring, HealthEngine, IngredientMatcher, MatchStrategy, RecipeAssessment,
    Tiered,
};

/// A matched recipe with its display tier and health assessment
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecommendation<'a> {
    /// Ingredient match
    #[serde(flatten)]
    pub matched: MatchResult<'a>,
    /// Display tier
    pub tier: MatchTier,
    /// Health assessment for the profile snapshot
    pub assessment: RecipeAssessment,
}

/// Runs recommendation queries with a fixed engine configuration
#[derive(Debug, Clone)]
pub struct RecommendationService<S = BidirectionalSubstring> {
    matcher: IngredientMatcher<S>,
    engine: HealthEngine,
}

impl RecommendationService<BidirectionalSubstring> {
    /// Service with the default matching strategy
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self {
            matcher: IngredientMatcher::new(config.matcher),
            engine: HealthEngine::new(config),
        }
    }
}

impl<S: MatchStrategy> RecommendationService<S> {
    /// Service with a custom matching strategy
    pub const fn with_strategy(config: EngineConfig, strategy: S) -> Self {
        Self {
            matcher: IngredientMatcher::with_strategy(config.matcher, strategy),
            engine: HealthEngine::new(config),
        }
    }

    /// Tiered recommendations for the available ingredients
    pub fn recommend<'a, A: AsRef<str>>(
        &self,
        catalog: &'a [Recipe],
        available: &[A],
        mode: ScanMode,
        profile: Option<&HealthProfile>,
    ) -> Tiered<RecipeRecommendation<'a>> {
        let matches: Vec<MatchResult<'a>> = self
            .matcher
            .find_matches(catalog, available)
            .into_iter()
            .filter(|result| mode.includes(result.recipe))
            .collect();

        let tiered = Tiered::partition(matches, &self.matcher.config().tiers, |result| {
            result.match_percentage
        });

        let displayed: Vec<&Recipe> = tiered.iter().map(|(_, result)| result.recipe).collect();
        let mut assessments = self.engine.assess_batch(profile, &displayed).into_iter();

        let Tiered {
            perfect,
            near,
            partial,
            hidden,
        } = tiered;

        let recommendations = Tiered {
            perfect: attach(perfect, MatchTier::Perfect, &mut assessments),
            near: attach(near, MatchTier::Near, &mut assessments),
            partial: attach(partial, MatchTier::Partial, &mut assessments),
            hidden,
        };

        AppLogger::log_recommendation_query(
            available.len(),
            mode,
            recommendations.displayed(),
            hidden,
            profile.is_some(),
        );
        recommendations
    }
}

fn attach<'a>(
    results: Vec<MatchResult<'a>>,
    tier: MatchTier,
    assessments: &mut impl Iterator<Item = RecipeAssessment>,
) -> Vec<RecipeRecommendation<'a>> {
    results
        .into_iter()
        .zip(assessments)
        .map(|(matched, assessment)| RecipeRecommendation {
            matched,
            tier,
            assessment,
        })
        .collect()
}
