// ABOUTME: Health assessment output types rendered next to each recipe
// ABOUTME: Defines HealthWarning, WarningKind, and the score-derived HealthRating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use serde::{Deserialize, Serialize};

/// Severity of a health warning
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    /// Contraindicated ingredient for a listed condition
    Danger,
    /// Calorie or goal concern
    Warning,
    /// Recipe fits the profile
    Success,
    /// Neutral advice
    Info,
}

/// A single entry of a recipe's health assessment
///
/// Assessments are ordered sequences; the order is part of the display contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthWarning {
    /// Severity
    #[serde(rename = "type")]
    pub kind: WarningKind,
    /// Emoji icon shown beside the title
    pub icon: String,
    /// Short title
    pub title: String,
    /// Full advisory text
    pub message: String,
}

impl HealthWarning {
    /// Create a warning entry
    pub fn new(
        kind: WarningKind,
        icon: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            icon: icon.into(),
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Coarse suitability rating derived from a health score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    /// Score at or above the suitable threshold
    Suitable,
    /// Score at or above the caution threshold
    Caution,
    /// Anything lower
    Unsuitable,
}

impl HealthRating {
    /// Arabic display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Suitable => "مناسب",
            Self::Caution => "حذر",
            Self::Unsuitable => "غير مناسب",
        }
    }
}
