// ABOUTME: Engine-wide constants and numeric helpers for calorie and match computations
// ABOUTME: Neutral defaults used when no health profile is present, plus half-up rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Constants module
//!
//! Values here are part of the display contract: the UI shows and compares them,
//! so they are not configurable.

/// Neutral defaults returned when no health profile is available
pub mod neutral {
    /// Daily calorie target when no profile is supplied
    pub const DAILY_CALORIES: i64 = 2000;
    /// Health score when no profile is supplied (no penalties)
    pub const HEALTH_SCORE: u8 = 100;
}

/// Health score bounds
pub mod score {
    /// Lowest possible health score
    pub const MIN: i64 = 0;
    /// Highest possible health score
    pub const MAX: i64 = 100;
}

/// Daily calories are split evenly across this many meals
pub const MEALS_PER_DAY: f64 = 3.0;

/// Round half up (toward positive infinity), matching how displayed values were
/// historically computed. `f64::round` rounds half away from zero, which differs
/// for negative halves.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Percentage of `part` in `whole`, rounded half up
///
/// Returns 0 when `whole` is zero.
#[must_use]
pub fn rounded_percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let pct = round_half_up(part as f64 / whole as f64 * 100.0);
    pct.clamp(0, 100) as u8
}
