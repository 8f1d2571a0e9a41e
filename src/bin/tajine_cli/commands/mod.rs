// ABOUTME: Re-exports command modules for tajine-cli
// ABOUTME: Provides recipe matching, health assessment, and shopping list commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

pub mod health;
pub mod recipes;
pub mod shopping;

use std::path::Path;
use tajine::session::ProfileSession;
use tajine_core::errors::AppResult;
use tajine_core::models::HealthProfile;

/// Profile snapshot from an optional profile file
pub fn profile_snapshot(path: Option<&Path>) -> AppResult<Option<HealthProfile>> {
    path.map_or_else(
        || Ok(None),
        |path| Ok(ProfileSession::from_path(path)?.snapshot()),
    )
}
