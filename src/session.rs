// ABOUTME: Health profile session lifecycle: absent, saved after validation, cleared on logout
// ABOUTME: Hands out owned snapshots so one assessment pass sees a consistent profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use crate::logging::AppLogger;
use std::fs;
use std::path::Path;
use tajine_core::errors::{AppError, AppResult};
use tajine_core::models::HealthProfile;

/// Holds the current user's health profile, if any
///
/// Transitions are absent -> present (`save`) -> absent (`clear`). A failed
/// `save` leaves the previous state untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSession {
    profile: Option<HealthProfile>,
}

impl ProfileSession {
    /// Empty session
    #[must_use]
    pub const fn new() -> Self {
        Self { profile: None }
    }

    /// Validate and store a profile, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns the validation error; the session is unchanged in that case
    pub fn save(&mut self, profile: HealthProfile) -> AppResult<()> {
        profile.validate()?;
        AppLogger::log_session_event("save", profile.conditions.len());
        self.profile = Some(profile);
        Ok(())
    }

    /// Drop the stored profile
    pub fn clear(&mut self) {
        if self.profile.take().is_some() {
            AppLogger::log_session_event("clear", 0);
        }
    }

    /// Borrow the stored profile
    #[must_use]
    pub const fn current(&self) -> Option<&HealthProfile> {
        self.profile.as_ref()
    }

    /// Owned copy of the stored profile for one assessment pass
    #[must_use]
    pub fn snapshot(&self) -> Option<HealthProfile> {
        self.profile.clone()
    }

    /// Whether a profile is stored
    #[must_use]
    pub const fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    /// Session holding the profile stored in a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("cannot read profile {}", path.display())).with_source(e)
        })?;
        let mut session = Self::new();
        session.save(serde_json::from_str(&json)?)?;
        Ok(session)
    }
}
