// Copyright 2025 the AlphaQuest Authors
// SPDX-License-Identifier: Apache-2.0

//! The user's progress and pass thresholds.
//!
//! `UserSettings` is stored as a single JSON document, the way a key-value
//! store holds one encoded record under one key. Loading never fails: a
//! missing or unreadable record falls back to defaults.

use crate::error::{Error, Result};
use crate::settings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Persisted progress and tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSettings {
    /// Completed letter identifiers, uppercase
    pub completed_letters: BTreeSet<String>,
    /// Minimum fill percentage to pass level 1
    pub fill_threshold_percentage: u8,
    /// Minimum trace percentage to pass level 2
    pub trace_threshold_percentage: u8,
    /// Minimum recognition score to pass level 3
    pub shape_recognition_sensitivity: u8,
    pub is_music_enabled: bool,
    pub has_completed_tutorial: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            completed_letters: BTreeSet::new(),
            fill_threshold_percentage: settings::progress::DEFAULT_THRESHOLD,
            trace_threshold_percentage: settings::progress::DEFAULT_THRESHOLD,
            shape_recognition_sensitivity: settings::progress::DEFAULT_THRESHOLD,
            is_music_enabled: true,
            has_completed_tutorial: false,
        }
    }
}

/// Pass thresholds for the three levels, each a percentage in 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub fill: u8,
    pub trace: u8,
    pub shape_recognition: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        UserSettings::default().thresholds()
    }
}

impl UserSettings {
    /// Thresholds clamped to 0-100
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            fill: self.fill_threshold_percentage.min(100),
            trace: self.trace_threshold_percentage.min(100),
            shape_recognition: self.shape_recognition_sensitivity.min(100),
        }
    }

    pub fn is_completed(&self, letter_id: &str) -> bool {
        self.completed_letters
            .contains(&letter_id.trim().to_ascii_uppercase())
    }
}

// ============================================================================
// STORE
// ============================================================================

/// Where `UserSettings` live between launches
pub trait SettingsStore {
    /// Current settings; defaults if nothing usable is stored
    fn load(&self) -> UserSettings;

    /// Replace the stored settings
    fn save(&mut self, settings: &UserSettings) -> Result<()>;

    fn load_thresholds(&self) -> Thresholds {
        self.load().thresholds()
    }

    /// Record a letter as completed
    fn save_completed_letter(&mut self, letter_id: &str) -> Result<()> {
        let mut settings = self.load();
        let id = letter_id.trim().to_ascii_uppercase();
        if settings.completed_letters.insert(id.clone()) {
            self.save(&settings)?;
            tracing::info!("Marked letter '{}' as completed", id);
        } else {
            tracing::debug!("Letter '{}' was already completed", id);
        }
        Ok(())
    }

    fn mark_tutorial_completed(&mut self) -> Result<()> {
        let mut settings = self.load();
        if settings.has_completed_tutorial {
            tracing::debug!("Tutorial was already marked as completed");
            return Ok(());
        }
        settings.has_completed_tutorial = true;
        self.save(&settings)?;
        tracing::info!("Marked tutorial as completed");
        Ok(())
    }

    /// Reset progress and settings to defaults
    fn reset(&mut self) -> Result<()> {
        tracing::info!("Resetting progress and settings to defaults");
        self.save(&UserSettings::default())
    }
}

/// Settings kept in memory only
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: UserSettings,
}

impl MemorySettingsStore {
    pub fn new(settings: UserSettings) -> Self {
        Self { settings }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> UserSettings {
        self.settings.clone()
    }

    fn save(&mut self, settings: &UserSettings) -> Result<()> {
        self.settings = settings.clone();
        Ok(())
    }
}

/// Settings kept in one JSON file
#[derive(Debug, Clone)]
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<UserSettings>> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io(&self.path, e)),
        };
        serde_json::from_slice(&data)
            .map(Some)
            .map_err(|e| Error::json(&self.path, e))
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> UserSettings {
        match self.read() {
            Ok(Some(settings)) => {
                tracing::debug!("Loaded settings from {}", self.path.display());
                settings
            }
            Ok(None) => {
                tracing::info!("No saved settings found, using defaults");
                UserSettings::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load saved settings: {}. Using defaults", e);
                UserSettings::default()
            }
        }
    }

    fn save(&mut self, settings: &UserSettings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let data = serde_json::to_vec_pretty(settings).map_err(|e| Error::json(&self.path, e))?;
        std::fs::write(&self.path, data).map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
