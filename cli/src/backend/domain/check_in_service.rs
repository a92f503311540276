//! Check-in state service.
//!
//! Owns every transition of the mutable check-in state (level, cups, name,
//! dark flag). Each operation clamps or sanitizes its input, persists the
//! result, and returns a freshly derived snapshot, so callers never have to
//! keep derived content in sync themselves.

use anyhow::Result;
use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use shared::derive_mood;

use crate::backend::domain::commands::check_in::{
    CheckInResult, ImportCommand, NudgeLevelCommand, QuickSetCommand, SetCupsCommand,
    SetLevelCommand, SetNameCommand,
};
use crate::backend::domain::models::check_in::{CheckIn, DEFAULT_CUPS, DEFAULT_LEVEL};
use crate::backend::storage::traits::SettingsStorage;
use crate::backend::storage::yaml::{SettingsRepository, YamlConnection};

/// Preset levels behind the five quick-set slots.
pub const QUICK_SET_LEVELS: [i32; 5] = [10, 30, 50, 70, 90];

/// How far one nudge moves the slider.
pub const NUDGE_STEP: i32 = 5;

/// Service for the check-in state machine.
#[derive(Clone)]
pub struct CheckInService {
    settings_repository: SettingsRepository,
}

impl CheckInService {
    /// Create a new CheckInService.
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        let settings_repository = SettingsRepository::new(connection);
        Self {
            settings_repository,
        }
    }

    /// Current check-in with derived content, creating defaults on first use.
    pub fn current(&self) -> Result<CheckInResult> {
        let check_in = self.settings_repository.get_settings()?;
        Ok(Self::with_derived(check_in))
    }

    /// Set the grump level directly.
    pub fn set_level(&self, command: SetLevelCommand) -> Result<CheckInResult> {
        let mut check_in = self.settings_repository.get_settings()?;
        check_in.level = Self::clamped_level(command.level);

        info!("Set level to {}", check_in.level);
        self.persist(check_in)
    }

    /// Step the level by a signed amount (arrow-key style).
    pub fn nudge_level(&self, command: NudgeLevelCommand) -> Result<CheckInResult> {
        let mut check_in = self.settings_repository.get_settings()?;
        check_in.level = Self::clamped_level(check_in.level.saturating_add(command.delta));

        info!("Nudged level by {} to {}", command.delta, check_in.level);
        self.persist(check_in)
    }

    /// Jump to one of the five quick-set presets.
    pub fn quick_set(&self, command: QuickSetCommand) -> Result<CheckInResult> {
        if !(1..=5).contains(&command.slot) {
            return Err(anyhow::anyhow!(
                "Quick-set slot must be 1-5, got {}",
                command.slot
            ));
        }

        let mut check_in = self.settings_repository.get_settings()?;
        check_in.level = QUICK_SET_LEVELS[(command.slot - 1) as usize];

        info!("Quick-set slot {} -> level {}", command.slot, check_in.level);
        self.persist(check_in)
    }

    /// Set the cup count, capped at the picker maximum.
    pub fn set_cups(&self, command: SetCupsCommand) -> Result<CheckInResult> {
        let mut check_in = self.settings_repository.get_settings()?;
        let clamped = CheckIn::clamp_cups(command.cups);
        if clamped != command.cups {
            warn!("Cup count {} capped at {}", command.cups, clamped);
        }
        check_in.cups = clamped;

        info!("Set cups to {}", check_in.cups);
        self.persist(check_in)
    }

    /// Set the display name, sanitized.
    pub fn set_name(&self, command: SetNameCommand) -> Result<CheckInResult> {
        let mut check_in = self.settings_repository.get_settings()?;
        let sanitized = CheckIn::sanitize_name(&command.name);
        if sanitized != command.name {
            warn!("Display name contained characters that were stripped");
        }
        check_in.name = sanitized;

        info!("Set name to '{}'", check_in.name);
        self.persist(check_in)
    }

    /// Flip the dark-mode preference.
    pub fn toggle_dark(&self) -> Result<CheckInResult> {
        let mut check_in = self.settings_repository.get_settings()?;
        check_in.dark = !check_in.dark;

        info!("Dark mode {}", if check_in.dark { "on" } else { "off" });
        self.persist(check_in)
    }

    /// Back to the default level and cups; name and dark mode stay.
    pub fn reset(&self) -> Result<CheckInResult> {
        let mut check_in = self.settings_repository.get_settings()?;
        check_in.level = DEFAULT_LEVEL;
        check_in.cups = DEFAULT_CUPS;

        info!("Reset level and cups to defaults");
        self.persist(check_in)
    }

    /// Drop the saved settings entirely and return a fresh default check-in.
    pub fn clear_saved(&self) -> Result<CheckInResult> {
        let removed = self.settings_repository.clear_settings()?;
        if removed {
            info!("Removed saved settings");
        }
        self.current()
    }

    /// Adopt values carried by a share link. Absent values leave the current
    /// state untouched; everything ingested is clamped and sanitized.
    pub fn apply_import(&self, command: ImportCommand) -> Result<CheckInResult> {
        let mut check_in = self.settings_repository.get_settings()?;
        if let Some(level) = command.level {
            check_in.level = Self::clamped_level(level);
        }
        if let Some(cups) = command.cups {
            check_in.cups = CheckIn::clamp_cups(cups);
        }
        if let Some(name) = command.name {
            check_in.name = CheckIn::sanitize_name(&name);
        }

        info!(
            "Imported check-in state: level={}, cups={}, name='{}'",
            check_in.level, check_in.cups, check_in.name
        );
        self.persist(check_in)
    }

    fn clamped_level(level: i32) -> i32 {
        let clamped = CheckIn::clamp_level(level);
        if clamped != level {
            warn!("Level {} out of range, clamped to {}", level, clamped);
        }
        clamped
    }

    fn persist(&self, mut check_in: CheckIn) -> Result<CheckInResult> {
        check_in.updated_at = Utc::now();
        self.settings_repository.save_settings(&check_in)?;
        Ok(Self::with_derived(check_in))
    }

    fn with_derived(check_in: CheckIn) -> CheckInResult {
        let derived = derive_mood(check_in.level, check_in.cups);
        CheckInResult { check_in, derived }
    }
}
