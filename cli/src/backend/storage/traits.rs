//! # Storage Traits
//!
//! Storage abstraction traits so the domain layer can work against
//! different backends without modification.

use anyhow::Result;

use crate::backend::domain::models::check_in::CheckIn;

/// Trait defining the interface for check-in settings storage.
pub trait SettingsStorage: Send + Sync {
    /// Load the persisted check-in, creating defaults on first read
    fn get_settings(&self) -> Result<CheckIn>;

    /// Persist the check-in
    fn save_settings(&self, check_in: &CheckIn) -> Result<()>;

    /// Remove persisted state entirely
    /// Returns true if a settings file existed and was deleted
    fn clear_settings(&self) -> Result<bool>;
}
