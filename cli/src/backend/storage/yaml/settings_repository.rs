//! # YAML Settings Repository
//!
//! Persists the check-in state to a single `settings.yaml` in the data
//! directory. Defaults are created on first read; writes go through a temp
//! file and rename so a crash never leaves a half-written file behind.

use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use super::connection::YamlConnection;
use crate::backend::domain::models::check_in::CheckIn;
use crate::backend::storage::traits::SettingsStorage;

const SETTINGS_FILE: &str = "settings.yaml";

/// File-backed settings repository.
#[derive(Clone)]
pub struct SettingsRepository {
    connection: Arc<YamlConnection>,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        Self { connection }
    }

    fn settings_path(&self) -> PathBuf {
        self.connection.base_directory().join(SETTINGS_FILE)
    }

    /// Load settings from file, creating defaults if the file doesn't exist.
    fn load_or_create(&self) -> Result<CheckIn> {
        let path = self.settings_path();

        if path.exists() {
            let yaml_content = fs::read_to_string(&path)?;
            let check_in: CheckIn = serde_yaml::from_str(&yaml_content)?;
            debug!("Loaded settings from {:?}", path);
            Ok(check_in)
        } else {
            let check_in = CheckIn::default();
            self.save(&check_in)?;
            info!("Created default settings at {:?}", path);
            Ok(check_in)
        }
    }

    /// Save settings to file.
    fn save(&self, check_in: &CheckIn) -> Result<()> {
        let path = self.settings_path();
        let base_dir = self.connection.base_directory();

        if !base_dir.exists() {
            fs::create_dir_all(base_dir)?;
        }

        let yaml_content = serde_yaml::to_string(check_in)?;

        // Atomic write: temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }
}

impl SettingsStorage for SettingsRepository {
    fn get_settings(&self) -> Result<CheckIn> {
        self.load_or_create()
    }

    fn save_settings(&self, check_in: &CheckIn) -> Result<()> {
        self.save(check_in)
    }

    fn clear_settings(&self) -> Result<bool> {
        let path = self.settings_path();
        if path.exists() {
            fs::remove_file(&path)?;
            info!("Removed settings file {:?}", path);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_repo() -> (SettingsRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = YamlConnection::new(temp_dir.path()).expect("Failed to create connection");
        (SettingsRepository::new(Arc::new(connection)), temp_dir)
    }

    #[test]
    fn test_get_settings_creates_defaults() {
        let (repo, temp_dir) = setup_test_repo();

        let check_in = repo.get_settings().unwrap();
        assert_eq!(check_in.level, 35);
        assert_eq!(check_in.cups, 1);
        assert_eq!(check_in.name, "Dad");
        assert!(!check_in.dark);
        assert!(temp_dir.path().join("settings.yaml").exists());
    }

    #[test]
    fn test_settings_persist_across_instances() {
        let (repo, temp_dir) = setup_test_repo();

        let mut check_in = repo.get_settings().unwrap();
        check_in.level = 88;
        check_in.name = "Marcus".to_string();
        check_in.dark = true;
        repo.save_settings(&check_in).unwrap();

        // New repository against the same directory (simulating a restart)
        let connection = YamlConnection::new(temp_dir.path()).unwrap();
        let repo2 = SettingsRepository::new(Arc::new(connection));
        let reloaded = repo2.get_settings().unwrap();
        assert_eq!(reloaded.level, 88);
        assert_eq!(reloaded.name, "Marcus");
        assert!(reloaded.dark);
    }

    #[test]
    fn test_clear_settings() {
        let (repo, temp_dir) = setup_test_repo();

        // Nothing saved yet
        assert!(!repo.clear_settings().unwrap());

        repo.get_settings().unwrap();
        assert!(temp_dir.path().join("settings.yaml").exists());

        assert!(repo.clear_settings().unwrap());
        assert!(!temp_dir.path().join("settings.yaml").exists());

        // Reading again recreates defaults
        let check_in = repo.get_settings().unwrap();
        assert_eq!(check_in.level, 35);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (repo, temp_dir) = setup_test_repo();

        repo.save_settings(&CheckIn::default()).unwrap();
        assert!(!temp_dir.path().join("settings.tmp").exists());
    }
}
