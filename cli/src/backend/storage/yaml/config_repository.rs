//! # YAML Config Repository
//!
//! Host configuration stored as `config.yaml` at the root of the data
//! directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! base_url: "https://grump-factor.app/"
//! sms_recipient: "+15551234567"
//! app_version: "1.4.0"
//! data_format_version: "1.0"
//! created_at: "2025-01-21T19:30:00Z"
//! updated_at: "2025-01-21T19:35:00Z"
//! ```

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use super::connection::YamlConnection;

const CONFIG_FILE: &str = "config.yaml";

/// Link base used when no deployment URL has been configured.
const DEFAULT_BASE_URL: &str = "https://grump-factor.app/";

/// Host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL share links are built on
    pub base_url: String,
    /// Preconfigured SMS recipient; None lets the messaging app pick a contact
    pub sms_recipient: Option<String>,
    /// App version mirrored into share links as the `v` parameter
    pub app_version: Option<String>,
    /// Data format version for future migrations
    pub data_format_version: String,
    /// When the config was first created
    pub created_at: String,
    /// When the config was last updated
    pub updated_at: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sms_recipient: None,
            app_version: None,
            data_format_version: "1.0".to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Storage trait for host configuration operations.
pub trait ConfigStorage: Send + Sync {
    /// Get the configuration, creating defaults on first read
    fn get_config(&self) -> Result<AppConfig>;

    /// Update the configuration
    fn update_config(&self, config: &AppConfig) -> Result<()>;
}

/// File-backed config repository.
#[derive(Clone)]
pub struct ConfigRepository {
    connection: Arc<YamlConnection>,
}

impl ConfigRepository {
    /// Create a new config repository.
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        Self { connection }
    }

    fn config_path(&self) -> PathBuf {
        self.connection.base_directory().join(CONFIG_FILE)
    }

    /// Load config from file, creating defaults if it doesn't exist.
    fn load_or_create(&self) -> Result<AppConfig> {
        let path = self.config_path();

        if path.exists() {
            let yaml_content = fs::read_to_string(&path)?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)?;
            debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            let config = AppConfig::default();
            self.save(&config)?;
            info!("Created default config at {:?}", path);
            Ok(config)
        }
    }

    /// Save config to file.
    fn save(&self, config: &AppConfig) -> Result<()> {
        let path = self.config_path();
        let base_dir = self.connection.base_directory();

        if !base_dir.exists() {
            fs::create_dir_all(base_dir)?;
        }

        let yaml_content = serde_yaml::to_string(config)?;

        // Atomic write: temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &path)?;

        debug!("Saved config to {:?}", path);
        Ok(())
    }
}

impl ConfigStorage for ConfigRepository {
    fn get_config(&self) -> Result<AppConfig> {
        self.load_or_create()
    }

    fn update_config(&self, config: &AppConfig) -> Result<()> {
        let mut updated_config = config.clone();
        updated_config.updated_at = Utc::now().to_rfc3339();

        self.save(&updated_config)?;
        info!("Updated config");
        Ok(())
    }
}
