//! # YAML Storage
//!
//! File-based storage backend using one YAML file per concern inside the
//! data directory:
//!
//! ```text
//! data/
//! ├── settings.yaml    ← persisted check-in state
//! └── config.yaml      ← host configuration
//! ```

mod config_repository;
mod connection;
mod settings_repository;

pub use config_repository::{AppConfig, ConfigRepository, ConfigStorage};
pub use connection::YamlConnection;
pub use settings_repository::SettingsRepository;
