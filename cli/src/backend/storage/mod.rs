//! Storage layer: trait definitions and the YAML file backend.

pub mod traits;
pub mod yaml;

pub use traits::SettingsStorage;
pub use yaml::YamlConnection;
