//! # Backend Module
//!
//! Direct access to domain services and storage for the terminal frontend.
//! Everything is synchronous: there is no IO/REST layer, just services over
//! file-backed repositories rooted in one data directory.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod domain;
pub mod platform;
pub mod storage;

pub use storage::YamlConnection;

use domain::check_in_service::CheckInService;
use domain::share_service::ShareService;

/// Main backend struct that wires the services to one data directory.
pub struct Backend {
    pub check_in_service: CheckInService,
    pub share_service: ShareService,
}

impl Backend {
    /// Create a backend rooted at the platform data directory.
    pub fn new() -> Result<Self> {
        Self::with_base_directory(default_data_directory()?)
    }

    /// Create a backend rooted at an explicit directory (tests, --data-dir).
    pub fn with_base_directory<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let connection = Arc::new(YamlConnection::new(base_directory)?);

        let check_in_service = CheckInService::new(connection.clone());
        let share_service = ShareService::new(connection);

        Ok(Backend {
            check_in_service,
            share_service,
        })
    }
}

/// Resolve the per-user data directory for this app.
fn default_data_directory() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("", "", "grump-factor")
        .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory for this platform"))?;
    Ok(project_dirs.data_dir().to_path_buf())
}
