use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// YamlConnection manages the data directory the YAML repositories write to.
#[derive(Clone)]
pub struct YamlConnection {
    base_directory: PathBuf,
}

impl YamlConnection {
    /// Create a connection, creating the base directory if it doesn't exist.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// The directory holding settings.yaml and config.yaml.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let connection = YamlConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested);
    }
}
