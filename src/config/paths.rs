//! Path resolution for taskman configuration.
//!
//! Configuration lives in `~/.taskman/`:
//! - `config.yaml` - Main configuration file
//!
//! The database itself is not stored here; its location comes from the
//! configuration or the `--database` flag.

use std::path::PathBuf;

use crate::error::TaskmanError;

/// Paths to taskman configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.taskman/`
    pub root: PathBuf,
    /// Config file: `~/.taskman/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskmanError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskmanError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".taskman")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskmanError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskmanError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
