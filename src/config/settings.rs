//! Configuration settings for taskman.
//!
//! Settings are loaded from `~/.taskman/config.yaml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TaskmanError;
use crate::storage::DEFAULT_DATABASE;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Database location.
    pub database: DatabaseConfig,
    /// Seeding defaults.
    pub seed: SeedConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the `SQLite` file, relative to the working directory unless
    /// absolute.
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

/// Defaults for `taskman seed` and `taskman demo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of users to generate.
    #[serde(default = "default_users")]
    pub users: usize,
    /// Number of tasks generated for each user.
    #[serde(default = "default_tasks_per_user")]
    pub tasks_per_user: usize,
    /// Fixed RNG seed for reproducible data.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE)
}

const fn default_users() -> usize {
    10
}

const fn default_tasks_per_user() -> usize {
    5
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
            tasks_per_user: default_tasks_per_user(),
            rng_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TaskmanError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TaskmanError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaskmanError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TaskmanError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<PathBuf, TaskmanError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)?;
        Ok(paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), TaskmanError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TaskmanError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TaskmanError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Database path to use, preferring an explicit override.
    #[must_use]
    pub fn database_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(|| self.database.path.clone(), Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.database.path, PathBuf::from("task_management.db"));
        assert_eq!(config.seed.users, 10);
        assert_eq!(config.seed.tasks_per_user, 5);
        assert_eq!(config.seed.rng_seed, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.seed.users, 10);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.seed.users = 3;
        config.seed.rng_seed = Some(99);
        config.database.path = PathBuf::from("/var/lib/taskman/tasks.db");

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.seed.users, 3);
        assert_eq!(loaded.seed.rng_seed, Some(99));
        assert_eq!(loaded.database.path, PathBuf::from("/var/lib/taskman/tasks.db"));
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
seed:
  tasks_per_user: 2
general:
  default_output: json
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom values should be loaded
        assert_eq!(config.seed.tasks_per_user, 2);
        assert_eq!(config.general.default_output, OutputFormat::Json);
        // Defaults should be used for missing fields
        assert_eq!(config.seed.users, 10);
        assert_eq!(config.database.path, PathBuf::from(DEFAULT_DATABASE));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "seed: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, TaskmanError::Config(_)));
    }

    #[test]
    fn test_database_path_override() {
        let config = Config::default();

        assert_eq!(config.database_path(None), PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(
            config.database_path(Some(Path::new("/tmp/other.db"))),
            PathBuf::from("/tmp/other.db")
        );
    }
}
