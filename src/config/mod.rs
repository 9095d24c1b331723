//! Configuration management for taskman.
//!
//! This module handles loading and saving configuration from `~/.taskman/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, DatabaseConfig, GeneralConfig, SeedConfig};
