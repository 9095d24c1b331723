//! Configuration commands.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::TaskmanError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized or written.
pub fn config(
    config: &Config,
    cmd: Option<ConfigCommands>,
    format: OutputFormat,
) -> Result<String, TaskmanError> {
    match cmd {
        None | Some(ConfigCommands::Show) => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => serde_yaml::to_string(config)
                .map_err(|e| TaskmanError::Config(format!("Failed to serialize config: {e}"))),
        },
        Some(ConfigCommands::Init { force }) => {
            let paths = Paths::new()?;
            if paths.config_file.exists() && !force {
                return Err(TaskmanError::Config(format!(
                    "{} already exists. Use --force to overwrite it.",
                    paths.config_file.display()
                )));
            }

            let written = Config::default().save()?;
            Ok(format!(
                "{} Wrote default configuration to {}",
                "✓".green(),
                written.display()
            ))
        }
    }
}
