//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, PowerShell and
//! elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TaskmanError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TaskmanError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "taskman", &mut buf);
    String::from_utf8(buf).map_err(|e| TaskmanError::Config(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("taskman"));
    }

    #[test]
    fn test_generate_zsh() {
        let script = completions(Shell::Zsh).unwrap();
        assert!(script.contains("#compdef taskman"));
    }
}
