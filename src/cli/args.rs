use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskman")]
#[command(about = "A small SQLite task database with a query catalog and data seeder")]
#[command(long_about = "taskman - users, tasks and statuses in one SQLite file

Creates the schema, seeds synthetic users and tasks, and runs a fixed
catalog of queries and updates against the database.

QUICK START:
  taskman init                      Create the tables
  taskman seed                      Add statuses and random users/tasks
  taskman tasks user 1              Tasks of user 1 with their status
  taskman users counts              Every user with their task count

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskman <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Path to the SQLite database file
    ///
    /// Overrides `database.path` from ~/.taskman/config.yaml.
    /// Defaults to task_management.db in the current directory.
    #[arg(long, global = true, env = "TASKMAN_DB")]
    pub database: Option<PathBuf>,

    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the status, users and tasks tables
    ///
    /// Safe to run any number of times; existing tables and rows are kept.
    Init,

    /// Seed statuses and synthetic users with tasks
    ///
    /// Inserts the statuses "new", "in progress" and "completed" if missing,
    /// then generates users with unique emails and random tasks. Everything
    /// is written in one transaction.
    ///
    /// # Examples
    ///
    ///   taskman seed
    ///   taskman seed --users 3 --tasks-per-user 2
    ///   taskman seed --rng-seed 42     Reproducible data
    Seed(SeedArgs),

    /// Seed the database and run every catalog query once
    ///
    /// Runs inside one transaction; any failure rolls everything back.
    Demo(SeedArgs),

    /// Task queries and updates
    #[command(alias = "t")]
    Tasks(TasksArgs),

    /// User queries and updates
    #[command(alias = "u")]
    Users(UsersArgs),

    /// Number of tasks per status
    ///
    /// Statuses without tasks are not listed.
    Stats,

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   taskman completions bash > ~/.local/share/bash-completion/completions/taskman
    ///   taskman completions zsh > ~/.zsh/completions/_taskman
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for seeding.
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Number of users to generate (default from config, 10)
    #[arg(long)]
    pub users: Option<usize>,

    /// Number of tasks per user (default from config, 5)
    #[arg(long)]
    pub tasks_per_user: Option<usize>,

    /// Seed for the random generator, for reproducible data
    #[arg(long)]
    pub rng_seed: Option<u64>,
}

#[derive(Args)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

/// Task subcommands.
#[derive(Subcommand)]
pub enum TaskCommands {
    /// Tasks of a user, with their status
    User {
        /// User ID
        user_id: i64,
    },

    /// Tasks in a status, with their owner
    ///
    /// # Examples
    ///
    ///   taskman tasks status new
    ///   taskman tasks status "in progress"
    Status {
        /// Status name
        name: String,
    },

    /// Tasks that are not completed
    Uncompleted,

    /// Tasks with no description
    NoDescription,

    /// Tasks of users whose email ends with a domain
    ///
    /// # Examples
    ///
    ///   taskman tasks domain example.com
    Domain {
        /// Email domain suffix
        domain: String,
    },

    /// Add a task for a user
    Add {
        /// Owner user ID
        user_id: i64,

        /// Task title
        title: String,

        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Initial status name
        #[arg(short, long, default_value = "new")]
        status: String,
    },

    /// Move a task to another status
    SetStatus {
        /// Task ID
        task_id: i64,

        /// New status name
        status: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        task_id: i64,
    },
}

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

/// User subcommands.
#[derive(Subcommand)]
pub enum UserCommands {
    /// Users who have no tasks
    Idle,

    /// Find users by email with a SQL LIKE pattern
    ///
    /// `%` matches any sequence, `_` a single character.
    ///
    /// # Examples
    ///
    ///   taskman users find '%@gmail.com'
    Find {
        /// LIKE pattern
        pattern: String,
    },

    /// Change a user's full name
    Rename {
        /// User ID
        user_id: i64,

        /// New full name
        name: String,
    },

    /// Users with their tasks in progress
    InProgress,

    /// Every user with their number of tasks
    Counts,

    /// Delete a user together with all of their tasks
    Delete {
        /// User ID
        user_id: i64,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration (default)
    Show,

    /// Write the default configuration to ~/.taskman/config.yaml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_task_add_defaults() {
        let cli = Cli::try_parse_from(["taskman", "tasks", "add", "1", "Write docs"]).unwrap();

        match cli.command {
            Commands::Tasks(TasksArgs {
                command:
                    TaskCommands::Add {
                        user_id,
                        title,
                        description,
                        status,
                    },
            }) => {
                assert_eq!(user_id, 1);
                assert_eq!(title, "Write docs");
                assert_eq!(description, "");
                assert_eq!(status, "new");
            }
            _ => panic!("expected tasks add"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "taskman", "users", "counts", "--database", "/tmp/x.db", "-o", "json", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("/tmp/x.db")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }
}
