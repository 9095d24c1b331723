use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use taskman::cli::args::{Cli, Commands};
use taskman::cli::commands;
use taskman::config::{Config, Paths};
use taskman::error::TaskmanError;
use taskman::storage::Database;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taskman={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), TaskmanError> {
    let config = match Paths::new() {
        Ok(paths) => Config::load_from_path(&paths.config_file)?,
        Err(_) => Config::default(),
    };
    config.general.color.apply();

    let format = cli.output.unwrap_or(config.general.default_output);
    let path = config.database_path(cli.database.as_deref());

    let output = match cli.command {
        Commands::Completions { shell } => commands::completions(shell)?,
        Commands::Config(args) => commands::config(&config, args.command, format)?,
        Commands::Init => with_database(&path, |db| commands::init(db, &path, format))?,
        Commands::Seed(args) => {
            with_database(&path, |db| commands::seed(db, &args, &config.seed, format))?
        }
        Commands::Demo(args) => {
            with_database(&path, |db| commands::demo(db, &args, &config.seed, format))?
        }
        Commands::Tasks(args) => with_database(&path, |db| commands::tasks(db, args.command, format))?,
        Commands::Users(args) => with_database(&path, |db| commands::users(db, args.command, format))?,
        Commands::Stats => with_database(&path, |db| commands::stats(db, format))?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Open the database, run one command against it and close it.
///
/// On error the connection is released when `db` is dropped.
fn with_database<F>(path: &Path, f: F) -> Result<String, TaskmanError>
where
    F: FnOnce(&mut Database) -> Result<String, TaskmanError>,
{
    let mut db = Database::open_at(path)?;
    let output = f(&mut db)?;
    db.close()?;
    Ok(output)
}
