//! Command implementations for taskman.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;
mod seed;
mod tasks;
mod users;

pub use completions::completions;
pub use config::config;
pub use seed::{demo, seed};
pub use tasks::tasks;
pub use users::users;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::error::TaskmanError;
use crate::output::{format_rows, format_tables};
use crate::storage::Database;

/// Execute init command
///
/// The schema is created when the database is opened; this re-runs the
/// idempotent creation and reports the resulting tables.
///
/// # Errors
///
/// Returns an error if schema creation fails or output formatting fails.
pub fn init(db: &Database, path: &Path, format: OutputFormat) -> Result<String, TaskmanError> {
    db.initialize_schema()?;
    let tables = db.table_names()?;
    format_tables(&path.display().to_string(), &tables, format)
}

/// Execute stats command
///
/// # Errors
///
/// Returns an error if the query fails or output formatting fails.
pub fn stats(db: &Database, format: OutputFormat) -> Result<String, TaskmanError> {
    let rows = db.catalog().task_count_by_status()?;
    format_rows(&rows, "Tasks by status", format)
}
