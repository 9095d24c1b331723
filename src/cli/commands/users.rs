//! User command implementations.

use crate::catalog::Catalog;
use crate::cli::args::{OutputFormat, UserCommands};
use crate::error::TaskmanError;
use crate::output::{format_change, format_rows};
use crate::storage::Database;

/// Execute user subcommands.
///
/// # Errors
///
/// Returns an error if the query or update fails, or output formatting fails.
pub fn users(
    db: &mut Database,
    cmd: UserCommands,
    format: OutputFormat,
) -> Result<String, TaskmanError> {
    match cmd {
        UserCommands::Idle => {
            let rows = db.catalog().users_without_tasks()?;
            format_rows(&rows, "Users without tasks", format)
        }
        UserCommands::Find { pattern } => {
            let rows = db.catalog().find_users_by_email(&pattern)?;
            format_rows(&rows, &format!("Users matching '{pattern}'"), format)
        }
        UserCommands::Rename { user_id, name } => {
            let affected =
                db.transaction(|tx| Catalog::new(tx).update_user_name(user_id, &name))?;
            format_change(&format!("Renamed user {user_id}"), affected, format)
        }
        UserCommands::InProgress => {
            let rows = db.catalog().users_and_tasks_in_progress()?;
            format_rows(&rows, "Tasks in progress", format)
        }
        UserCommands::Counts => {
            let rows = db.catalog().users_and_task_count()?;
            format_rows(&rows, "Tasks per user", format)
        }
        UserCommands::Delete { user_id } => {
            let affected = db.delete_user(user_id)?;
            format_change(
                &format!("Deleted user {user_id} and their tasks"),
                affected,
                format,
            )
        }
    }
}
