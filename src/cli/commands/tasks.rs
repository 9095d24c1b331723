//! Task command implementations.

use crate::catalog::Catalog;
use crate::cli::args::{OutputFormat, TaskCommands};
use crate::error::TaskmanError;
use crate::output::{format_change, format_created, format_rows};
use crate::storage::Database;

/// Execute task subcommands.
///
/// Writes run in their own transaction.
///
/// # Errors
///
/// Returns an error if the query or update fails, or output formatting fails.
pub fn tasks(
    db: &mut Database,
    cmd: TaskCommands,
    format: OutputFormat,
) -> Result<String, TaskmanError> {
    match cmd {
        TaskCommands::User { user_id } => {
            let rows = db.catalog().tasks_by_user(user_id)?;
            format_rows(&rows, &format!("Tasks of user {user_id}"), format)
        }
        TaskCommands::Status { name } => {
            let rows = db.catalog().tasks_by_status(&name)?;
            format_rows(&rows, &format!("Tasks in '{name}'"), format)
        }
        TaskCommands::Uncompleted => {
            let rows = db.catalog().uncompleted_tasks()?;
            format_rows(&rows, "Uncompleted tasks", format)
        }
        TaskCommands::NoDescription => {
            let rows = db.catalog().tasks_without_description()?;
            format_rows(&rows, "Tasks without description", format)
        }
        TaskCommands::Domain { domain } => {
            let rows = db.catalog().tasks_by_email_domain(&domain)?;
            format_rows(&rows, &format!("Tasks of users at {domain}"), format)
        }
        TaskCommands::Add {
            user_id,
            title,
            description,
            status,
        } => {
            let id = db.transaction(|tx| {
                Catalog::new(tx).add_task(user_id, &title, &description, &status)
            })?;
            format_created("task", id, format)
        }
        TaskCommands::SetStatus { task_id, status } => {
            let affected =
                db.transaction(|tx| Catalog::new(tx).update_task_status(task_id, &status))?;
            format_change(
                &format!("Moved task {task_id} to '{status}'"),
                affected,
                format,
            )
        }
        TaskCommands::Delete { task_id } => {
            let affected = db.transaction(|tx| Catalog::new(tx).delete_task(task_id))?;
            format_change(&format!("Deleted task {task_id}"), affected, format)
        }
    }
}
