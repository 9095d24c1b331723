//! Task reads and writes.

use rusqlite::{params, Row};
use tracing::debug;

use super::{escape_like, Catalog};
use crate::error::TaskmanError;
use crate::model::{StatusKind, TaskTitle, TaskWithContact, TaskWithOwner, UserTask};

impl Catalog<'_> {
    /// All tasks of one user, each with its status name.
    ///
    /// Empty if the user has no tasks or does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn tasks_by_user(&self, user_id: i64) -> Result<Vec<UserTask>, TaskmanError> {
        self.query_rows(
            r"SELECT tasks.id, tasks.title, tasks.description, status.name
              FROM tasks
              JOIN status ON tasks.status_id = status.id
              WHERE tasks.user_id = ?1
              ORDER BY tasks.id",
            [user_id],
            row_to_user_task,
        )
    }

    /// Tasks in the named status, with the owner's full name.
    ///
    /// Empty if the status name is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn tasks_by_status(&self, status_name: &str) -> Result<Vec<TaskWithOwner>, TaskmanError> {
        self.query_rows(
            r"SELECT tasks.id, tasks.title, tasks.description, users.fullname
              FROM tasks
              JOIN status ON tasks.status_id = status.id
              JOIN users ON tasks.user_id = users.id
              WHERE status.name = ?1
              ORDER BY tasks.id",
            [status_name],
            row_to_task_with_owner,
        )
    }

    /// Move a task to the named status.
    ///
    /// Returns the number of tasks changed, `0` if the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskmanError::UnknownStatus`] if the status name has no row,
    /// or a database error if the update fails.
    pub fn update_task_status(
        &self,
        task_id: i64,
        new_status: &str,
    ) -> Result<usize, TaskmanError> {
        let status_id = self.status_id(new_status)?;
        debug!("Setting task {task_id} to status '{new_status}'");

        Ok(self.conn.execute(
            "UPDATE tasks SET status_id = ?1 WHERE id = ?2",
            [status_id, task_id],
        )?)
    }

    /// Insert a task for a user and return its id.
    ///
    /// The status is resolved by name at insert time; callers that have no
    /// preference pass [`StatusKind::New`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskmanError::UnknownStatus`] if the status name has no row,
    /// or a database error (a constraint violation if the user is missing).
    pub fn add_task(
        &self,
        user_id: i64,
        title: &str,
        description: &str,
        status_name: &str,
    ) -> Result<i64, TaskmanError> {
        let status_id = self.status_id(status_name)?;

        self.conn.execute(
            r"INSERT INTO tasks (title, description, status_id, user_id)
              VALUES (?1, ?2, ?3, ?4)",
            params![title, description, status_id, user_id],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Added task {id} for user {user_id}");
        Ok(id)
    }

    /// Tasks whose status is anything but `completed`.
    ///
    /// Tasks without a status are included.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn uncompleted_tasks(&self) -> Result<Vec<TaskWithOwner>, TaskmanError> {
        self.query_rows(
            r"SELECT tasks.id, tasks.title, tasks.description, users.fullname
              FROM tasks
              LEFT JOIN status ON tasks.status_id = status.id
              JOIN users ON tasks.user_id = users.id
              WHERE status.name IS NOT ?1
              ORDER BY tasks.id",
            [StatusKind::Completed.as_str()],
            row_to_task_with_owner,
        )
    }

    /// Delete a task. Returns `0` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_task(&self, task_id: i64) -> Result<usize, TaskmanError> {
        debug!("Deleting task {task_id}");
        Ok(self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", [task_id])?)
    }

    /// Tasks whose owner's email ends with `domain`.
    ///
    /// The domain is matched literally; `%` and `_` in it are not wildcards.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn tasks_by_email_domain(
        &self,
        domain: &str,
    ) -> Result<Vec<TaskWithContact>, TaskmanError> {
        let pattern = format!("%{}", escape_like(domain));

        self.query_rows(
            r"SELECT tasks.id, tasks.title, tasks.description, users.fullname, users.email
              FROM tasks
              JOIN users ON tasks.user_id = users.id
              WHERE users.email LIKE ?1 ESCAPE '\'
              ORDER BY tasks.id",
            [pattern],
            |row| {
                Ok(TaskWithContact {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                    fullname: row.get(3)?,
                    email: row.get(4)?,
                })
            },
        )
    }

    /// Tasks with a NULL or empty description.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn tasks_without_description(&self) -> Result<Vec<TaskTitle>, TaskmanError> {
        self.query_rows(
            r"SELECT id, title
              FROM tasks
              WHERE description IS NULL OR description = ''
              ORDER BY id",
            [],
            |row| {
                Ok(TaskTitle {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            },
        )
    }
}

fn row_to_user_task(row: &Row<'_>) -> rusqlite::Result<UserTask> {
    Ok(UserTask {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: row.get(3)?,
    })
}

fn row_to_task_with_owner(row: &Row<'_>) -> rusqlite::Result<TaskWithOwner> {
    Ok(TaskWithOwner {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        owner: row.get(3)?,
    })
}
