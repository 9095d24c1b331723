//! Aggregate and cross-table reports.

use super::Catalog;
use crate::error::TaskmanError;
use crate::model::{StatusCount, StatusKind, UserTaskCount, UserTaskDetail};

impl Catalog<'_> {
    /// Number of tasks per status.
    ///
    /// Only statuses with at least one task appear.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn task_count_by_status(&self) -> Result<Vec<StatusCount>, TaskmanError> {
        self.query_rows(
            r"SELECT status.name, COUNT(tasks.id) AS task_count
              FROM tasks
              JOIN status ON tasks.status_id = status.id
              GROUP BY status.id, status.name
              ORDER BY status.id",
            [],
            |row| {
                Ok(StatusCount {
                    status: row.get(0)?,
                    count: row.get(1)?,
                })
            },
        )
    }

    /// Users with the tasks they have in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn users_and_tasks_in_progress(&self) -> Result<Vec<UserTaskDetail>, TaskmanError> {
        self.query_rows(
            r"SELECT users.fullname, tasks.title, tasks.description
              FROM tasks
              JOIN users ON tasks.user_id = users.id
              JOIN status ON tasks.status_id = status.id
              WHERE status.name = ?1
              ORDER BY tasks.id",
            [StatusKind::InProgress.as_str()],
            |row| {
                Ok(UserTaskDetail {
                    fullname: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get(2)?,
                })
            },
        )
    }

    /// Every user once, with the number of tasks they own (possibly 0).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn users_and_task_count(&self) -> Result<Vec<UserTaskCount>, TaskmanError> {
        self.query_rows(
            r"SELECT users.id, users.fullname, COUNT(tasks.id) AS task_count
              FROM users
              LEFT JOIN tasks ON users.id = tasks.user_id
              GROUP BY users.id
              ORDER BY users.id",
            [],
            |row| {
                Ok(UserTaskCount {
                    user_id: row.get(0)?,
                    fullname: row.get(1)?,
                    task_count: row.get(2)?,
                })
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{add_user, count, setup};

    #[test]
    fn test_task_count_by_status_omits_empty_statuses() {
        let db = setup();
        let catalog = db.catalog();
        let ann = add_user(&db, "Ann Archer", "ann@example.com");
        catalog.add_task(ann, "A", "", "new").unwrap();
        catalog.add_task(ann, "B", "", "new").unwrap();
        catalog.add_task(ann, "C", "", "completed").unwrap();

        let counts = catalog.task_count_by_status().unwrap();
        let pairs: Vec<(&str, i64)> = counts
            .iter()
            .map(|c| (c.status.as_str(), c.count))
            .collect();
        assert_eq!(pairs, vec![("new", 2), ("completed", 1)]);

        let total: i64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, count(&db, "tasks"));
    }

    #[test]
    fn test_task_count_by_status_skips_tasks_without_status() {
        let db = setup();
        let ann = add_user(&db, "Ann Archer", "ann@example.com");
        db.catalog().add_task(ann, "A", "", "new").unwrap();
        db.connection()
            .execute(
                "INSERT INTO tasks (title, description, status_id, user_id) VALUES ('Loose', '', NULL, ?1)",
                [ann],
            )
            .unwrap();

        let counts = db.catalog().task_count_by_status().unwrap();
        let total: i64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 1);
        assert_eq!(count(&db, "tasks"), 2);
    }

    #[test]
    fn test_users_and_tasks_in_progress() {
        let db = setup();
        let catalog = db.catalog();
        let ann = add_user(&db, "Ann Archer", "ann@example.com");
        let bob = add_user(&db, "Bob Baker", "bob@example.com");
        catalog.add_task(ann, "Draft", "writing", "in progress").unwrap();
        catalog.add_task(ann, "Idea", "", "new").unwrap();
        catalog.add_task(bob, "Build", "compiling", "in progress").unwrap();

        let rows = catalog.users_and_tasks_in_progress().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fullname.as_deref(), Some("Ann Archer"));
        assert_eq!(rows[0].title.as_deref(), Some("Draft"));
        assert_eq!(rows[1].fullname.as_deref(), Some("Bob Baker"));
        assert_eq!(rows[1].description.as_deref(), Some("compiling"));
    }

    #[test]
    fn test_users_and_task_count_includes_idle_users() {
        let db = setup();
        let catalog = db.catalog();
        let ann = add_user(&db, "Ann Archer", "ann@example.com");
        let bob = add_user(&db, "Bob Baker", "bob@example.com");
        for title in ["A", "B", "C"] {
            catalog.add_task(ann, title, "", "new").unwrap();
        }

        let counts = catalog.users_and_task_count().unwrap();
        let pairs: Vec<(i64, i64)> = counts.iter().map(|c| (c.user_id, c.task_count)).collect();
        assert_eq!(pairs, vec![(ann, 3), (bob, 0)]);
    }

    #[test]
    fn test_users_and_task_count_keeps_namesakes_apart() {
        let db = setup();
        let catalog = db.catalog();
        let first = add_user(&db, "Sam Smith", "sam1@example.com");
        add_user(&db, "Sam Smith", "sam2@example.com");
        catalog.add_task(first, "A", "", "new").unwrap();

        let counts = catalog.users_and_task_count().unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].task_count, 1);
        assert_eq!(counts[1].task_count, 0);
    }
}
