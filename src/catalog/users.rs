//! User reads and writes.

use rusqlite::params;
use tracing::debug;

use super::Catalog;
use crate::error::TaskmanError;
use crate::model::{User, UserContact};

impl Catalog<'_> {
    /// Users who own no tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn users_without_tasks(&self) -> Result<Vec<UserContact>, TaskmanError> {
        self.query_rows(
            r"SELECT fullname, email
              FROM users
              WHERE NOT EXISTS (
                  SELECT 1 FROM tasks WHERE tasks.user_id = users.id
              )
              ORDER BY users.id",
            [],
            |row| {
                Ok(UserContact {
                    fullname: row.get(0)?,
                    email: row.get(1)?,
                })
            },
        )
    }

    /// Users whose email matches a SQL `LIKE` pattern.
    ///
    /// `%` matches any sequence and `_` any single character.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_users_by_email(&self, pattern: &str) -> Result<Vec<User>, TaskmanError> {
        self.query_rows(
            r"SELECT id, fullname, email
              FROM users
              WHERE email LIKE ?1
              ORDER BY id",
            [pattern],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    fullname: row.get(1)?,
                    email: row.get(2)?,
                })
            },
        )
    }

    /// Rename a user. Returns `0` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_user_name(&self, user_id: i64, new_name: &str) -> Result<usize, TaskmanError> {
        debug!("Renaming user {user_id}");
        Ok(self.conn.execute(
            "UPDATE users SET fullname = ?1 WHERE id = ?2",
            params![new_name, user_id],
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{add_user, setup};

    #[test]
    fn test_users_without_tasks_is_complement() {
        let db = setup();
        let catalog = db.catalog();
        let ann = add_user(&db, "Ann Archer", "ann@example.com");
        add_user(&db, "Bob Baker", "bob@example.com");
        add_user(&db, "Cy Cole", "cy@example.com");
        catalog.add_task(ann, "A", "", "new").unwrap();

        let idle: Vec<String> = catalog
            .users_without_tasks()
            .unwrap()
            .into_iter()
            .filter_map(|u| u.email)
            .collect();
        assert_eq!(idle, vec!["bob@example.com", "cy@example.com"]);
    }

    #[test]
    fn test_users_without_tasks_ignores_ownerless_tasks() {
        let db = setup();
        add_user(&db, "Bob Baker", "bob@example.com");
        db.connection()
            .execute(
                "INSERT INTO tasks (title, description, status_id, user_id) VALUES ('Orphan', '', 1, NULL)",
                [],
            )
            .unwrap();

        assert_eq!(db.catalog().users_without_tasks().unwrap().len(), 1);
    }

    #[test]
    fn test_find_users_by_email_pattern() {
        let db = setup();
        let catalog = db.catalog();
        let ann = add_user(&db, "Ann Archer", "ann@gmail.com");
        add_user(&db, "Bob Baker", "bob@example.com");
        let al = add_user(&db, "Al Adams", "al@gmail.com");

        let gmail: Vec<i64> = catalog
            .find_users_by_email("%@gmail.com")
            .unwrap()
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(gmail, vec![ann, al]);

        let two_letter = catalog.find_users_by_email("__@%").unwrap();
        assert_eq!(two_letter.len(), 1);
        assert_eq!(two_letter[0].fullname.as_deref(), Some("Al Adams"));

        assert!(catalog.find_users_by_email("%@yahoo.com").unwrap().is_empty());
    }

    #[test]
    fn test_update_user_name() {
        let db = setup();
        let catalog = db.catalog();
        let ann = add_user(&db, "Ann Archer", "ann@example.com");

        assert_eq!(catalog.update_user_name(ann, "Ann Updated").unwrap(), 1);
        let found = catalog.find_users_by_email("ann@example.com").unwrap();
        assert_eq!(found[0].fullname.as_deref(), Some("Ann Updated"));

        assert_eq!(catalog.update_user_name(999, "Nobody").unwrap(), 0);
    }
}
