//! Seeding of the status vocabulary and synthetic users and tasks.
//!
//! Nothing here opens or commits a transaction. Callers wrap seeding in
//! [`Database::transaction`](crate::storage::Database::transaction) when a
//! partial seed must not be kept.

mod generator;

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rusqlite::{params, Connection};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::TaskmanError;
use crate::model::StatusKind;

pub use generator::{Generator, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS};

/// Rows written by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub statuses: usize,
    pub users: usize,
    pub tasks: usize,
}

/// Insert the canonical statuses, skipping names that already exist.
///
/// Returns the number of statuses actually inserted.
///
/// # Errors
///
/// Returns an error if an insert fails.
pub fn seed_statuses(conn: &Connection) -> Result<usize, TaskmanError> {
    let mut stmt = conn.prepare("INSERT OR IGNORE INTO status (name) VALUES (?1)")?;

    let mut inserted = 0;
    for kind in StatusKind::ALL {
        inserted += stmt.execute([kind.as_str()])?;
    }

    info!("Seeded {inserted} new statuses");
    Ok(inserted)
}

/// Generates users with unique emails and tasks with random statuses.
pub struct Seeder<R: Rng> {
    faker: Generator<R>,
    issued: HashSet<String>,
}

impl Seeder<StdRng> {
    /// Create a seeder, reproducible when `rng_seed` is given.
    #[must_use]
    pub fn new(rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }
}

impl<R: Rng> Seeder<R> {
    /// Create a seeder drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            faker: Generator::new(rng),
            issued: HashSet::new(),
        }
    }

    /// Insert `user_count` users, each with `tasks_per_user` tasks.
    ///
    /// Every task gets a status picked uniformly from the canonical
    /// statuses present in the database.
    ///
    /// # Errors
    ///
    /// Returns [`TaskmanError::MissingStatuses`] if no canonical status
    /// exists, or a database error if an insert fails.
    pub fn seed_users_and_tasks(
        &mut self,
        conn: &Connection,
        user_count: usize,
        tasks_per_user: usize,
    ) -> Result<SeedReport, TaskmanError> {
        let status_ids = canonical_status_ids(conn)?;
        if status_ids.is_empty() {
            return Err(TaskmanError::MissingStatuses);
        }

        let mut insert_user = conn.prepare("INSERT INTO users (fullname, email) VALUES (?1, ?2)")?;
        let mut insert_task = conn.prepare(
            "INSERT INTO tasks (title, description, status_id, user_id) VALUES (?1, ?2, ?3, ?4)",
        )?;

        let mut report = SeedReport::default();
        for _ in 0..user_count {
            let fullname = self.faker.fullname();
            let email = self.unique_email(conn)?;

            insert_user.execute(params![fullname, email])?;
            let user_id = conn.last_insert_rowid();
            report.users += 1;
            debug!("Seeded user {user_id} <{email}>");

            for _ in 0..tasks_per_user {
                let title = self.faker.title();
                let description = self.faker.description();
                let status_id = self
                    .faker
                    .pick(&status_ids)
                    .copied()
                    .ok_or(TaskmanError::MissingStatuses)?;

                insert_task.execute(params![title, description, status_id, user_id])?;
                report.tasks += 1;
            }
        }

        info!("Seeded {} users and {} tasks", report.users, report.tasks);
        Ok(report)
    }

    /// An email not issued by this seeder and not present in `users`.
    fn unique_email(&mut self, conn: &Connection) -> Result<String, TaskmanError> {
        let base = self.faker.email();
        let mut candidate = base.clone();

        while self.issued.contains(&candidate) || email_taken(conn, &candidate)? {
            candidate = self.faker.email_variant(&base);
        }

        self.issued.insert(candidate.clone());
        Ok(candidate)
    }
}

fn email_taken(conn: &Connection, email: &str) -> Result<bool, TaskmanError> {
    Ok(conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)",
        [email],
        |row| row.get(0),
    )?)
}

fn canonical_status_ids(conn: &Connection) -> Result<Vec<i64>, TaskmanError> {
    let mut stmt = conn.prepare("SELECT id FROM status WHERE name IN (?1, ?2, ?3) ORDER BY id")?;
    let [a, b, c] = StatusKind::ALL.map(StatusKind::as_str);

    let ids = stmt
        .query_map([a, b, c], |row| row.get(0))?
        .collect::<Result<Vec<i64>, _>>()?;

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn count(db: &Database, sql: &str) -> i64 {
        db.connection().query_row(sql, [], |row| row.get(0)).unwrap()
    }

    #[test]
    fn test_seed_statuses_idempotent() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(seed_statuses(db.connection()).unwrap(), 3);
        assert_eq!(seed_statuses(db.connection()).unwrap(), 0);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM status"), 3);
    }

    #[test]
    fn test_seed_statuses_fills_gaps() {
        let db = Database::open_in_memory().unwrap();
        db.connection()
            .execute("INSERT INTO status (name) VALUES ('completed')", [])
            .unwrap();

        assert_eq!(seed_statuses(db.connection()).unwrap(), 2);
    }

    #[test]
    fn test_seed_users_and_tasks_counts() {
        let db = Database::open_in_memory().unwrap();
        seed_statuses(db.connection()).unwrap();

        let report = Seeder::new(Some(1))
            .seed_users_and_tasks(db.connection(), 4, 3)
            .unwrap();

        assert_eq!(report.users, 4);
        assert_eq!(report.tasks, 12);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM users"), 4);
        assert_eq!(count(&db, "SELECT COUNT(*) FROM tasks"), 12);
        assert_eq!(
            count(
                &db,
                "SELECT COUNT(*) FROM tasks JOIN status ON tasks.status_id = status.id"
            ),
            12
        );
    }

    #[test]
    fn test_seeded_text_respects_bounds() {
        let db = Database::open_in_memory().unwrap();
        seed_statuses(db.connection()).unwrap();
        Seeder::new(Some(2))
            .seed_users_and_tasks(db.connection(), 5, 5)
            .unwrap();

        assert_eq!(
            count(
                &db,
                &format!(
                    "SELECT COUNT(*) FROM tasks WHERE length(description) > {MAX_DESCRIPTION_CHARS} OR length(title) > {MAX_TITLE_CHARS}"
                )
            ),
            0
        );
        assert_eq!(
            count(&db, "SELECT COUNT(*) FROM users WHERE fullname IS NULL OR email IS NULL"),
            0
        );
    }

    #[test]
    fn test_emails_unique_across_runs() {
        let db = Database::open_in_memory().unwrap();
        seed_statuses(db.connection()).unwrap();

        // Same seed twice forces every first-choice email to collide.
        Seeder::new(Some(3))
            .seed_users_and_tasks(db.connection(), 20, 0)
            .unwrap();
        Seeder::new(Some(3))
            .seed_users_and_tasks(db.connection(), 20, 0)
            .unwrap();

        assert_eq!(count(&db, "SELECT COUNT(DISTINCT email) FROM users"), 40);
    }

    #[test]
    fn test_same_seed_same_users() {
        let first = Database::open_in_memory().unwrap();
        let second = Database::open_in_memory().unwrap();
        for db in [&first, &second] {
            seed_statuses(db.connection()).unwrap();
            Seeder::new(Some(42))
                .seed_users_and_tasks(db.connection(), 3, 2)
                .unwrap();
        }

        let users = |db: &Database| db.catalog().find_users_by_email("%").unwrap();
        assert_eq!(users(&first), users(&second));
        assert_eq!(
            first.catalog().task_count_by_status().unwrap(),
            second.catalog().task_count_by_status().unwrap()
        );
    }

    #[test]
    fn test_seed_requires_statuses() {
        let db = Database::open_in_memory().unwrap();

        let err = Seeder::new(Some(4))
            .seed_users_and_tasks(db.connection(), 1, 1)
            .unwrap_err();

        assert!(matches!(err, TaskmanError::MissingStatuses));
        assert_eq!(count(&db, "SELECT COUNT(*) FROM users"), 0);
    }
}
