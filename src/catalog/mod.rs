//! Query catalog for the task database.
//!
//! [`Catalog`] borrows a connection and exposes the fixed set of read and
//! write operations. It never opens, commits or closes anything itself: a
//! `rusqlite::Transaction` derefs to a `Connection`, so callers that need a
//! unit of work build the catalog from the transaction instead.
//!
//! Update and delete operations report the number of affected rows. An id
//! that matches nothing is not an error and simply yields `0`.

mod reports;
mod tasks;
mod users;

use rusqlite::{Connection, OptionalExtension, Params, Row};

use crate::error::TaskmanError;

/// Parameterized operations over the `status`, `users` and `tasks` tables.
#[derive(Clone, Copy)]
pub struct Catalog<'c> {
    conn: &'c Connection,
}

impl<'c> Catalog<'c> {
    /// Bind a catalog to a connection or an open transaction.
    #[must_use]
    pub const fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Resolve a status name to its id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskmanError::UnknownStatus`] if no status has that name.
    pub fn status_id(&self, name: &str) -> Result<i64, TaskmanError> {
        self.conn
            .query_row("SELECT id FROM status WHERE name = ?1", [name], |row| {
                row.get(0)
            })
            .optional()?
            .ok_or_else(|| TaskmanError::UnknownStatus(name.to_string()))
    }

    fn query_rows<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>, TaskmanError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, f)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Escape `%`, `_` and `\` so a string matches literally in
/// `LIKE ... ESCAPE '\'`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::seed::seed_statuses;
    use crate::storage::Database;

    /// In-memory database with the canonical statuses.
    pub fn setup() -> Database {
        let db = Database::open_in_memory().unwrap();
        seed_statuses(db.connection()).unwrap();
        db
    }

    pub fn add_user(db: &Database, fullname: &str, email: &str) -> i64 {
        db.connection()
            .execute(
                "INSERT INTO users (fullname, email) VALUES (?1, ?2)",
                [fullname, email],
            )
            .unwrap();
        db.connection().last_insert_rowid()
    }

    pub fn count(db: &Database, table: &str) -> i64 {
        db.connection()
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .unwrap()
    }
}
