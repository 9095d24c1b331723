//! Table definitions for the task database.
//!
//! Every statement uses `IF NOT EXISTS`, so [`initialize`] may run on each
//! open without touching an existing database.

use rusqlite::Connection;
use tracing::debug;

use crate::error::TaskmanError;

/// Tables owned by taskman, in creation order.
pub const TABLES: [&str; 3] = ["status", "users", "tasks"];

/// Schema for the `status`, `users` and `tasks` tables.
///
/// Tasks go away with their owner. A status still referenced by a task
/// cannot be deleted.
const SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS status (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        fullname VARCHAR(100),
        email VARCHAR(100) UNIQUE
    );

    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(100),
        description TEXT,
        status_id INTEGER,
        user_id INTEGER,
        FOREIGN KEY (status_id) REFERENCES status(id) ON DELETE RESTRICT,
        FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
    );
";

/// Create the three tables if they are absent.
///
/// # Errors
///
/// Returns an error if the engine rejects the statements.
pub fn initialize(conn: &Connection) -> Result<(), TaskmanError> {
    debug!("Ensuring schema for tables {:?}", TABLES);
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// List the user tables present in the database, sorted by name.
///
/// # Errors
///
/// Returns an error if `sqlite_master` cannot be read.
pub fn table_names(conn: &Connection) -> Result<Vec<String>, TaskmanError> {
    let mut stmt = conn.prepare(
        r"SELECT name FROM sqlite_master
          WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
          ORDER BY name",
    )?;

    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;

    Ok(names)
}
