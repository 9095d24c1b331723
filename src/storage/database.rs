//! `SQLite` database connection and operations.
//!
//! The database defaults to `task_management.db` in the working directory and
//! contains three tables:
//! - `status`: task lifecycle labels
//! - `users`: task owners
//! - `tasks`: units of work, removed together with their owner

use std::path::Path;

use rusqlite::{Connection, Transaction};
use tracing::{debug, error, info};

use crate::catalog::Catalog;
use crate::error::TaskmanError;

use super::schema;

/// Default database file name, relative to the working directory.
pub const DEFAULT_DATABASE: &str = "task_management.db";

/// Database connection wrapper.
///
/// Owns the single connection used for the life of the process. The
/// connection is closed when the wrapper is dropped or [`Database::close`]
/// is called.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at a specific path.
    ///
    /// Creates the database file and the schema if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn open_at(path: &Path) -> Result<Self, TaskmanError> {
        info!("Opening database {}", path.display());
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be created.
    pub fn open_in_memory() -> Result<Self, TaskmanError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, TaskmanError> {
        // Enable foreign keys
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let db = Self { conn };
        db.initialize_schema()?;

        Ok(db)
    }

    /// Create the `status`, `users` and `tasks` tables if they are absent.
    ///
    /// Safe to call any number of times.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects the schema.
    pub fn initialize_schema(&self) -> Result<(), TaskmanError> {
        schema::initialize(&self.conn)
    }

    /// List the tables present in the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the table list cannot be read.
    pub fn table_names(&self) -> Result<Vec<String>, TaskmanError> {
        schema::table_names(&self.conn)
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Query catalog bound to this connection.
    #[must_use]
    pub const fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.conn)
    }

    /// Run `f` as one unit of work.
    ///
    /// Commits when `f` returns `Ok` and rolls back when it returns `Err`.
    /// The error from `f` is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or an error if the transaction cannot be
    /// started or committed.
    pub fn transaction<T, F>(&mut self, f: F) -> Result<T, TaskmanError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, TaskmanError>,
    {
        let tx = self.conn.transaction()?;

        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                debug!("Transaction committed");
                Ok(value)
            }
            Err(e) => {
                error!("Rolling back transaction: {e}");
                if let Err(rollback_err) = tx.rollback() {
                    error!("Rollback failed: {rollback_err}");
                }
                Err(e)
            }
        }
    }

    /// Delete a user; their tasks are removed with them.
    ///
    /// Returns the number of users deleted (0 if the id is absent).
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_user(&self, user_id: i64) -> Result<usize, TaskmanError> {
        Ok(self
            .conn
            .execute("DELETE FROM users WHERE id = ?1", [user_id])?)
    }

    /// Delete a status.
    ///
    /// Fails with a constraint violation while any task still refers to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails or the status is in use.
    pub fn delete_status(&self, status_id: i64) -> Result<usize, TaskmanError> {
        Ok(self
            .conn
            .execute("DELETE FROM status WHERE id = ?1", [status_id])?)
    }

    /// Close the connection, reporting any error from the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` refuses to close the connection.
    pub fn close(self) -> Result<(), TaskmanError> {
        self.conn.close().map_err(|(_, e)| TaskmanError::Database(e))?;
        debug!("Database closed");
        Ok(())
    }
}
