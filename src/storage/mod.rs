//! Storage layer for taskman.
//!
//! This module provides SQLite-based persistence for:
//! - The status vocabulary
//! - Users
//! - Tasks owned by users

mod database;
mod schema;

pub use database::{Database, DEFAULT_DATABASE};
pub use schema::TABLES;
