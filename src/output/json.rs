//! JSON output formatting for taskman.
//!
//! This module provides functions for formatting query results as JSON.

use serde::Serialize;
use serde_json::json;

use crate::error::TaskmanError;
use crate::seed::SeedReport;

/// Format rows as JSON
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_rows_json<T: Serialize>(rows: &[T], title: &str) -> Result<String, TaskmanError> {
    let output = json!({
        "list": title,
        "count": rows.len(),
        "items": rows
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the outcome of an update or delete as JSON
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_change_json(action: &str, affected: usize) -> Result<String, TaskmanError> {
    let output = json!({
        "action": action,
        "affected": affected
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the id of a newly created row as JSON
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_created_json(what: &str, id: i64) -> Result<String, TaskmanError> {
    let output = json!({
        "created": what,
        "id": id
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a seeding summary as JSON
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_seed_json(report: &SeedReport) -> Result<String, TaskmanError> {
    to_json(report)
}

/// Format the table list after schema initialization as JSON
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_tables_json(path: &str, tables: &[String]) -> Result<String, TaskmanError> {
    let output = json!({
        "database": path,
        "tables": tables
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaskmanError> {
    Ok(serde_json::to_string_pretty(value)?)
}
