//! Output formatting for taskman.
//!
//! This module provides formatters for displaying query results in various formats.

mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::error::TaskmanError;
use crate::seed::SeedReport;

pub use json::*;
pub use pretty::*;

/// Format query rows based on output format
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_rows<T: PrettyRow + Serialize>(
    rows: &[T],
    title: &str,
    format: OutputFormat,
) -> Result<String, TaskmanError> {
    match format {
        OutputFormat::Pretty => Ok(format_rows_pretty(rows, title)),
        OutputFormat::Json => format_rows_json(rows, title),
    }
}

/// Format an update or delete outcome based on output format
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_change(
    action: &str,
    affected: usize,
    format: OutputFormat,
) -> Result<String, TaskmanError> {
    match format {
        OutputFormat::Pretty => Ok(format_change_pretty(action, affected)),
        OutputFormat::Json => format_change_json(action, affected),
    }
}

/// Format a newly created row id based on output format
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_created(what: &str, id: i64, format: OutputFormat) -> Result<String, TaskmanError> {
    match format {
        OutputFormat::Pretty => Ok(format_created_pretty(what, id)),
        OutputFormat::Json => format_created_json(what, id),
    }
}

/// Format a seeding summary based on output format
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_seed(report: &SeedReport, format: OutputFormat) -> Result<String, TaskmanError> {
    match format {
        OutputFormat::Pretty => Ok(format_seed_pretty(report)),
        OutputFormat::Json => format_seed_json(report),
    }
}

/// Format the schema table list based on output format
///
/// # Errors
///
/// Returns `TaskmanError::Parse` if JSON serialization fails.
pub fn format_tables(
    path: &str,
    tables: &[String],
    format: OutputFormat,
) -> Result<String, TaskmanError> {
    match format {
        OutputFormat::Pretty => Ok(format_tables_pretty(path, tables)),
        OutputFormat::Json => format_tables_json(path, tables),
    }
}
