//! Command-line interface for taskman.

pub mod args;
pub mod commands;
