//! taskman - a small SQLite task database
//!
//! This crate provides the schema for users, tasks and statuses, a catalog
//! of parameterized queries over it, a synthetic-data seeder and the
//! command-line interface that drives them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod seed;
pub mod storage;

pub use catalog::Catalog;
pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TaskmanError;
pub use storage::Database;
