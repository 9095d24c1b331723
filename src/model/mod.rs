//! Row types for the task database.

mod types;

pub use types::*;
