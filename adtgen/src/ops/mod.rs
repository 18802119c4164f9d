//! Core operations.
//!
//! This module contains the business logic for adtgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;
