//! Core utilities and types for the adtgen C class generator.
//!
//! This crate provides the file writing primitives and identifier helpers
//! shared by the schema, the emitters and the command-line driver.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{guard_macro, is_c_identifier, to_upper_case};

/// Notice placed in the banner of every generated file.
pub const GENERATED_NOTICE: &str = "Do not edit this file, it is automatically generated.";
