//! Shared code generation utilities for the adtgen C class generator.
//!
//! This crate provides the language-agnostic building blocks used by the C
//! emitters in `adtgen-codegen-c`.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Per-file emission services (IncludeTracker, ConditionalGuard)

pub mod builder;
pub mod generation;

pub use builder::{CodeBuilder, CodeFragment, FileBuilder, Renderable};
pub use generation::{ConditionalGuard, IncludeTracker, TrackerError};
