//! C AST builders for generating declarations, functions and structs.
//!
//! These provide a small API for constructing C syntax, which is then
//! rendered via CodeBuilder.

mod function;
mod prototype;
mod signature;
mod structs;

pub use function::Function;
pub use prototype::Prototype;
pub use signature::{Signature, declare};
pub use structs::Struct;
