//! Class catalog for the adtgen C class generator.
//!
//! A [`Registry`] is an ordered, read-only list of [`ClassSchema`]s. Each
//! class is an ordered list of [`Member`]s, and each member has one of the
//! six [`MemberKind`]s that decide how it is stored, constructed, destroyed
//! and accessed in the generated C code.
//!
//! The registry is built in code (see [`builtin::registry`]) and handed to
//! the generator explicitly; nothing here reads schema files.

pub mod builtin;
mod class;
mod error;
mod kind;
mod member;
mod registry;
mod validate;

pub use class::ClassSchema;
pub use error::{Error, Result};
pub use kind::MemberKind;
pub use member::Member;
pub use registry::Registry;
