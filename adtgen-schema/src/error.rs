use miette::Diagnostic;
use thiserror::Error;

use crate::MemberKind;

/// Result type for catalog operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Catalog integrity errors.
///
/// These describe a malformed compiled-in catalog rather than bad runtime
/// data; the generator refuses to emit the affected file.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("{kind} member '{class}::{member}' has no type name")]
    #[diagnostic(
        code(adtgen::missing_type_name),
        help("Class, Integer and Buffer members must name their C type")
    )]
    MissingTypeName {
        class: String,
        member: String,
        kind: MemberKind,
    },

    #[error("duplicate member '{member}' in class '{class}'")]
    #[diagnostic(code(adtgen::duplicate_member))]
    DuplicateMember { class: String, member: String },

    #[error("duplicate class '{class}'")]
    #[diagnostic(code(adtgen::duplicate_class))]
    DuplicateClass { class: String },

    #[error("class '{class}' has no members")]
    #[diagnostic(
        code(adtgen::empty_class),
        help("a C struct needs at least one field")
    )]
    EmptyClass { class: String },

    #[error("'{name}' is not a valid C identifier for {context}")]
    #[diagnostic(code(adtgen::invalid_identifier))]
    InvalidIdentifier { name: String, context: String },

    #[error("conditional '{guard}' on '{class}::{member}' is not a preprocessor test")]
    #[diagnostic(
        code(adtgen::invalid_conditional),
        help("use a line starting with #if, #ifdef or #ifndef")
    )]
    InvalidConditional {
        class: String,
        member: String,
        guard: String,
    },

    #[error("unknown class '{name}'")]
    #[diagnostic(code(adtgen::unknown_class), help("run 'adtgen list' to see the catalog"))]
    UnknownClass { name: String },
}
