//! C code generation for the adtgen class generator.
//!
//! For every class of a [`Registry`](adtgen_schema::Registry) this crate
//! emits a header (`X.h`) and a source (`X.c`) implementing an opaque C
//! abstract data type with constructor, destructor, copy constructor,
//! assignment operator and per-member accessors.

pub mod ast;
mod error;
mod generator;
mod header;
mod lifecycle;
mod naming;
mod options;
mod preamble;
mod report;
mod source;
mod templates;

pub use error::{EmitError, GenerateError};
pub use generator::Generator;
pub use header::HeaderEmitter;
pub use naming::{ClassNames, MemberNames, struct_tag};
pub use options::GeneratorOptions;
pub use report::{ClassReport, FileStatus, GenerateResult, PreviewFile};
pub use source::SourceEmitter;
pub use templates::MemberTemplate;
