//! Pieces shared by the top of both generated files.

use adtgen_codegen::{CodeFragment, IncludeTracker};
use adtgen_schema::{ClassSchema, Error};

use crate::EmitError;

/// Doxygen `\file` banner.
pub(crate) fn banner(role: &str, class: &str, text: &str) -> Vec<CodeFragment> {
    let mut out = vec![
        CodeFragment::line("/*!"),
        CodeFragment::line(" * \\file"),
        CodeFragment::line(" *"),
        CodeFragment::line(format!(" * \\brief {} file for {} methods.", role, class)),
    ];
    if !text.trim().is_empty() {
        out.push(CodeFragment::line(" *"));
        out.extend(
            text.lines()
                .map(|l| CodeFragment::line(format!(" * {}", l).trim_end().to_string())),
        );
    }
    out.push(CodeFragment::line(" */"));
    out
}

/// Record `header` for `class`, returning true the first time.
pub(crate) fn record(
    includes: &mut IncludeTracker,
    class: &str,
    header: &str,
) -> Result<bool, EmitError> {
    includes
        .require_once(header)
        .map_err(|source| EmitError::IncludeStorage {
            class: class.to_string(),
            source,
        })
}

pub(crate) fn catalog_error(class: &ClassSchema, source: Box<Error>) -> EmitError {
    EmitError::Catalog {
        class: class.name().to_string(),
        source,
    }
}

/// Reject classes that cannot produce valid C: empty, badly named, or with
/// duplicate or malformed members.
pub(crate) fn check_class(class: &ClassSchema) -> Result<(), EmitError> {
    class.check().map_err(|source| catalog_error(class, source))
}
