//! Composable file builder

use crate::{CodeBuilder, IncludeTracker};

/// Composable file builder that pairs include tracking with code generation.
///
/// One `FileBuilder` backs one generated file; its include tracker is
/// therefore scoped to a single class pass and never shared.
///
/// # Example
///
/// ```
/// use adtgen_codegen::FileBuilder;
///
/// let mut file = FileBuilder::c();
/// if file.includes.require_once("list.h").unwrap() {
///     file.code.push_line("#include \"list.h\"");
/// }
/// assert!(!file.includes.require_once("list.h").unwrap());
/// assert_eq!(file.code.as_str(), "#include \"list.h\"\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileBuilder {
    /// Headers already emitted into this file
    pub includes: IncludeTracker,
    /// Code builder for generating the file body
    pub code: CodeBuilder,
}

impl FileBuilder {
    pub fn c() -> Self {
        Self::default()
    }

    /// Cap the number of distinct headers this file may include.
    pub fn with_include_limit(mut self, limit: usize) -> Self {
        self.includes = IncludeTracker::with_limit(limit);
        self
    }

    /// Consume and return the generated text.
    pub fn build(self) -> String {
        self.code.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_builder_starts_empty() {
        let file = FileBuilder::c();
        assert!(file.includes.is_empty());
        assert_eq!(file.build(), "");
    }

    #[test]
    fn test_include_limit() {
        let mut file = FileBuilder::c().with_include_limit(1);
        assert!(file.includes.require_once("list.h").unwrap());
        assert!(file.includes.require_once("ixml.h").is_err());
    }

    #[test]
    fn test_file_builders_do_not_share_includes() {
        let mut first = FileBuilder::c();
        first.includes.require_once("ixml.h").unwrap();

        let mut second = FileBuilder::c();
        assert!(second.includes.require_once("ixml.h").unwrap());
    }
}
