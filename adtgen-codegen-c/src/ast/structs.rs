//! C struct definitions.

use adtgen_codegen::{CodeFragment, Renderable};

/// A struct definition whose field fragments may carry guards.
#[derive(Debug, Clone)]
pub struct Struct {
    tag: String,
    fields: Vec<CodeFragment>,
}

impl Struct {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            fields: Vec::new(),
        }
    }

    /// Append field fragments (a declaration line, possibly guarded).
    pub fn fields(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.fields.extend(fragments);
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(format!("struct {}", self.tag)),
            CodeFragment::block("{", self.fields.clone(), Some("};".to_string())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adtgen_codegen::CodeBuilder;

    #[test]
    fn test_struct_with_guarded_field() {
        let s = Struct::new("s_Foo").fields([
            CodeFragment::line("int m_A;"),
            CodeFragment::directive("#ifdef X"),
            CodeFragment::line("int m_B;"),
            CodeFragment::directive("#endif"),
        ]);
        let mut builder = CodeBuilder::c();
        builder.emit(&s);
        assert_eq!(
            builder.build(),
            "struct s_Foo\n{\n\tint m_A;\n#ifdef X\n\tint m_B;\n#endif\n};\n"
        );
    }
}
