//! Line-oriented text buffer that tracks nesting depth.

use super::{CodeFragment, Renderable};

/// Text written once per nesting level.
const INDENT: &str = "\t";

/// Accumulates generated C text one line at a time.
///
/// Ordinary lines are prefixed with one tab per nesting level. Preprocessor
/// directives always start at column zero, whatever the depth.
///
/// ```
/// use adtgen_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::c();
/// builder
///     .push_line("{")
///     .push_indent()
///     .push_directive("#ifdef FEATURE_X")
///     .push_line("int x;")
///     .push_directive("#endif")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "{\n#ifdef FEATURE_X\n\tint x;\n#endif\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    depth: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn c() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Empty line, never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Leave one nesting level. Does nothing at depth zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// `/*! text */` at the current depth.
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(&format!("/*! {} */\n", text));
        self
    }

    pub fn push_directive(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Write every fragment of `node` in order.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.write_fragment(fragment);
        }
        self
    }

    fn write_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
            CodeFragment::Directive(s) => {
                self.push_directive(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                body.into_iter().for_each(|f| self.write_fragment(f));
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&INDENT.repeat(self.depth));
    }
}
