//! Structured pieces of output that are built first and written later.
//!
//! Templates return fragments instead of writing text, so a caller can wrap
//! them (for instance in a conditional guard) before they reach a
//! [`CodeBuilder`](super::CodeBuilder).

/// One piece of generated text.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line at the current depth.
    Line(String),
    Blank,
    /// Body one level deeper than its header line, then an optional
    /// closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A one-line Doxygen comment (`/*! text */`).
    Doc(String),
    /// A preprocessor directive, always written at column zero.
    Directive(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn doc(s: impl Into<String>) -> Self {
        Self::Doc(s.into())
    }

    pub fn directive(s: impl Into<String>) -> Self {
        Self::Directive(s.into())
    }
}

/// Anything that can be written through a `CodeBuilder`.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
