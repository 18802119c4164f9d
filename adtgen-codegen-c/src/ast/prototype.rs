//! Exported function prototypes.

use adtgen_codegen::{CodeFragment, Renderable};

use super::Signature;

/// A documented, exported prototype: `/*! doc */` then `EXPORT sig;`.
#[derive(Debug, Clone)]
pub struct Prototype<'a> {
    doc: String,
    signature: &'a Signature,
    export: &'a str,
}

impl<'a> Prototype<'a> {
    /// Prototype documented with the function name.
    pub fn new(signature: &'a Signature, export: &'a str) -> Self {
        Self {
            doc: signature.name().to_string(),
            signature,
            export,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }
}

impl Renderable for Prototype<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let decl = if self.export.is_empty() {
            format!("{};", self.signature.render())
        } else {
            format!("{} {};", self.export, self.signature.render())
        };
        vec![CodeFragment::doc(self.doc.as_str()), CodeFragment::line(decl)]
    }
}
