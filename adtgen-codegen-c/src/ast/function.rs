//! C function definitions.

use adtgen_codegen::{CodeFragment, Renderable};

use super::Signature;

/// A function definition in kernel brace style.
#[derive(Debug, Clone)]
pub struct Function {
    signature: Signature,
    body: Vec<CodeFragment>,
}

impl Function {
    pub fn new(signature: Signature) -> Self {
        Self {
            signature,
            body: Vec::new(),
        }
    }

    /// Append a statement line to the body.
    pub fn line(mut self, s: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(s));
        self
    }

    /// Append a blank line to the body.
    pub fn blank(mut self) -> Self {
        self.body.push(CodeFragment::blank());
        self
    }

    /// Append arbitrary fragments to the body.
    pub fn fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(self.signature.render()),
            CodeFragment::block("{", self.body.clone(), Some("}".to_string())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adtgen_codegen::CodeBuilder;

    #[test]
    fn test_function_renders_body() {
        let f = Function::new(Signature::new("int", "Foo_set_A").param("Foo *", "p").param("int", "n"))
            .line("p->m_A = n;")
            .blank()
            .line("return 1;");

        let mut builder = CodeBuilder::c();
        builder.emit(&f);
        assert_eq!(
            builder.build(),
            "int Foo_set_A(Foo *p, int n)\n{\n\tp->m_A = n;\n\n\treturn 1;\n}\n"
        );
    }
}
