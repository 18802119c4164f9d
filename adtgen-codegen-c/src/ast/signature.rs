//! C function signatures.

/// Declare `name` with type `ty`, attaching pointer stars to the name.
///
/// `declare("int", "n")` is `int n`; `declare("char*", "s")` is `char *s`.
pub fn declare(ty: &str, name: &str) -> String {
    let ty = ty.trim();
    let base = ty.trim_end_matches('*');
    let stars = &ty[base.len()..];
    format!("{} {}{}", base.trim_end(), stars, name)
}

/// A C function signature (return type, name and parameters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    ret: String,
    name: String,
    params: Vec<String>,
}

impl Signature {
    pub fn new(ret: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ret: ret.into(),
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn param(mut self, ty: &str, name: &str) -> Self {
        self.params.push(declare(ty, name));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render as `ret name(params)`; an empty list renders as `(void)`.
    pub fn render(&self) -> String {
        let params = if self.params.is_empty() {
            "void".to_string()
        } else {
            self.params.join(", ")
        };
        format!("{}({})", declare(&self.ret, &self.name), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare() {
        assert_eq!(declare("int", "n"), "int n");
        assert_eq!(declare("char *", "s"), "char *s");
        assert_eq!(declare("SSL_CTX*", "n"), "SSL_CTX *n");
        assert_eq!(declare("char **", "argv"), "char **argv");
        assert_eq!(declare("const UpnpString *", "s"), "const UpnpString *s");
    }

    #[test]
    fn test_render() {
        let sig = Signature::new("int", "Foo_set_Bar")
            .param("Foo *", "p")
            .param("unsigned long", "n");
        assert_eq!(sig.render(), "int Foo_set_Bar(Foo *p, unsigned long n)");
        assert_eq!(sig.name(), "Foo_set_Bar");
    }

    #[test]
    fn test_render_no_params() {
        let sig = Signature::new("Foo *", "Foo_new");
        assert_eq!(sig.render(), "Foo *Foo_new(void)");
    }
}
