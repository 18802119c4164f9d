use crate::{MemberKind, Result, validate};

/// One member of a class schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    kind: MemberKind,
    type_name: Option<String>,
    header: Option<String>,
    initial_value: Option<String>,
    conditional: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_name: None,
            header: None,
            initial_value: None,
            conditional: None,
        }
    }

    /// C type of the member. Ignored for kinds with an implicit type.
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Header declaring the member's type. `<...>` names are system headers.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Initial value expression (Integer) or initialization statement (Buffer).
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Preprocessor test wrapping every artifact of this member.
    pub fn conditional(mut self, guard: impl Into<String>) -> Self {
        self.conditional = Some(guard.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Declared type name, or the kind's implicit type when it has one.
    pub fn c_type(&self) -> Option<&str> {
        match self.kind.implicit_type() {
            Some(implicit) => Some(implicit),
            None => self.type_name.as_deref().filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn declared_header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn init_value(&self) -> Option<&str> {
        self.initial_value.as_deref()
    }

    pub fn guard(&self) -> Option<&str> {
        self.conditional.as_deref()
    }

    /// Header this member needs: the declared one, else the kind default.
    pub fn required_include(&self) -> Option<&str> {
        self.header.as_deref().or(self.kind.default_include())
    }

    /// Check the member's own integrity within `class`.
    pub fn check(&self, class: &str) -> Result<()> {
        validate::check_member(class, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_include_prefers_declared_header() {
        let member = Member::new("Items", MemberKind::List).header("mylist.h");
        assert_eq!(member.required_include(), Some("mylist.h"));
    }

    #[test]
    fn test_required_include_falls_back_to_kind_default() {
        let member = Member::new("Label", MemberKind::String);
        assert_eq!(member.required_include(), Some("UpnpString.h"));

        let member = Member::new("Count", MemberKind::Integer).type_name("int");
        assert_eq!(member.required_include(), None);
    }

    #[test]
    fn test_c_type_uses_implicit_type() {
        let member = Member::new("Label", MemberKind::String).type_name("ignored");
        assert_eq!(member.c_type(), Some("UpnpString"));

        let member = Member::new("Count", MemberKind::Integer).type_name("unsigned long");
        assert_eq!(member.c_type(), Some("unsigned long"));

        let member = Member::new("Count", MemberKind::Integer).type_name("  ");
        assert_eq!(member.c_type(), None);
    }
}
