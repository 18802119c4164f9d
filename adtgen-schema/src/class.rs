use crate::{Error, Member, Result, validate};

/// Declarative description of one generated abstract data type.
///
/// Member order is significant: it fixes struct field layout, constructor
/// and assignment order, and (reversed) destructor order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSchema {
    name: String,
    members: Vec<Member>,
    header_filename: String,
    source_filename: String,
}

impl ClassSchema {
    /// Create a class whose files are `<name>.h` and `<name>.c`.
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Self {
        let name = name.into();
        Self {
            header_filename: format!("{}.h", name),
            source_filename: format!("{}.c", name),
            name,
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn header_filename(&self) -> &str {
        &self.header_filename
    }

    pub fn source_filename(&self) -> &str {
        &self.source_filename
    }

    /// Collect every integrity error of this class.
    pub fn validate(&self) -> Vec<Error> {
        validate::check_class(self)
    }

    /// Fail with the first integrity error of this class, if any.
    pub fn check(&self) -> Result<()> {
        match validate::check_class(self).into_iter().next() {
            Some(err) => Err(Box::new(err)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemberKind;

    #[test]
    fn test_default_filenames() {
        let class = ClassSchema::new("UpnpEvent", Vec::new());
        assert_eq!(class.header_filename(), "UpnpEvent.h");
        assert_eq!(class.source_filename(), "UpnpEvent.c");
    }

    #[test]
    fn test_check_reports_first_error() {
        let twice = ClassSchema::new(
            "Twice",
            vec![
                Member::new("Name", MemberKind::String),
                Member::new("Name", MemberKind::Integer).type_name("int"),
            ],
        );
        assert_eq!(
            *twice.check().unwrap_err(),
            Error::DuplicateMember {
                class: "Twice".to_string(),
                member: "Name".to_string(),
            }
        );

        let bad = ClassSchema::new("bad-name", Vec::new());
        assert!(matches!(
            *bad.check().unwrap_err(),
            Error::InvalidIdentifier { .. }
        ));

        let ok = ClassSchema::new("Ok", vec![Member::new("Label", MemberKind::String)]);
        assert!(ok.check().is_ok());
    }

    #[test]
    fn test_member_lookup() {
        let class = ClassSchema::new(
            "Pair",
            vec![
                Member::new("Left", MemberKind::Integer).type_name("int"),
                Member::new("Right", MemberKind::String),
            ],
        );
        assert_eq!(class.member("Right").map(Member::kind), Some(MemberKind::String));
        assert!(class.member("Middle").is_none());
    }
}
