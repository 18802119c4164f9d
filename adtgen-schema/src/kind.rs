//! The closed set of member kinds.

use std::fmt;

/// Structural category of a class member.
///
/// The kind fixes the field storage, the accessor set, the construction and
/// destruction policy, and the include a member implies when it does not
/// declare one itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Owned pointer to another generated class.
    Class,
    /// Plain value of the declared type (integers, pointers, handles).
    Integer,
    /// Inline struct value of the declared type.
    Buffer,
    /// Intrusive list head.
    List,
    /// Owned `UpnpString` object.
    String,
    /// Owned DOM string buffer.
    DomString,
}

impl MemberKind {
    /// Every kind, in declaration order.
    pub const ALL: [MemberKind; 6] = [
        MemberKind::Class,
        MemberKind::Integer,
        MemberKind::Buffer,
        MemberKind::List,
        MemberKind::String,
        MemberKind::DomString,
    ];

    /// Get the kind name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Class => "Class",
            MemberKind::Integer => "Integer",
            MemberKind::Buffer => "Buffer",
            MemberKind::List => "List",
            MemberKind::String => "String",
            MemberKind::DomString => "DomString",
        }
    }

    /// Fixed wrapper type used regardless of the member's declared type name.
    pub fn implicit_type(&self) -> Option<&'static str> {
        match self {
            MemberKind::List => Some("UpnpListHead"),
            MemberKind::String => Some("UpnpString"),
            MemberKind::DomString => Some("DOMString"),
            MemberKind::Class | MemberKind::Integer | MemberKind::Buffer => None,
        }
    }

    /// Returns true if members of this kind must declare a type name.
    pub fn requires_type_name(&self) -> bool {
        self.implicit_type().is_none()
    }

    /// Header implied by the kind when the member declares none.
    pub fn default_include(&self) -> Option<&'static str> {
        match self {
            MemberKind::List => Some("list.h"),
            MemberKind::String => Some("UpnpString.h"),
            MemberKind::DomString => Some("ixml.h"),
            MemberKind::Class | MemberKind::Integer | MemberKind::Buffer => None,
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_type_name() {
        assert!(MemberKind::Class.requires_type_name());
        assert!(MemberKind::Integer.requires_type_name());
        assert!(MemberKind::Buffer.requires_type_name());
        assert!(!MemberKind::List.requires_type_name());
        assert!(!MemberKind::String.requires_type_name());
        assert!(!MemberKind::DomString.requires_type_name());
    }

    #[test]
    fn test_default_include() {
        assert_eq!(MemberKind::List.default_include(), Some("list.h"));
        assert_eq!(MemberKind::String.default_include(), Some("UpnpString.h"));
        assert_eq!(MemberKind::DomString.default_include(), Some("ixml.h"));
        assert_eq!(MemberKind::Integer.default_include(), None);
    }

    #[test]
    fn test_display() {
        let names: Vec<String> = MemberKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            ["Class", "Integer", "Buffer", "List", "String", "DomString"]
        );
    }
}
