//! Catalog integrity checks.

use std::collections::HashSet;

use adtgen_core::is_c_identifier;

use crate::{ClassSchema, Error, Member, Result};

/// Preprocessor directives accepted as the opening line of a member guard.
const GUARD_DIRECTIVES: [&str; 3] = ["#ifdef ", "#ifndef ", "#if "];

/// Check one member: name, type name and guard.
pub(crate) fn check_member(class: &str, member: &Member) -> Result<()> {
    if !is_c_identifier(member.name()) {
        return Err(Box::new(Error::InvalidIdentifier {
            name: member.name().to_string(),
            context: format!("a member of '{}'", class),
        }));
    }

    if member.kind().requires_type_name() && member.c_type().is_none() {
        return Err(Box::new(Error::MissingTypeName {
            class: class.to_string(),
            member: member.name().to_string(),
            kind: member.kind(),
        }));
    }

    if let Some(guard) = member.guard().filter(|g| !is_guard(g)) {
        return Err(Box::new(Error::InvalidConditional {
            class: class.to_string(),
            member: member.name().to_string(),
            guard: guard.to_string(),
        }));
    }

    Ok(())
}

fn is_guard(guard: &str) -> bool {
    let guard = guard.trim_start();
    GUARD_DIRECTIVES.iter().any(|directive| {
        guard
            .strip_prefix(directive)
            .is_some_and(|rest| !rest.trim().is_empty())
    })
}

/// Collect every integrity error of one class.
pub(crate) fn check_class(class: &ClassSchema) -> Vec<Error> {
    let mut errors = Vec::new();

    if !is_c_identifier(class.name()) {
        errors.push(Error::InvalidIdentifier {
            name: class.name().to_string(),
            context: "a class name".to_string(),
        });
    }

    if class.members().is_empty() {
        errors.push(Error::EmptyClass {
            class: class.name().to_string(),
        });
    }

    let mut seen = HashSet::new();
    for member in class.members() {
        if !seen.insert(member.name()) {
            errors.push(Error::DuplicateMember {
                class: class.name().to_string(),
                member: member.name().to_string(),
            });
        }
        if let Err(e) = check_member(class.name(), member) {
            errors.push(*e);
        }
    }

    errors
}

/// Collect every integrity error of a list of classes.
pub(crate) fn check_classes<'a>(classes: impl IntoIterator<Item = &'a ClassSchema>) -> Vec<Error> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for class in classes {
        if !seen.insert(class.name()) {
            errors.push(Error::DuplicateClass {
                class: class.name().to_string(),
            });
        }
        errors.extend(check_class(class));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemberKind;

    #[test]
    fn test_guard_directives() {
        assert!(is_guard("#ifdef FEATURE_X"));
        assert!(is_guard("#ifndef NO_SSL"));
        assert!(is_guard("#if defined(A) && B > 1"));
        assert!(!is_guard("FEATURE_X"));
        assert!(!is_guard("#ifdef"));
        assert!(!is_guard("#endif"));
        assert!(!is_guard("#define X"));
    }

    #[test]
    fn test_check_member_missing_type_name() {
        let member = Member::new("Count", MemberKind::Integer);
        let err = check_member("Counter", &member).unwrap_err();
        assert!(matches!(*err, Error::MissingTypeName { .. }));
    }

    #[test]
    fn test_check_member_implicit_type_needs_no_name() {
        let member = Member::new("Items", MemberKind::List);
        assert!(check_member("Bag", &member).is_ok());
    }

    #[test]
    fn test_check_member_bad_guard() {
        let member = Member::new("Ctx", MemberKind::Integer)
            .type_name("SSL_CTX*")
            .conditional("FEATURE_X");
        let err = check_member("Tls", &member).unwrap_err();
        assert!(matches!(*err, Error::InvalidConditional { .. }));
    }

    #[test]
    fn test_check_class_collects_all_errors() {
        let class = ClassSchema::new(
            "Broken",
            vec![
                Member::new("A", MemberKind::Integer),
                Member::new("A", MemberKind::String),
                Member::new("bad name", MemberKind::List),
            ],
        );
        let errors = check_class(&class);
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], Error::MissingTypeName { .. }));
        assert!(matches!(errors[1], Error::DuplicateMember { .. }));
        assert!(matches!(errors[2], Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_check_classes_duplicate_class() {
        let a = ClassSchema::new("A", vec![Member::new("X", MemberKind::String)]);
        let errors = check_classes([&a, &a]);
        assert_eq!(
            errors,
            vec![Error::DuplicateClass {
                class: "A".to_string()
            }]
        );
    }

    #[test]
    fn test_check_class_empty() {
        let class = ClassSchema::new("Nothing", Vec::new());
        assert_eq!(
            check_class(&class),
            vec![Error::EmptyClass {
                class: "Nothing".to_string()
            }]
        );
    }
}
