//! Check operation - catalog validation.

use std::path::Path;

use adtgen_schema::Registry;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Collects every integrity error rather than stopping at the first.
pub fn check(registry: &Registry, config_path: Option<&Path>) -> CheckReport {
    CheckReport {
        config_path: config_path.map(Path::to_path_buf),
        classes: registry.len(),
        members: registry.iter().map(|c| c.members().len()).sum(),
        errors: registry.validate().iter().map(ToString::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use adtgen_schema::{ClassSchema, Member, MemberKind, builtin};

    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let report = check(&builtin::registry(), None);
        assert!(report.is_valid(), "{:?}", report.errors);
        assert_eq!(report.classes, 13);
    }

    #[test]
    fn test_reports_every_error() {
        let registry = Registry::new(vec![
            ClassSchema::new("Empty", Vec::new()),
            ClassSchema::new(
                "Twice",
                vec![
                    Member::new("Name", MemberKind::String),
                    Member::new("Name", MemberKind::String),
                ],
            ),
        ]);
        let report = check(&registry, None);
        assert_eq!(report.errors.len(), 2, "{:?}", report.errors);
        assert_eq!(report.members, 2);
    }
}
