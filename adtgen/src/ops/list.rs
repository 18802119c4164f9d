//! List operation - catalog overview.

use adtgen_schema::{Member, Registry};

use crate::reports::{ClassEntry, ListReport};

/// Execute the list operation.
pub fn list(registry: &Registry) -> ListReport {
    let classes = registry
        .iter()
        .map(|class| ClassEntry {
            name: class.name().to_string(),
            header: class.header_filename().to_string(),
            source: class.source_filename().to_string(),
            members: class.members().iter().map(describe).collect(),
        })
        .collect();

    ListReport { classes }
}

/// Formats a member as `name: Kind type [header] [#guard]`.
fn describe(member: &Member) -> String {
    let mut line = format!("{}: {}", member.name(), member.kind());
    if let Some(ty) = member.c_type() {
        line.push(' ');
        line.push_str(ty);
    }
    if let Some(header) = member.required_include() {
        line.push_str(&format!(" [{}]", header));
    }
    if let Some(guard) = member.guard() {
        line.push_str(&format!(" [{}]", guard));
    }
    line
}
