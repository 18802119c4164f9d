//! List command report data structures.

use super::output::{Output, Report};

/// One class of the catalog as listed.
#[derive(Debug)]
pub struct ClassEntry {
    pub name: String,
    pub header: String,
    pub source: String,
    /// `name: Kind type [header] [#guard]` lines, in declaration order.
    pub members: Vec<String>,
}

#[derive(Debug)]
pub struct ListReport {
    pub classes: Vec<ClassEntry>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.classes.is_empty() {
            out.preformatted("No classes defined");
            return;
        }

        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!(
                "{} ({}, {})",
                class.name, class.header, class.source
            ));
            for member in &class.members {
                out.list_item(member);
            }
        }
    }
}
