//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from catalog validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Config file that was read, if one existed.
    pub config_path: Option<PathBuf>,
    /// Number of classes checked.
    pub classes: usize,
    /// Number of members across those classes.
    pub members: usize,
    /// Every integrity error, in catalog order.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            out.newline();
            out.preformatted(&format!(
                "✗ catalog has {} error{}",
                self.errors.len(),
                if self.errors.len() == 1 { "" } else { "s" }
            ));
            return;
        }

        if let Some(path) = &self.config_path {
            out.preformatted(&format!("✓ {} is valid", path.display()));
        }
        out.preformatted(&format!(
            "✓ catalog is valid ({} classes, {} members)",
            self.classes, self.members
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_valid_report() {
        let report = CheckReport {
            config_path: None,
            classes: 13,
            members: 120,
            errors: Vec::new(),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, ["✓ catalog is valid (13 classes, 120 members)"]);
    }

    #[test]
    fn test_errors_are_listed() {
        let report = CheckReport {
            config_path: Some(PathBuf::from("adtgen.toml")),
            classes: 2,
            members: 3,
            errors: vec!["duplicate class 'A'".to_string()],
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            ["error: duplicate class 'A'", "", "✗ catalog has 1 error"]
        );
        assert!(!report.is_valid());
    }
}
