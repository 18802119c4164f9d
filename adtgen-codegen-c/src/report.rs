//! Outcome of a generation run.

use crate::EmitError;

/// A rendered file, possibly partial.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
    /// Set when emission stopped early; `content` is then partial
    pub error: Option<EmitError>,
}

/// What happened to one output file.
#[derive(Debug)]
pub enum FileStatus {
    Written,
    /// Written, but emission failed part way; the file on disk is partial.
    Failed(EmitError),
    /// Not written; the reason is attached.
    Skipped(String),
}

impl FileStatus {
    pub fn is_written(&self) -> bool {
        matches!(self, FileStatus::Written)
    }
}

/// Per-class outcome.
#[derive(Debug)]
pub struct ClassReport {
    pub name: String,
    pub header_path: String,
    pub source_path: String,
    pub header: FileStatus,
    pub source: FileStatus,
}

impl ClassReport {
    /// Returns true if both files were fully written.
    pub fn is_success(&self) -> bool {
        self.header.is_written() && self.source.is_written()
    }

    /// Both files with their status, header first.
    pub fn files(&self) -> [(&str, &FileStatus); 2] {
        [
            (self.header_path.as_str(), &self.header),
            (self.source_path.as_str(), &self.source),
        ]
    }
}

/// Result of a generation run
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// One report per selected class, in registry order
    pub classes: Vec<ClassReport>,
}

impl GenerateResult {
    /// Number of classes not fully written.
    pub fn failures(&self) -> usize {
        self.classes.iter().filter(|c| !c.is_success()).count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}
