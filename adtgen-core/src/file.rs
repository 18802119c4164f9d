use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Create (or truncate) `path`, write `content` and close the handle.
///
/// The handle is dropped before returning on every path, so no output file
/// stays open past a single call.
fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    let mut handle = fs::File::create(path)
        .wrap_err_with(|| format!("failed to open '{}'", path.display()))?;
    handle
        .write_all(content.as_bytes())
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    handle
        .flush()
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

    Ok(WriteResult {
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}

/// Result of a write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Path that was written
    pub path: PathBuf,
    /// Number of bytes written
    pub bytes: usize,
}

/// A rendered file with a path relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given relative path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the relative file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file below `base`, overwriting any previous content
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        write_file(&base.join(&self.path), &self.content)
    }
}
