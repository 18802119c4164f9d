//! Generate command report data structures.

use std::path::PathBuf;

use adtgen_codegen_c::{FileStatus, GenerateResult, PreviewFile};

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Catalog integrity problems found before emitting.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub result: GenerateResult,
}

impl GenerateReport {
    /// Whether every selected class was emitted completely.
    pub fn is_success(&self) -> bool {
        match &self.result {
            GenerationResult::Written(written) => written.result.is_success(),
            GenerationResult::Preview(files) => files.iter().all(|f| f.error.is_none()),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => render_written(out, written),
            GenerationResult::Preview(files) => render_preview(out, files),
        }
    }
}

fn render_written(out: &mut dyn Output, written: &WrittenResult) {
    for class in &written.result.classes {
        for (path, status) in class.files() {
            let outcome = match status {
                FileStatus::Written => "done!".to_string(),
                FileStatus::Failed(err) => format!("failed: {}", chain(err)),
                FileStatus::Skipped(reason) => format!("skipped: {}", reason),
            };
            out.progress(&format!("Writing {}", path), &outcome);
        }
    }

    out.newline();
    out.key_value("Output", &written.output_dir.display().to_string());
    out.preformatted(&format!(
        "{} classes, {} failed",
        written.result.classes.len(),
        written.result.failures()
    ));
}

fn render_preview(out: &mut dyn Output, files: &[PreviewFile]) {
    for file in files {
        out.divider(&file.path);
        out.preformatted(&file.content);
        if let Some(err) = &file.error {
            out.error(&format!("{} is incomplete: {}", file.path, chain(err)));
        }
    }

    out.divider("Summary");
    out.preformatted(&format!("{} files would be generated", files.len()));
}

/// Joins an error and its sources with `": "`.
pub(crate) fn chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
