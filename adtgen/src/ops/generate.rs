//! Generate operation - C sources from the class catalog.

use std::path::Path;

use adtgen_codegen_c::{Generator, GeneratorOptions};
use adtgen_schema::Registry;
use eyre::{Context, Result};
use tracing::debug;

use crate::reports::{GenerateReport, GenerationResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the `.h`/`.c` pairs are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Classes that fail an integrity check are still emitted up to the failing
/// member and counted as failed; the problems are also collected up front as
/// warnings. Only a bad class selection or include storage exhaustion aborts.
pub fn generate(
    registry: &Registry,
    options: GeneratorOptions,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let generator = Generator::new(registry).with_options(options);
    let selected = generator.selected().wrap_err("invalid class selection")?;
    debug!(classes = selected.len(), "classes selected");

    let warnings = selected
        .iter()
        .flat_map(|class| class.validate())
        .map(|err| err.to_string())
        .collect();

    let result = if opts.dry_run {
        let files = generator.preview().wrap_err("generation aborted")?;
        GenerationResult::Preview(files)
    } else {
        std::fs::create_dir_all(opts.output_dir).wrap_err_with(|| {
            format!(
                "failed to create output directory '{}'",
                opts.output_dir.display()
            )
        })?;
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("generation aborted")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            result,
        })
    };

    Ok(GenerateReport { warnings, result })
}
