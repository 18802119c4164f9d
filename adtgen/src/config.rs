//! `adtgen.toml` loading.
//!
//! The file is optional. A missing file yields [`Config::default`]; any other
//! read failure or a malformed file is reported with its source location.

use std::path::{Path, PathBuf};

use adtgen_codegen_c::GeneratorOptions;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Result type for config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(
        code(adtgen::config_parse),
        help("known keys are 'output' and the [generator] table")
    )]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `adtgen.toml`.
///
/// ```toml
/// output = "gen"
///
/// [generator]
/// export_macro = "EXPORT_SPEC"
/// global_header = "UpnpGlobal.h"
/// classes = ["UpnpFileInfo"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory, relative to the working directory.
    pub output: Option<PathBuf>,
    pub generator: GeneratorOptions,
}

impl Config {
    /// Load the config at `path`, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(Box::new(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }));
            }
        };
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            let span = e.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                filename: filename.to_string(),
                src: NamedSource::new(filename, content.to_string()),
                span,
                source: e,
            })
        })
    }

    /// Directory generated files go to: the flag, then the file, then `.`.
    pub fn output_dir(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Generator options with a non-empty `--class` list taking precedence.
    pub fn generator_options(&self, classes: &[String]) -> GeneratorOptions {
        let mut options = self.generator.clone();
        if !classes.is_empty() {
            options.classes = Some(classes.to_vec());
        }
        options
    }
}
