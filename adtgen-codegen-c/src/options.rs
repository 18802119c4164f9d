use adtgen_core::GENERATED_NOTICE;
use serde::Deserialize;

/// Knobs applied to every generated file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Macro placed before every exported prototype. Empty disables it.
    pub export_macro: String,
    /// Header defining the export macro, included by every header.
    pub global_header: Option<String>,
    /// Build configuration header included first by every source.
    pub config_header: Option<String>,
    /// Text placed under `\brief` in the file banner.
    pub banner: String,
    /// Only generate these classes (registry order is kept).
    pub classes: Option<Vec<String>>,
    /// Most distinct headers one file may include. Going past it aborts the run.
    pub include_limit: Option<usize>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            export_macro: "EXPORT_SPEC".to_string(),
            global_header: Some("UpnpGlobal.h".to_string()),
            config_header: Some("config.h".to_string()),
            banner: GENERATED_NOTICE.to_string(),
            classes: None,
            include_limit: None,
        }
    }
}

/// `#include` line for `header`; `<...>` names are system headers.
pub(crate) fn include_line(header: &str) -> String {
    if header.starts_with('<') {
        format!("#include {}", header)
    } else {
        format!("#include \"{}\"", header)
    }
}
