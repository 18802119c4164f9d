use std::path::Path;

use adtgen_codegen::FileBuilder;
use adtgen_core::File;
use adtgen_schema::{ClassSchema, Registry};
use tracing::{error, info, warn};

use crate::{
    ClassReport, EmitError, FileStatus, GenerateError, GenerateResult, GeneratorOptions,
    HeaderEmitter, PreviewFile, SourceEmitter,
};

/// Drives the emitters over a registry, one class at a time.
pub struct Generator<'a> {
    registry: &'a Registry,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Classes to generate, in registry order.
    pub fn selected(&self) -> Result<Vec<&'a ClassSchema>, GenerateError> {
        let registry = self.registry;
        match &self.options.classes {
            None => Ok(registry.iter().collect()),
            Some(names) => {
                registry.check_selection(names)?;
                Ok(registry
                    .iter()
                    .filter(|c| names.iter().any(|n| n == c.name()))
                    .collect())
            }
        }
    }

    /// Render the header of `class`.
    fn file(&self) -> FileBuilder {
        match self.options.include_limit {
            Some(limit) => FileBuilder::c().with_include_limit(limit),
            None => FileBuilder::c(),
        }
    }

    pub fn render_header(&self, class: &ClassSchema) -> Result<PreviewFile, GenerateError> {
        let mut file = self.file();
        let outcome = HeaderEmitter::new(&self.options).emit(class, &mut file);
        finish(class.header_filename(), file, outcome)
    }

    /// Render the source of `class`.
    pub fn render_source(&self, class: &ClassSchema) -> Result<PreviewFile, GenerateError> {
        let mut file = self.file();
        let outcome = SourceEmitter::new(&self.options).emit(class, &mut file);
        finish(class.source_filename(), file, outcome)
    }

    /// Render every selected file without touching disk.
    pub fn preview(&self) -> Result<Vec<PreviewFile>, GenerateError> {
        let mut files = Vec::new();
        for class in self.selected()? {
            files.push(self.render_header(class)?);
            files.push(self.render_source(class)?);
        }
        Ok(files)
    }

    /// Generate every selected class into `output_dir`.
    ///
    /// A class whose header cannot be written is skipped entirely; the run
    /// goes on with the next class. Only include-storage exhaustion stops
    /// the run.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult, GenerateError> {
        let mut result = GenerateResult::default();

        for class in self.selected()? {
            info!(class = class.name(), "generating class");

            let header = write(output_dir, self.render_header(class)?);
            let source = if !matches!(header, FileStatus::Skipped(_)) {
                write(output_dir, self.render_source(class)?)
            } else {
                FileStatus::Skipped(format!("{} was not written", class.header_filename()))
            };

            result.classes.push(ClassReport {
                name: class.name().to_string(),
                header_path: class.header_filename().to_string(),
                source_path: class.source_filename().to_string(),
                header,
                source,
            });
        }

        info!(
            classes = result.classes.len(),
            failed = result.failures(),
            "generation finished"
        );
        Ok(result)
    }
}

fn finish(
    path: &str,
    file: FileBuilder,
    outcome: Result<(), EmitError>,
) -> Result<PreviewFile, GenerateError> {
    let error = match outcome {
        Ok(()) => None,
        Err(EmitError::IncludeStorage { class, source }) => {
            error!(class = %class, file = path, "include storage exhausted, aborting");
            return Err(GenerateError::IncludeStorage { class, source });
        }
        Err(err) => {
            warn!(file = path, error = %err, "emission failed, output is partial");
            Some(err)
        }
    };

    Ok(PreviewFile {
        path: path.to_string(),
        content: file.build(),
        error,
    })
}

fn write(output_dir: &Path, file: PreviewFile) -> FileStatus {
    match File::new(&file.path, file.content).write(output_dir) {
        Ok(written) => {
            info!(path = %written.path.display(), bytes = written.bytes, "file written");
            match file.error {
                Some(err) => FileStatus::Failed(err),
                None => FileStatus::Written,
            }
        }
        Err(err) => {
            warn!(file = %file.path, error = %err, "skipping file");
            FileStatus::Skipped(format!("{:#}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use adtgen_schema::{Member, MemberKind};
    use tempfile::TempDir;

    use super::*;

    fn registry() -> Registry {
        Registry::new(vec![
            ClassSchema::new(
                "Alpha",
                vec![Member::new("Count", MemberKind::Integer).type_name("int")],
            ),
            ClassSchema::new("Beta", vec![Member::new("Label", MemberKind::String)]),
            ClassSchema::new(
                "Gamma",
                vec![
                    Member::new("Level", MemberKind::Integer).type_name("int"),
                    Member::new("Broken", MemberKind::Class),
                ],
            ),
        ])
    }

    #[test]
    fn test_generate_writes_files() {
        let registry = registry();
        let temp = TempDir::new().unwrap();
        let result = Generator::new(&registry).generate(temp.path()).unwrap();

        assert_eq!(result.classes.len(), 3);
        assert!(result.classes[0].is_success());
        assert!(result.classes[1].is_success());
        assert!(temp.path().join("Alpha.h").exists());
        assert!(temp.path().join("Beta.c").exists());
    }

    #[test]
    fn test_malformed_class_keeps_partial_files() {
        let registry = registry();
        let temp = TempDir::new().unwrap();
        let result = Generator::new(&registry).generate(temp.path()).unwrap();

        let gamma = &result.classes[2];
        assert!(matches!(gamma.header, FileStatus::Failed(_)));
        assert!(matches!(gamma.source, FileStatus::Failed(_)));
        assert_eq!(result.failures(), 1);

        let partial = fs::read_to_string(temp.path().join("Gamma.h")).unwrap();
        assert!(partial.starts_with("#ifndef GAMMA_H\n"));
    }

    #[test]
    fn test_unopenable_header_skips_class_and_continues() {
        let registry = registry();
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("Alpha.h")).unwrap();

        let result = Generator::new(&registry).generate(temp.path()).unwrap();

        let alpha = &result.classes[0];
        match &alpha.header {
            FileStatus::Skipped(reason) => assert!(reason.contains("Alpha.h"), "{}", reason),
            other => panic!("unexpected status {:?}", other),
        }
        assert!(matches!(alpha.source, FileStatus::Skipped(_)));
        assert!(!temp.path().join("Alpha.c").exists());
        assert!(result.classes[1].is_success());
        assert!(!result.is_success());
    }

    #[test]
    fn test_duplicate_member_fails_class() {
        let registry = Registry::new(vec![
            ClassSchema::new(
                "Twice",
                vec![
                    Member::new("Name", MemberKind::String),
                    Member::new("Name", MemberKind::Integer).type_name("int"),
                ],
            ),
            ClassSchema::new("Beta", vec![Member::new("Label", MemberKind::String)]),
        ]);
        let temp = TempDir::new().unwrap();
        let result = Generator::new(&registry).generate(temp.path()).unwrap();

        let twice = &result.classes[0];
        for (_, status) in twice.files() {
            match status {
                FileStatus::Failed(EmitError::Catalog { source, .. }) => assert!(matches!(
                    **source,
                    adtgen_schema::Error::DuplicateMember { .. }
                )),
                other => panic!("unexpected status {:?}", other),
            }
        }
        assert!(result.classes[1].is_success());
        assert_eq!(result.failures(), 1);

        let source = fs::read_to_string(temp.path().join("Twice.c")).unwrap();
        assert!(!source.contains("Twice_get_Name"));
    }

    #[test]
    fn test_invalid_class_name_fails_class() {
        let registry = Registry::new(vec![ClassSchema::new(
            "bad-name",
            vec![Member::new("Label", MemberKind::String)],
        )]);
        let temp = TempDir::new().unwrap();
        let result = Generator::new(&registry).generate(temp.path()).unwrap();

        assert!(matches!(result.classes[0].header, FileStatus::Failed(_)));
        assert!(matches!(result.classes[0].source, FileStatus::Failed(_)));
        assert!(!result.is_success());
    }

    #[test]
    fn test_include_limit_aborts_run() {
        let registry = Registry::new(vec![
            ClassSchema::new(
                "Alpha",
                vec![Member::new("Count", MemberKind::Integer).type_name("int")],
            ),
            ClassSchema::new(
                "Wide",
                vec![
                    Member::new("Label", MemberKind::String),
                    Member::new("Items", MemberKind::List),
                    Member::new("Note", MemberKind::DomString),
                ],
            ),
            ClassSchema::new("Beta", vec![Member::new("Label", MemberKind::String)]),
        ]);
        let options = GeneratorOptions {
            include_limit: Some(4),
            ..GeneratorOptions::default()
        };
        let temp = TempDir::new().unwrap();

        let err = Generator::new(&registry)
            .with_options(options)
            .generate(temp.path())
            .unwrap_err();

        match err {
            GenerateError::IncludeStorage { class, .. } => assert_eq!(class, "Wide"),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(temp.path().join("Alpha.h").exists());
        assert!(temp.path().join("Alpha.c").exists());
        assert!(!temp.path().join("Wide.h").exists());
        assert!(!temp.path().join("Beta.h").exists());
    }

    #[test]
    fn test_selection_keeps_registry_order() {
        let registry = registry();
        let options = GeneratorOptions {
            classes: Some(vec!["Beta".to_string(), "Alpha".to_string()]),
            ..GeneratorOptions::default()
        };
        let generator = Generator::new(&registry).with_options(options);
        let names: Vec<&str> = generator.selected().unwrap().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
    }

    #[test]
    fn test_unknown_selection_is_an_error() {
        let registry = registry();
        let options = GeneratorOptions {
            classes: Some(vec!["Delta".to_string()]),
            ..GeneratorOptions::default()
        };
        let err = Generator::new(&registry)
            .with_options(options)
            .preview()
            .unwrap_err();
        assert!(matches!(err, GenerateError::Selection(_)));
    }

    #[test]
    fn test_preview_matches_generate() {
        let registry = registry();
        let temp = TempDir::new().unwrap();
        let generator = Generator::new(&registry);
        generator.generate(temp.path()).unwrap();

        for file in generator.preview().unwrap() {
            let on_disk = fs::read_to_string(temp.path().join(&file.path)).unwrap();
            assert_eq!(on_disk, file.content, "{}", file.path);
        }
    }
}
