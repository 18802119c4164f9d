//! Implementation file of one class.

use adtgen_codegen::{CodeFragment, FileBuilder};
use adtgen_schema::ClassSchema;
use tracing::debug;

use crate::{
    EmitError, GeneratorOptions,
    ast::{Function, Struct},
    lifecycle::Lifecycle,
    naming::{ClassNames, struct_tag},
    options::include_line,
    preamble::{banner, catalog_error, check_class, record},
    templates::MemberTemplate,
};

/// Emits `X.c`: the struct, the lifecycle functions and the accessors.
pub struct SourceEmitter<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> SourceEmitter<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Emit the source of `class` into `file`.
    ///
    /// On error, whatever was emitted before the failing member stays in
    /// `file`.
    pub fn emit(&self, class: &ClassSchema, file: &mut FileBuilder) -> Result<(), EmitError> {
        let name = class.name();
        file.includes.reset();

        file.code.emit(&banner("Source", name, &self.options.banner));
        if let Some(config) = &self.options.config_header {
            if record(&mut file.includes, name, config)? {
                file.code.push_directive(&include_line(config)).push_blank();
            }
        }
        for (header, purpose) in [
            ("<stdlib.h>", "calloc(), free()"),
            ("<string.h>", "memset()"),
        ] {
            if record(&mut file.includes, name, header)? {
                file.code
                    .push_directive(&format!("{} /* for {} */", include_line(header), purpose));
            }
        }
        file.code.push_blank();
        if record(&mut file.includes, name, class.header_filename())? {
            file.code
                .push_directive(&include_line(class.header_filename()))
                .push_blank();
        }

        check_class(class)?;
        let members = class
            .members()
            .iter()
            .map(|m| MemberTemplate::new(name, m))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| catalog_error(class, source))?;

        let tag = struct_tag(name);
        file.code.emit(&Struct::new(tag.as_str()).fields(members.iter().flat_map(|m| m.field())));

        let lifecycle = Lifecycle::new(name);
        let names = ClassNames::new(name);
        for function in [
            constructor(&lifecycle, name, &tag, &members),
            destructor(&lifecycle, &members),
            assignment(&lifecycle, &members),
            copy_constructor(&lifecycle, name, &names),
        ] {
            file.code.push_blank().emit(&function);
        }

        for member in &members {
            debug!(class = name, member = member.member().name(), "emitting accessors");
            file.code.push_blank().emit(&member.methods());
        }

        Ok(())
    }
}

fn constructor(
    lifecycle: &Lifecycle,
    class: &str,
    tag: &str,
    members: &[MemberTemplate<'_>],
) -> Function {
    Function::new(lifecycle.constructor.clone())
        .line(format!("struct {} *p = calloc(1, sizeof (struct {}));", tag, tag))
        .blank()
        .line("if (!p) return 0;")
        .blank()
        .fragments(members.iter().flat_map(|m| m.construct()))
        .blank()
        .line(format!("return ({} *)p;", class))
}

/// Members are released in reverse declaration order.
fn destructor(lifecycle: &Lifecycle, members: &[MemberTemplate<'_>]) -> Function {
    Function::new(lifecycle.destructor.clone())
        .line("if (!p) return;")
        .blank()
        .fragments(members.iter().rev().flat_map(|m| m.destruct()))
        .blank()
        .line("free(p);")
}

fn assignment(lifecycle: &Lifecycle, members: &[MemberTemplate<'_>]) -> Function {
    Function::new(lifecycle.assign.clone())
        .line("int ok = 1;")
        .blank()
        .fragments([CodeFragment::block(
            "if (p != q) {",
            members.iter().flat_map(|m| m.assign()).collect(),
            Some("}".to_string()),
        )])
        .blank()
        .line("return ok;")
}

fn copy_constructor(lifecycle: &Lifecycle, class: &str, names: &ClassNames<'_>) -> Function {
    Function::new(lifecycle.copy_constructor.clone())
        .line(format!("{} *p = {}();", class, names.constructor()))
        .blank()
        .line("if (!p) return 0;")
        .blank()
        .fragments([CodeFragment::block(
            format!("if (!{}(p, q)) {{", names.assign()),
            vec![
                CodeFragment::line(format!("{}(p);", names.destructor())),
                CodeFragment::line("return 0;"),
            ],
            Some("}".to_string()),
        )])
        .blank()
        .line("return p;")
}

#[cfg(test)]
mod tests {
    use adtgen_schema::{Member, MemberKind};

    use super::*;

    fn render(class: &ClassSchema) -> String {
        let options = GeneratorOptions::default();
        let mut file = FileBuilder::c();
        SourceEmitter::new(&options).emit(class, &mut file).unwrap();
        file.build()
    }

    #[test]
    fn test_includes_class_header() {
        let class = ClassSchema::new("Foo", vec![Member::new("A", MemberKind::Integer).type_name("int")]);
        let source = render(&class);
        assert!(source.contains(
            "#include \"config.h\"\n\n#include <stdlib.h> /* for calloc(), free() */\n#include <string.h> /* for memset() */\n\n#include \"Foo.h\"\n\nstruct s_Foo\n{\n\tint m_A;\n};\n"
        ));
    }

    #[test]
    fn test_without_config_header() {
        let options = GeneratorOptions {
            config_header: None,
            ..GeneratorOptions::default()
        };
        let class = ClassSchema::new("Foo", vec![Member::new("A", MemberKind::Integer).type_name("int")]);
        let mut file = FileBuilder::c();
        SourceEmitter::new(&options).emit(&class, &mut file).unwrap();
        assert!(!file.build().contains("config.h"));
    }

    #[test]
    fn test_destructor_reverses_members() {
        let class = ClassSchema::new(
            "Foo",
            vec![
                Member::new("A", MemberKind::Integer).type_name("int"),
                Member::new("B", MemberKind::String),
                Member::new("C", MemberKind::DomString),
            ],
        );
        let source = render(&class);
        let body = &source[source.find("void Foo_delete").unwrap()..];
        let c = body.find("p->m_C").unwrap();
        let b = body.find("p->m_B").unwrap();
        let a = body.find("p->m_A").unwrap();
        assert!(c < b && b < a);
    }

    #[test]
    fn test_copy_constructor_releases_on_failed_assign() {
        let class = ClassSchema::new("Foo", vec![Member::new("A", MemberKind::String)]);
        assert!(render(&class).contains(
            "Foo *Foo_dup(const Foo *q)\n{\n\tFoo *p = Foo_new();\n\n\tif (!p) return 0;\n\n\tif (!Foo_assign(p, q)) {\n\t\tFoo_delete(p);\n\t\treturn 0;\n\t}\n\n\treturn p;\n}\n"
        ));
    }

    #[test]
    fn test_empty_class_is_rejected() {
        let options = GeneratorOptions::default();
        let class = ClassSchema::new("Foo", vec![]);
        let mut file = FileBuilder::c();
        let err = SourceEmitter::new(&options)
            .emit(&class, &mut file)
            .unwrap_err();
        assert!(matches!(err, EmitError::Catalog { .. }));
        assert!(file.build().contains("#include \"Foo.h\""));
    }
}
