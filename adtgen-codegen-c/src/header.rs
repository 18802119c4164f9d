//! Public declaration file of one class.

use adtgen_codegen::{CodeFragment, ConditionalGuard, FileBuilder};
use adtgen_core::guard_macro;
use adtgen_schema::ClassSchema;
use tracing::debug;

use crate::{
    EmitError, GeneratorOptions,
    ast::Prototype,
    lifecycle::Lifecycle,
    naming::struct_tag,
    options::include_line,
    preamble::{banner, catalog_error, check_class, record},
    templates::MemberTemplate,
};

/// Emits `X.h`: include guard, includes, the opaque type and prototypes.
pub struct HeaderEmitter<'a> {
    options: &'a GeneratorOptions,
}

impl<'a> HeaderEmitter<'a> {
    pub fn new(options: &'a GeneratorOptions) -> Self {
        Self { options }
    }

    /// Emit the header of `class` into `file`.
    ///
    /// On error, whatever was emitted before the failing member stays in
    /// `file`.
    pub fn emit(&self, class: &ClassSchema, file: &mut FileBuilder) -> Result<(), EmitError> {
        let name = class.name();
        let guard = guard_macro(name);
        let export = self.options.export_macro.as_str();
        file.includes.reset();

        file.code
            .push_directive(&format!("#ifndef {}", guard))
            .push_directive(&format!("#define {}", guard))
            .push_blank()
            .emit(&banner("Header", name, &self.options.banner));

        record(&mut file.includes, name, "<stdlib.h>")?;
        file.code
            .push_directive("#include <stdlib.h> /* for size_t */")
            .push_blank();
        if let Some(global) = &self.options.global_header {
            if record(&mut file.includes, name, global)? {
                let line = if export.is_empty() {
                    include_line(global)
                } else {
                    format!("{} /* for {} */", include_line(global), export)
                };
                file.code.push_directive(&line).push_blank();
            }
        }

        check_class(class)?;
        let members = class
            .members()
            .iter()
            .map(|m| MemberTemplate::new(name, m))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| catalog_error(class, source))?;

        self.emit_includes(class, file)?;

        let tag = struct_tag(name);
        file.code
            .push_directive("#ifdef __cplusplus")
            .push_line("extern \"C\" {")
            .push_directive("#endif /* __cplusplus */")
            .push_blank()
            .push_line("/*!")
            .push_line(&format!(" * {}", name))
            .push_line(" */")
            .push_line(&format!("typedef struct {} {};", tag, name))
            .push_blank();

        let lifecycle = Lifecycle::new(name);
        for (doc, signature) in lifecycle.documented() {
            file.code.emit(&Prototype::new(signature, export).doc(doc));
        }
        file.code.push_blank();

        for member in &members {
            debug!(class = name, member = member.member().name(), "emitting prototypes");
            file.code.emit(&member.prototypes(export)).push_blank();
        }

        file.code
            .push_directive("#ifdef __cplusplus")
            .push_line("}")
            .push_directive("#endif /* __cplusplus */")
            .push_blank()
            .push_directive(&format!("#endif /* {} */", guard));

        Ok(())
    }

    /// One `#include` per distinct required header, in first-seen order.
    fn emit_includes(&self, class: &ClassSchema, file: &mut FileBuilder) -> Result<(), EmitError> {
        let mut emitted = false;
        for member in class.members() {
            if let Some(header) = member.required_include() {
                if record(&mut file.includes, class.name(), header)? {
                    let guard = ConditionalGuard::new(shared_guard(class, header));
                    file.code
                        .emit(&guard.wrap(vec![CodeFragment::directive(include_line(header))]));
                    emitted = true;
                }
            }
        }
        if emitted {
            file.code.push_blank();
        }
        Ok(())
    }
}

/// Guard of an include: kept only when every member needing `header`
/// carries the same one.
fn shared_guard<'c>(class: &'c ClassSchema, header: &str) -> Option<&'c str> {
    let mut guards = class
        .members()
        .iter()
        .filter(|m| m.required_include() == Some(header))
        .map(|m| m.guard().map(str::trim));

    match guards.next() {
        Some(Some(first)) => guards.all(|g| g == Some(first)).then_some(first),
        _ => None,
    }
}
