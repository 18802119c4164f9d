//! Per-kind emission templates.
//!
//! Each [`MemberKind`] has one [`KindTemplate`] describing its field, its
//! construction and destruction statements, and its accessor functions.
//! Header prototypes are derived from the same accessor functions so the
//! two generated files always agree.

mod buffer;
mod class;
mod dom_string;
mod integer;
mod list;
mod string;

use adtgen_codegen::{CodeFragment, ConditionalGuard, Renderable};
use adtgen_schema::{Error, Member, MemberKind};

use crate::{
    ast::{Function, Prototype, declare},
    naming::MemberNames,
};

/// What a template knows about the member it is expanding.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slot<'a> {
    /// Owning class name.
    pub class: &'a str,
    /// Resolved C type (declared or implicit).
    pub ty: &'a str,
    pub init: Option<&'a str>,
    pub names: MemberNames<'a>,
}

impl Slot<'_> {
    /// `p->m_<Member>`
    pub fn field(&self) -> String {
        format!("p->{}", self.names.field())
    }

    pub fn class_ptr(&self) -> String {
        format!("{} *", self.class)
    }

    pub fn const_class_ptr(&self) -> String {
        format!("const {} *", self.class)
    }
}

/// Emission rules of one member kind.
pub(crate) trait KindTemplate: Sync {
    /// Type the struct field is stored as.
    fn storage(&self, slot: &Slot<'_>) -> String;

    /// Statements run by the constructor.
    fn construct(&self, slot: &Slot<'_>) -> Vec<String>;

    /// Statements run by the destructor.
    fn destruct(&self, slot: &Slot<'_>) -> Vec<String>;

    /// Accessor functions, in prototype order.
    fn accessors(&self, slot: &Slot<'_>) -> Vec<Function>;
}

/// Template for `kind`.
pub(crate) fn kind_template(kind: MemberKind) -> &'static dyn KindTemplate {
    match kind {
        MemberKind::Class => &class::ClassTemplate,
        MemberKind::Integer => &integer::IntegerTemplate,
        MemberKind::Buffer => &buffer::BufferTemplate,
        MemberKind::List => &list::ListTemplate,
        MemberKind::String => &string::StringTemplate,
        MemberKind::DomString => &dom_string::DomStringTemplate,
    }
}

fn lines(lines: Vec<String>) -> Vec<CodeFragment> {
    lines.into_iter().map(CodeFragment::Line).collect()
}

/// A checked member bound to its kind template and guard.
///
/// Every fragment it hands out is already wrapped in the member's
/// conditional guard.
pub struct MemberTemplate<'a> {
    member: &'a Member,
    slot: Slot<'a>,
    template: &'static dyn KindTemplate,
    guard: ConditionalGuard<'a>,
}

impl<'a> MemberTemplate<'a> {
    /// Bind `member` of `class`, rejecting members that fail their
    /// integrity check.
    pub fn new(class: &'a str, member: &'a Member) -> adtgen_schema::Result<Self> {
        member.check(class)?;
        let ty = member.c_type().ok_or_else(|| {
            Box::new(Error::MissingTypeName {
                class: class.to_string(),
                member: member.name().to_string(),
                kind: member.kind(),
            })
        })?;

        Ok(Self {
            member,
            slot: Slot {
                class,
                ty,
                init: member.init_value(),
                names: MemberNames::new(class, member.name()),
            },
            template: kind_template(member.kind()),
            guard: ConditionalGuard::new(member.guard()),
        })
    }

    pub fn member(&self) -> &'a Member {
        self.member
    }

    pub fn names(&self) -> MemberNames<'a> {
        self.slot.names
    }

    /// Struct field declaration.
    pub fn field(&self) -> Vec<CodeFragment> {
        let storage = self.template.storage(&self.slot);
        let decl = format!("{};", declare(&storage, &self.slot.names.field()));
        self.guard.wrap(vec![CodeFragment::line(decl)])
    }

    pub fn construct(&self) -> Vec<CodeFragment> {
        self.guard.wrap(lines(self.template.construct(&self.slot)))
    }

    pub fn destruct(&self) -> Vec<CodeFragment> {
        self.guard.wrap(lines(self.template.destruct(&self.slot)))
    }

    /// Copy of this member from `q` to `p` through its getter and setter.
    pub fn assign(&self) -> Vec<CodeFragment> {
        let names = self.slot.names;
        self.guard.wrap(vec![CodeFragment::line(format!(
            "ok = ok && {}(p, {}(q));",
            names.set(),
            names.get()
        ))])
    }

    /// Prototype group for the header.
    pub fn prototypes(&self, export: &str) -> Vec<CodeFragment> {
        let accessors = self.template.accessors(&self.slot);
        let body = accessors
            .iter()
            .flat_map(|f| Prototype::new(f.signature(), export).to_fragments())
            .collect();
        self.guard.wrap(body)
    }

    /// Accessor definitions for the source, separated by blank lines.
    pub fn methods(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        for (i, function) in self.template.accessors(&self.slot).iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(function.to_fragments());
        }
        self.guard.wrap(body)
    }
}

#[cfg(test)]
mod tests {
    use adtgen_codegen::CodeBuilder;

    use super::*;

    fn render(fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::c();
        builder.emit(&fragments);
        builder.build()
    }

    #[test]
    fn test_every_kind_has_a_template() {
        for kind in MemberKind::ALL {
            let member = Member::new("M", kind).type_name("int");
            let template = MemberTemplate::new("Foo", &member).unwrap();
            assert!(!template.methods().is_empty());
            assert!(!template.prototypes("EXPORT_SPEC").is_empty());
        }
    }

    #[test]
    fn test_new_rejects_missing_type_name() {
        let member = Member::new("Child", MemberKind::Class);
        let err = MemberTemplate::new("Foo", &member).err().unwrap();
        assert!(matches!(*err, Error::MissingTypeName { .. }));
    }

    #[test]
    fn test_field_is_guarded() {
        let member = Member::new("Ctx", MemberKind::Integer)
            .type_name("SSL_CTX*")
            .conditional("#ifdef FEATURE_X");
        let template = MemberTemplate::new("Foo", &member).unwrap();
        assert_eq!(
            render(template.field()),
            "#ifdef FEATURE_X\nSSL_CTX *m_Ctx;\n#endif\n"
        );
    }

    #[test]
    fn test_assign_line() {
        let member = Member::new("Label", MemberKind::String);
        let template = MemberTemplate::new("Foo", &member).unwrap();
        assert_eq!(
            render(template.assign()),
            "ok = ok && Foo_set_Label(p, Foo_get_Label(q));\n"
        );
    }

    #[test]
    fn test_prototypes_match_methods() {
        let member = Member::new("Addr", MemberKind::Buffer).type_name("struct sockaddr_storage");
        let template = MemberTemplate::new("Foo", &member).unwrap();
        let protos = render(template.prototypes(""));
        let methods = render(template.methods());

        for line in protos.lines().filter(|l| !l.starts_with("/*!")) {
            let definition = line.trim_end_matches(';');
            assert!(
                methods.lines().any(|l| l == definition),
                "no definition for {}",
                line
            );
        }
    }
}
