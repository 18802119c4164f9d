//! Nested class members: an owned pointer to another generated class.

use adtgen_codegen::CodeFragment;

use super::{KindTemplate, Slot};
use crate::ast::{Function, Signature};

pub(crate) struct ClassTemplate;

impl KindTemplate for ClassTemplate {
    fn storage(&self, slot: &Slot<'_>) -> String {
        format!("{} *", slot.ty)
    }

    fn construct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![format!("{} = {}_new();", slot.field(), slot.ty)]
    }

    fn destruct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![
            format!("{}_delete({});", slot.ty, slot.field()),
            format!("{} = 0;", slot.field()),
        ]
    }

    fn accessors(&self, slot: &Slot<'_>) -> Vec<Function> {
        let ty = slot.ty;
        let field = slot.field();
        let const_ptr = format!("const {} *", ty);

        // The previous value is released only once the copy exists.
        let set = Function::new(
            Signature::new("int", slot.names.set())
                .param(&slot.class_ptr(), "p")
                .param(&const_ptr, "n"),
        )
        .line(format!("{} *q = 0;", ty))
        .blank()
        .fragments([CodeFragment::block(
            "if (n) {",
            vec![
                CodeFragment::line(format!("q = {}_dup(n);", ty)),
                CodeFragment::line("if (!q) return 0;"),
            ],
            Some("}".to_string()),
        )])
        .line(format!("{}_delete({});", ty, field))
        .line(format!("{} = q;", field))
        .blank()
        .line("return 1;");

        vec![
            Function::new(
                Signature::new(const_ptr.as_str(), slot.names.get())
                    .param(&slot.const_class_ptr(), "p"),
            )
            .line(format!("return {};", field)),
            set,
        ]
    }
}
