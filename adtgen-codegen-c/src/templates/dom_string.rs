//! Owned DOM string buffers.

use adtgen_codegen::CodeFragment;

use super::{KindTemplate, Slot};
use crate::ast::{Function, Signature};

pub(crate) struct DomStringTemplate;

impl KindTemplate for DomStringTemplate {
    fn storage(&self, slot: &Slot<'_>) -> String {
        slot.ty.to_string()
    }

    fn construct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![format!("/*{} = 0;*/", slot.field())]
    }

    fn destruct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![
            format!("ixmlFreeDOMString({});", slot.field()),
            format!("{} = 0;", slot.field()),
        ]
    }

    fn accessors(&self, slot: &Slot<'_>) -> Vec<Function> {
        let field = slot.field();
        let const_dom = format!("const {}", slot.ty);

        vec![
            Function::new(
                Signature::new(const_dom.as_str(), slot.names.get())
                    .param(&slot.const_class_ptr(), "p"),
            )
            .line(format!("return {};", field)),
            Function::new(
                Signature::new("int", slot.names.set())
                    .param(&slot.class_ptr(), "p")
                    .param(&const_dom, "s"),
            )
            .line(format!("{} q = 0;", slot.ty))
            .blank()
            .fragments([CodeFragment::block(
                "if (s) {",
                vec![
                    CodeFragment::line("q = ixmlCloneDOMString(s);"),
                    CodeFragment::line("if (!q) return 0;"),
                ],
                Some("}".to_string()),
            )])
            .line(format!("ixmlFreeDOMString({});", field))
            .line(format!("{} = q;", field))
            .blank()
            .line("return 1;"),
            Function::new(
                Signature::new("const char *", slot.names.cstr())
                    .param(&slot.const_class_ptr(), "p"),
            )
            .line(format!("return (const char *){}(p);", slot.names.get())),
        ]
    }
}
