//! Intrusive list heads.

use super::{KindTemplate, Slot};
use crate::ast::{Function, Signature};

pub(crate) struct ListTemplate;

impl KindTemplate for ListTemplate {
    fn storage(&self, slot: &Slot<'_>) -> String {
        slot.ty.to_string()
    }

    fn construct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![format!("UpnpListInit(&{});", slot.field())]
    }

    fn destruct(&self, slot: &Slot<'_>) -> Vec<String> {
        self.construct(slot)
    }

    fn accessors(&self, slot: &Slot<'_>) -> Vec<Function> {
        let field = slot.field();
        let head = slot.ty;
        let const_ptr = format!("const {} *", head);

        vec![
            Function::new(
                Signature::new(const_ptr.as_str(), slot.names.get())
                    .param(&slot.const_class_ptr(), "p"),
            )
            .line(format!("return &{};", field)),
            Function::new(
                Signature::new("int", slot.names.set())
                    .param(&slot.class_ptr(), "p")
                    .param(&const_ptr, "q"),
            )
            .line(format!("{} = *q;", field))
            .blank()
            .line("return 1;"),
            Function::new(
                Signature::new("void", slot.names.add_to_list())
                    .param(&slot.class_ptr(), "p")
                    .param(&format!("{} *", head), "head"),
            )
            .line(format!("{} *list = &{};", head, field))
            .line("UpnpListInsert(list, UpnpListEnd(list), head);"),
        ]
    }
}
