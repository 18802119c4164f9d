//! Inline values copied as a whole (`struct sockaddr_storage` and friends).

use super::{KindTemplate, Slot};
use crate::ast::{Function, Signature};

pub(crate) struct BufferTemplate;

fn clear(slot: &Slot<'_>) -> String {
    format!("memset(&{}, 0, sizeof ({}));", slot.field(), slot.ty)
}

impl KindTemplate for BufferTemplate {
    fn storage(&self, slot: &Slot<'_>) -> String {
        slot.ty.to_string()
    }

    fn construct(&self, slot: &Slot<'_>) -> Vec<String> {
        match slot.init {
            Some(statement) => vec![statement.to_string()],
            None => vec![format!("/* {} */", clear(slot))],
        }
    }

    fn destruct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![clear(slot)]
    }

    fn accessors(&self, slot: &Slot<'_>) -> Vec<Function> {
        let field = slot.field();
        let const_ptr = format!("const {} *", slot.ty);
        let ptr = format!("{} *", slot.ty);

        vec![
            Function::new(
                Signature::new(const_ptr.as_str(), slot.names.get())
                    .param(&slot.const_class_ptr(), "p"),
            )
            .line(format!("return &{};", field)),
            Function::new(
                Signature::new(ptr.as_str(), slot.names.getnc()).param(&slot.class_ptr(), "p"),
            )
            .line(format!("return &{};", field)),
            Function::new(
                Signature::new("int", slot.names.set())
                    .param(&slot.class_ptr(), "p")
                    .param(&const_ptr, "buf"),
            )
            .line(format!("{} = *buf;", field))
            .blank()
            .line("return 1;"),
            Function::new(
                Signature::new("void", slot.names.clear()).param(&slot.class_ptr(), "p"),
            )
            .line(clear(slot)),
        ]
    }
}
