//! Owned `UpnpString` objects.

use super::{KindTemplate, Slot};
use crate::ast::{Function, Signature};

pub(crate) struct StringTemplate;

impl KindTemplate for StringTemplate {
    fn storage(&self, slot: &Slot<'_>) -> String {
        format!("{} *", slot.ty)
    }

    fn construct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![format!("{} = UpnpString_new();", slot.field())]
    }

    fn destruct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![
            format!("UpnpString_delete({});", slot.field()),
            format!("{} = 0;", slot.field()),
        ]
    }

    fn accessors(&self, slot: &Slot<'_>) -> Vec<Function> {
        let field = slot.field();
        let get = slot.names.get();
        let class_ptr = slot.class_ptr();
        let const_class_ptr = slot.const_class_ptr();

        vec![
            Function::new(
                Signature::new("const UpnpString *", get.as_str()).param(&const_class_ptr, "p"),
            )
            .line(format!("return {};", field)),
            Function::new(
                Signature::new("int", slot.names.set())
                    .param(&class_ptr, "p")
                    .param("const UpnpString *", "s"),
            )
            .line("const char *q = UpnpString_get_String(s);")
            .blank()
            .line(format!("return UpnpString_set_String({}, q);", field)),
            Function::new(
                Signature::new("size_t", slot.names.length()).param(&const_class_ptr, "p"),
            )
            .line(format!("return UpnpString_get_Length({}(p));", get)),
            Function::new(
                Signature::new("const char *", slot.names.cstr()).param(&const_class_ptr, "p"),
            )
            .line(format!("return UpnpString_get_String({}(p));", get)),
            Function::new(
                Signature::new("int", slot.names.strcpy())
                    .param(&class_ptr, "p")
                    .param("const char *", "s"),
            )
            .line(format!("return UpnpString_set_String({}, s);", field)),
            Function::new(
                Signature::new("int", slot.names.strncpy())
                    .param(&class_ptr, "p")
                    .param("const char *", "s")
                    .param("size_t", "n"),
            )
            .line(format!("return UpnpString_set_StringN({}, s, n);", field)),
            Function::new(Signature::new("void", slot.names.clear()).param(&class_ptr, "p"))
                .line(format!("UpnpString_clear({});", field)),
        ]
    }
}
