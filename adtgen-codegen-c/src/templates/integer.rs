//! Scalar members stored by value.

use super::{KindTemplate, Slot};
use crate::ast::{Function, Signature};

pub(crate) struct IntegerTemplate;

impl KindTemplate for IntegerTemplate {
    fn storage(&self, slot: &Slot<'_>) -> String {
        slot.ty.to_string()
    }

    fn construct(&self, slot: &Slot<'_>) -> Vec<String> {
        match slot.init {
            Some(value) => vec![format!("{} = {};", slot.field(), value)],
            // calloc already zeroed it
            None => vec![format!("/*{} = 0;*/", slot.field())],
        }
    }

    fn destruct(&self, slot: &Slot<'_>) -> Vec<String> {
        vec![format!("{} = {};", slot.field(), slot.init.unwrap_or("0"))]
    }

    fn accessors(&self, slot: &Slot<'_>) -> Vec<Function> {
        vec![
            Function::new(
                Signature::new(slot.ty, slot.names.get()).param(&slot.const_class_ptr(), "p"),
            )
            .line(format!("return {};", slot.field())),
            Function::new(
                Signature::new("int", slot.names.set())
                    .param(&slot.class_ptr(), "p")
                    .param(slot.ty, "n"),
            )
            .line(format!("{} = n;", slot.field()))
            .blank()
            .line("return 1;"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::MemberNames;

    fn slot<'a>(init: Option<&'a str>) -> Slot<'a> {
        Slot {
            class: "Foo",
            ty: "int",
            init,
            names: MemberNames::new("Foo", "Level"),
        }
    }

    #[test]
    fn test_initial_value_used_for_construct_and_destruct() {
        let slot = slot(Some("5"));
        assert_eq!(IntegerTemplate.construct(&slot), ["p->m_Level = 5;"]);
        assert_eq!(IntegerTemplate.destruct(&slot), ["p->m_Level = 5;"]);
    }

    #[test]
    fn test_default_is_commented_zero() {
        let slot = slot(None);
        assert_eq!(IntegerTemplate.construct(&slot), ["/*p->m_Level = 0;*/"]);
        assert_eq!(IntegerTemplate.destruct(&slot), ["p->m_Level = 0;"]);
    }
}
