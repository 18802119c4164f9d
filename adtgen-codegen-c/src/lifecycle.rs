//! Constructor, destructor, copy constructor and assignment signatures.

use crate::{ast::Signature, naming::ClassNames};

/// The four lifecycle signatures of a class, shared by both emitters.
pub(crate) struct Lifecycle {
    pub constructor: Signature,
    pub destructor: Signature,
    pub copy_constructor: Signature,
    pub assign: Signature,
}

impl Lifecycle {
    pub fn new(class: &str) -> Self {
        let names = ClassNames::new(class);
        let ptr = format!("{} *", class);
        let const_ptr = format!("const {} *", class);

        Self {
            constructor: Signature::new(ptr.as_str(), names.constructor()),
            destructor: Signature::new("void", names.destructor()).param(&ptr, "p"),
            copy_constructor: Signature::new(ptr.as_str(), names.copy_constructor())
                .param(&const_ptr, "q"),
            assign: Signature::new("int", names.assign())
                .param(&ptr, "p")
                .param(&const_ptr, "q"),
        }
    }

    /// Signatures with their header documentation, in declaration order.
    pub fn documented(&self) -> [(&'static str, &Signature); 4] {
        [
            ("Constructor", &self.constructor),
            ("Destructor", &self.destructor),
            ("Copy Constructor", &self.copy_constructor),
            ("Assignment operator", &self.assign),
        ]
    }
}
