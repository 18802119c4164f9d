//! C naming conventions for generated classes.

/// Struct tag behind the opaque class alias (`s_<Class>`).
pub fn struct_tag(class: &str) -> String {
    format!("s_{}", class)
}

/// Names of the lifecycle functions of a class.
pub struct ClassNames<'a> {
    class: &'a str,
}

impl<'a> ClassNames<'a> {
    pub fn new(class: &'a str) -> Self {
        Self { class }
    }

    pub fn constructor(&self) -> String {
        format!("{}_new", self.class)
    }

    pub fn destructor(&self) -> String {
        format!("{}_delete", self.class)
    }

    pub fn copy_constructor(&self) -> String {
        format!("{}_dup", self.class)
    }

    pub fn assign(&self) -> String {
        format!("{}_assign", self.class)
    }
}

/// Names of the field and accessors generated for one member.
#[derive(Debug, Clone, Copy)]
pub struct MemberNames<'a> {
    class: &'a str,
    member: &'a str,
}

impl<'a> MemberNames<'a> {
    pub fn new(class: &'a str, member: &'a str) -> Self {
        Self { class, member }
    }

    /// Struct field (`m_<Member>`).
    pub fn field(&self) -> String {
        format!("m_{}", self.member)
    }

    pub fn get(&self) -> String {
        format!("{}_get_{}", self.class, self.member)
    }

    /// Non-const getter.
    pub fn getnc(&self) -> String {
        format!("{}_getnc_{}", self.class, self.member)
    }

    pub fn set(&self) -> String {
        format!("{}_set_{}", self.class, self.member)
    }

    pub fn clear(&self) -> String {
        format!("{}_clear_{}", self.class, self.member)
    }

    pub fn add_to_list(&self) -> String {
        format!("{}_add_to_list_{}", self.class, self.member)
    }

    pub fn length(&self) -> String {
        format!("{}_get_{}_Length", self.class, self.member)
    }

    pub fn cstr(&self) -> String {
        format!("{}_get_{}_cstr", self.class, self.member)
    }

    pub fn strcpy(&self) -> String {
        format!("{}_strcpy_{}", self.class, self.member)
    }

    pub fn strncpy(&self) -> String {
        format!("{}_strncpy_{}", self.class, self.member)
    }
}
