//! Shared utility functions for code generation.

/// Convert a string to upper case (e.g., "UpnpEvent" -> "UPNPEVENT")
pub fn to_upper_case(s: &str) -> String {
    s.chars().flat_map(char::to_uppercase).collect()
}

/// Include guard macro for a class header (e.g., "UpnpEvent" -> "UPNPEVENT_H")
pub fn guard_macro(class_name: &str) -> String {
    format!("{}_H", to_upper_case(class_name))
}

/// Check that `s` is a valid C identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
