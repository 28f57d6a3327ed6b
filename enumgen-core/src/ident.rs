//! Identifier predicates shared by the builder and every exporter.
//!
//! Reserved keywords of the target notations are not checked here; a name
//! such as `Enum` is accepted and it is up to the consumer to escape it.

/// Check why a name is not a valid simple identifier.
///
/// Returns `None` if valid, `Some(reason)` if invalid.
pub fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}

/// Returns `true` if `name` is a non-empty identifier that starts with a
/// letter or underscore and continues with letters, digits or underscores.
pub fn is_valid_identifier(name: &str) -> bool {
    identifier_error(name).is_none()
}

/// Returns `true` if `namespace` is a `.`-separated path of valid identifiers.
///
/// Empty segments (`A..B`, `.A`, `A.`) are rejected.
pub fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty() && namespace.split('.').all(is_valid_identifier)
}

/// Returns `true` if `name` can be used as an assembly and module base name.
pub fn is_valid_assembly_name(name: &str) -> bool {
    is_valid_identifier(name)
}
