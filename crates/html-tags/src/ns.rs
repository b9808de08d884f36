//! Helpers for `:namespace:name` qualified element names.
//!
//! Namespaced names appear in element schemas (`:svg:rect`, `:math:mi`) and in
//! parser output once an implicit namespace has been applied.

use crate::TagError;

/// Splits a qualified name into its namespace prefix and local name.
///
/// Names that do not start with `:` have no prefix.
pub fn split_ns_name(name: &str) -> Result<(Option<&str>, &str), TagError> {
    let Some(rest) = name.strip_prefix(':') else {
        return Ok((None, name));
    };
    match rest.split_once(':') {
        Some((prefix, local)) => Ok((Some(prefix), local)),
        None => Err(TagError::UnsupportedNamespace {
            name: name.to_string(),
        }),
    }
}

/// Returns the namespace prefix of a qualified name, if any.
///
/// Malformed qualified names are treated as having no prefix.
pub fn ns_prefix(name: &str) -> Option<&str> {
    split_ns_name(name).ok().and_then(|(prefix, _)| prefix)
}

/// Joins a namespace prefix and local name into `:prefix:local`.
///
/// An empty prefix yields the bare local name.
pub fn merge_ns_and_name(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!(":{prefix}:{local}")
    }
}
