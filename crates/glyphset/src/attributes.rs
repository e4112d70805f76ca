//! Icon attribute formatting.

use std::collections::BTreeMap;

/// Final HTML-style attribute mapping attached to a rendered icon.
pub type Attributes = BTreeMap<String, String>;

/// The `class` argument accepted by
/// [`IconRegistry::svg`](crate::IconRegistry::svg).
///
/// Either a class string merged after the registry-wide and per-set classes,
/// or a full attribute map that replaces the separate `attributes` argument
/// outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconClass {
    /// Class string appended to the computed default and set classes.
    Name(String),
    /// Full attribute set used verbatim; a computed class is injected only
    /// when the map lacks a `class` key.
    Attributes(Attributes),
}

impl Default for IconClass {
    fn default() -> Self {
        Self::Name(String::new())
    }
}

impl From<&str> for IconClass {
    fn from(class: &str) -> Self {
        Self::Name(class.to_string())
    }
}

impl From<String> for IconClass {
    fn from(class: String) -> Self {
        Self::Name(class)
    }
}

impl From<Attributes> for IconClass {
    fn from(attributes: Attributes) -> Self {
        Self::Attributes(attributes)
    }
}

/// Join two class fragments with a single space.
///
/// Each side is trimmed; the joining space is dropped when either side is
/// empty. Fragments are not deduplicated.
pub(crate) fn join_classes(left: &str, right: &str) -> String {
    let left = left.trim();
    let right = right.trim();
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left} {right}"),
    }
}
