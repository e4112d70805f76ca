//! Icon set definitions and registration options.

use std::path::{Path, PathBuf};

/// Backing source of an icon set: exactly one of a local directory tree or a
/// named storage disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// Root directory containing `.svg` files, searched recursively.
    Path(PathBuf),
    /// Name of a storage disk registered on the registry.
    Disk(String),
}

/// A registered source of icons.
///
/// Immutable once added to the registry; re-registering under the same name
/// replaces the whole set.
#[derive(Debug, Clone)]
pub struct IconSet {
    name: String,
    source: IconSource,
    prefix: String,
    class: Option<String>,
}

impl IconSet {
    pub(crate) fn new(
        name: String,
        source: IconSource,
        prefix: String,
        class: Option<String>,
    ) -> Self {
        Self {
            name,
            source,
            prefix,
            class,
        }
    }

    /// The unique key this set is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where this set's icons live.
    pub fn source(&self) -> &IconSource {
        &self.source
    }

    /// The unique token that qualifies icon names from this set.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Class string applied to every icon from this set.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

/// Options for registering an icon set.
///
/// Built incrementally; validation happens in
/// [`IconRegistry::add`](crate::IconRegistry::add). When both a path and a
/// disk are given, the path wins.
///
/// # Examples
///
/// ```
/// use glyphset::IconSetOptions;
///
/// let options = IconSetOptions::new()
///     .disk("assets")
///     .prefix("ui")
///     .class("ui-icon");
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconSetOptions {
    pub(crate) path: Option<PathBuf>,
    pub(crate) disk: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) class: Option<String>,
}

impl IconSetOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Back the set with a local directory tree.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Back the set with a named storage disk.
    pub fn disk(mut self, disk: impl Into<String>) -> Self {
        self.disk = Some(disk.into());
        self
    }

    /// Prefix used to qualify icon names from this set.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Class string applied to every icon from this set.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}
