//! Component discovery for host UI frameworks.
//!
//! [`IconRegistry::register_components`](crate::IconRegistry::register_components)
//! enumerates every file in every registered set and reports each one to a
//! [`ComponentRegistrar`] as a dotted name plus the owning set's prefix. The
//! registry's responsibility ends there; binding the name to an actual
//! template or component is the host's job.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Callback supplied by the host rendering system.
///
/// Receives one call per discovered icon. Fire-and-forget: no return value
/// is consumed.
pub trait ComponentRegistrar {
    /// Bind a component to `dotted_name` under the given set prefix.
    fn register(&mut self, dotted_name: &str, prefix: &str);
}

impl<F> ComponentRegistrar for F
where
    F: FnMut(&str, &str),
{
    fn register(&mut self, dotted_name: &str, prefix: &str) {
        self(dotted_name, prefix)
    }
}

/// Derive the dotted component name for a file under a path-based set root.
///
/// The root is stripped from the file's directory, the remainder split into
/// segments with empty ones discarded, and the file stem appended:
/// `<root>/arrows/thin/up.svg` becomes `arrows.thin.up`. Returns `None` for
/// files outside the root or with non-UTF-8 names.
pub(crate) fn dotted_name_for_path(root: &Path, file: &Path) -> Option<String> {
    let stem = file.file_stem()?.to_str()?;
    let directory = file.parent().unwrap_or(root);
    let relative = directory.strip_prefix(root).ok()?;

    let mut segments: Vec<&str> = relative
        .iter()
        .filter_map(|segment| segment.to_str())
        .filter(|segment| !segment.is_empty())
        .collect();
    segments.push(stem);
    Some(segments.join("."))
}

/// Derive the dotted component name for a disk-relative path string.
///
/// `arrows/up.svg` becomes `arrows.up`.
pub(crate) fn dotted_name_for_relative(relative: &str) -> Option<String> {
    let path = Path::new(relative);
    let stem = path.file_stem()?.to_str()?;

    let mut segments: Vec<&str> = path
        .parent()
        .map(|parent| {
            parent
                .iter()
                .filter_map(|segment| segment.to_str())
                .filter(|segment| !segment.is_empty())
                .collect()
        })
        .unwrap_or_default();
    segments.push(stem);
    Some(segments.join("."))
}

/// Recursively collect every file under `root`.
pub(crate) fn walk_files(root: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}
