//! Named storage disk boundary.
//!
//! The registry's only view of non-filesystem storage. Hosts adapt their own
//! storage layer (object stores, embedded archives, asset pipelines) by
//! implementing [`Disk`] and registering it under a name with
//! [`IconRegistry::add_disk`](crate::IconRegistry::add_disk).

use std::collections::HashMap;
use std::io;

/// A named storage disk that can list and read files by relative path.
///
/// Missing files must be reported as [`io::ErrorKind::NotFound`]; any other
/// error is treated as unexpected and passed through to the caller.
pub trait Disk: Send + Sync {
    /// List every file on the disk as a relative path string.
    fn list_all_files(&self) -> io::Result<Vec<String>>;

    /// Read a file's contents by relative path.
    fn read_file(&self, relative: &str) -> io::Result<String>;
}

/// In-memory [`Disk`] backed by a map of relative path to file contents.
///
/// Useful for embedded icon sets and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisk {
    files: HashMap<String, String>,
}

impl MemoryDisk {
    /// Create an empty disk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous contents at the same path.
    pub fn insert(&mut self, relative: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(relative.into(), contents.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_file(mut self, relative: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(relative, contents);
        self
    }
}

impl Disk for MemoryDisk {
    fn list_all_files(&self) -> io::Result<Vec<String>> {
        let mut files: Vec<String> = self.files.keys().cloned().collect();
        files.sort();
        Ok(files)
    }

    fn read_file(&self, relative: &str) -> io::Result<String> {
        self.files.get(relative).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file '{relative}'"))
        })
    }
}
