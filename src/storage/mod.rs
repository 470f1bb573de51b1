//! Storage adapter contract.
//!
//! The transfer operations only ever talk to a [`MountedRoot`]: a handle scoped to one
//! directory, addressed with '/'-separated paths relative to that directory. A
//! [`StorageAdapter`] produces such handles. Keeping the core behind these two traits
//! lets the local disk, an in-memory map or a remote store back the same operations.
//!
//! Errors are plain `io::Error`s; the core decides which failure kind they become.

mod local;
mod memory;

pub use local::{LocalAdapter, LocalRoot};
pub use memory::{MemoryAdapter, MemoryRoot};

use std::io;

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One record from a listing. `path` is relative to the mounted root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Binds a root directory to a handle.
pub trait StorageAdapter {
    type Root: MountedRoot;

    /// Scope a handle to `root`, creating it when missing. Fails when the backend
    /// rejects the root.
    fn mount(&self, root: &str) -> io::Result<Self::Root>;

    /// Like [`mount`](Self::mount) but never creates anything: a missing root is
    /// `NotFound`. Used for the side of an operation that is read from.
    fn mount_existing(&self, root: &str) -> io::Result<Self::Root>;
}

/// Operations on a mounted directory. All paths are relative to the root.
pub trait MountedRoot {
    /// Entries under `prefix` (`""` is the root itself). Immediate children only unless
    /// `recursive`. Returned paths include the prefix.
    fn list(&self, prefix: &str, recursive: bool) -> io::Result<Vec<TreeEntry>>;

    fn read(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Create or replace a file, creating missing parent directories.
    fn write(&self, path: &str, contents: &[u8]) -> io::Result<()>;

    /// Delete a single file.
    fn delete(&self, path: &str) -> io::Result<()>;

    /// Delete a directory and everything below it.
    fn delete_subtree(&self, path: &str) -> io::Result<()>;
}

/// Normalize a root-relative path: '/'-separated, no empty or `.` segments, no leading
/// or trailing separator. `..` is refused so a handle never escapes its root.
pub(crate) fn clean_relative(path: &str) -> io::Result<String> {
    let mut segments = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("path '{path}' is outside of the mounted root"),
                ));
            }
            s => segments.push(s),
        }
    }
    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_relative_normalizes() {
        assert_eq!(clean_relative("/a//b/./c/").unwrap(), "a/b/c");
        assert_eq!(clean_relative("").unwrap(), "");
        assert_eq!(clean_relative("a\\b").unwrap(), "a/b");
    }

    #[test]
    fn clean_relative_refuses_parent_segments() {
        let err = clean_relative("a/../../etc").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
