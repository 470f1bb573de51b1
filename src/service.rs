//! The `Reliability` service value.
//!
//! Stateless apart from the adapter it carries. Build one where the application starts
//! and hand it to whoever needs it:
//!
//! ```no_run
//! use reliability::Reliability;
//!
//! let fs = Reliability::new();
//! if fs.is_directory("/var/tmp/origin") {
//!     fs.move_directory("/var/tmp/origin", "/var/tmp/destination")?;
//! }
//! # Ok::<(), reliability::ReliabilityError>(())
//! ```

use std::num::NonZeroUsize;

use crate::errors::Result;
use crate::storage::{LocalAdapter, StorageAdapter};
use crate::{classify, fs_ops, paths};

#[derive(Debug, Clone, Default)]
pub struct Reliability<A = LocalAdapter> {
    adapter: A,
}

impl Reliability<LocalAdapter> {
    /// Service backed by the local filesystem.
    pub fn new() -> Self {
        Self {
            adapter: LocalAdapter,
        }
    }
}

impl<A: StorageAdapter> Reliability<A> {
    pub fn with_adapter(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn basename(&self, path: &str) -> String {
        paths::basename(path)
    }

    pub fn filename(&self, path: &str) -> String {
        paths::filename(path)
    }

    pub fn dirname(&self, path: &str) -> String {
        paths::dirname(path)
    }

    pub fn dirname_levels(&self, path: &str, levels: NonZeroUsize) -> String {
        paths::dirname_levels(path, levels)
    }

    pub fn absolute_path(&self, path: &str) -> Option<String> {
        paths::absolute_path(path)
    }

    pub fn exists(&self, path: &str) -> bool {
        classify::exists(path)
    }

    pub fn is_directory(&self, path: &str) -> bool {
        classify::is_directory(path)
    }

    pub fn is_file(&self, path: &str) -> bool {
        classify::is_file(path)
    }

    pub fn is_directory_or_fail(&self, path: &str) -> Result<bool> {
        classify::is_directory_or_fail(path)
    }

    pub fn mount(&self, directory: &str) -> Result<A::Root> {
        fs_ops::mount(&self.adapter, directory)
    }

    pub fn read_file_lines(&self, path: &str) -> Result<Vec<String>> {
        fs_ops::read_file_lines(&self.adapter, path)
    }

    pub fn remove_directory(&self, path: &str, only_contents: bool) -> Result<()> {
        fs_ops::remove_directory(&self.adapter, path, only_contents)
    }

    pub fn copy_directory(&self, origin: &str, destination: &str) -> Result<usize> {
        fs_ops::copy_directory(&self.adapter, origin, destination)
    }

    pub fn move_directory(&self, origin: &str, destination: &str) -> Result<usize> {
        fs_ops::move_directory(&self.adapter, origin, destination)
    }

    pub fn remove_file(&self, path: &str) -> Result<()> {
        fs_ops::remove_file(&self.adapter, path)
    }

    pub fn copy_file(&self, origin: &str, destination: &str) -> Result<usize> {
        fs_ops::copy_file(&self.adapter, origin, destination)
    }

    pub fn move_file(&self, origin: &str, destination: &str) -> Result<usize> {
        fs_ops::move_file(&self.adapter, origin, destination)
    }
}
