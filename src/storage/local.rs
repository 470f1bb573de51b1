//! Local disk backend.
//! `mount` creates the root directory when it is missing, `mount_existing` does not; a
//! root that exists but is not a directory is rejected either way. Listings walk the tree with walkdir, sorted by name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::{MountedRoot, StorageAdapter, TreeEntry, clean_relative};

/// Mounts directories of the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAdapter;

impl StorageAdapter for LocalAdapter {
    type Root = LocalRoot;

    fn mount(&self, root: &str) -> io::Result<LocalRoot> {
        LocalRoot::open(root)
    }

    fn mount_existing(&self, root: &str) -> io::Result<LocalRoot> {
        LocalRoot::open_existing(root)
    }
}

/// A local directory acting as an adapter root.
#[derive(Debug, Clone)]
pub struct LocalRoot {
    root: PathBuf,
}

impl LocalRoot {
    /// Open `root`, creating it (and its ancestors) when missing.
    pub fn open(root: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with(root.as_ref(), true)
    }

    /// Open `root` only if it already exists as a directory.
    pub fn open_existing(root: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with(root.as_ref(), false)
    }

    fn open_with(root: &Path, create: bool) -> io::Result<Self> {
        let root = if root.as_os_str().is_empty() {
            Path::new(".")
        } else {
            root
        };

        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("root '{}' exists and is not a directory", root.display()),
                ));
            }
            Err(e) if create && e.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(root)?;
                debug!(root = %root.display(), "created missing adapter root");
            }
            Err(e) => return Err(e),
        }

        Ok(Self {
            root: dunce::canonicalize(root)?,
        })
    }

    /// Canonical location of the root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        let rel = clean_relative(path)?;
        if rel.is_empty() {
            Ok(self.root.clone())
        } else {
            Ok(self.root.join(rel))
        }
    }

    fn relative_of(&self, full: &Path) -> io::Result<String> {
        let rel = full.strip_prefix(&self.root).map_err(|_| {
            io::Error::other(format!(
                "'{}' is not under root '{}'",
                full.display(),
                self.root.display()
            ))
        })?;
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(parts.join("/"))
    }
}

impl MountedRoot for LocalRoot {
    fn list(&self, prefix: &str, recursive: bool) -> io::Result<Vec<TreeEntry>> {
        let base = self.resolve(prefix)?;
        let meta = fs::metadata(&base)?;
        if !meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("'{}' is not a directory", base.display()),
            ));
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut entries = Vec::new();
        for entry in WalkDir::new(&base)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = self.relative_of(entry.path())?;
            if entry.file_type().is_dir() {
                entries.push(TreeEntry::directory(path));
            } else {
                entries.push(TreeEntry::file(path));
            }
        }
        Ok(entries)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(path)?)
    }

    fn write(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, contents)
    }

    fn delete(&self, path: &str) -> io::Result<()> {
        fs::remove_file(self.resolve(path)?)
    }

    fn delete_subtree(&self, path: &str) -> io::Result<()> {
        if clean_relative(path)?.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "refusing to delete the mounted root itself",
            ));
        }
        fs::remove_dir_all(self.resolve(path)?)
    }
}
