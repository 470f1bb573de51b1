//! In-memory backend.
//!
//! Files and directories live in one shared map keyed by '/'-joined absolute paths, so
//! several mounted roots see each other's writes just like on disk. `..` in a mount path
//! is resolved lexically. Cloning the adapter shares the same store.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{MountedRoot, StorageAdapter, TreeEntry, clean_relative};

#[derive(Debug, Default)]
struct Store {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
}

impl Store {
    fn ensure_dirs(&mut self, key: &str) -> io::Result<()> {
        let mut current = String::new();
        for segment in key.split('/').filter(|s| !s.is_empty()) {
            current = join(&current, segment);
            if self.files.contains_key(&current) {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("'{current}' is a file"),
                ));
            }
            self.dirs.insert(current.clone());
        }
        Ok(())
    }
}

/// Shared in-memory store producing [`MemoryRoot`] handles.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    store: Arc<Mutex<Store>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Store>> {
        lock(&self.store)
    }

    /// Seed a file at an absolute path, creating its directories.
    pub fn insert_file(&self, path: &str, contents: impl Into<Vec<u8>>) -> io::Result<()> {
        let key = absolute_key(path);
        let mut store = self.lock()?;
        if let Some((parent, _)) = key.rsplit_once('/') {
            store.ensure_dirs(parent)?;
        }
        store.files.insert(key, contents.into());
        Ok(())
    }

    /// Seed an empty directory (and its ancestors).
    pub fn insert_dir(&self, path: &str) -> io::Result<()> {
        self.lock()?.ensure_dirs(&absolute_key(path))
    }

    /// Contents of the file at `path`, if any.
    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        let key = absolute_key(path);
        self.lock().ok()?.files.get(&key).cloned()
    }

    pub fn is_dir(&self, path: &str) -> bool {
        let key = absolute_key(path);
        key.is_empty() || self.lock().is_ok_and(|s| s.dirs.contains(&key))
    }

    pub fn exists(&self, path: &str) -> bool {
        let key = absolute_key(path);
        self.is_dir(path) || self.lock().is_ok_and(|s| s.files.contains_key(&key))
    }

}

impl StorageAdapter for MemoryAdapter {
    type Root = MemoryRoot;

    fn mount(&self, root: &str) -> io::Result<MemoryRoot> {
        let key = absolute_key(root);
        {
            let mut store = self.lock()?;
            if store.files.contains_key(&key) {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("root '{root}' exists and is not a directory"),
                ));
            }
            store.ensure_dirs(&key)?;
        }
        Ok(MemoryRoot {
            store: Arc::clone(&self.store),
            root: key,
        })
    }

    fn mount_existing(&self, root: &str) -> io::Result<MemoryRoot> {
        let key = absolute_key(root);
        {
            let store = self.lock()?;
            if store.files.contains_key(&key) {
                return Err(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    format!("root '{root}' exists and is not a directory"),
                ));
            }
            if !key.is_empty() && !store.dirs.contains(&key) {
                return Err(not_found(root));
            }
        }
        Ok(MemoryRoot {
            store: Arc::clone(&self.store),
            root: key,
        })
    }
}

/// Handle on one directory of a [`MemoryAdapter`].
#[derive(Debug, Clone)]
pub struct MemoryRoot {
    store: Arc<Mutex<Store>>,
    root: String,
}

impl MemoryRoot {
    fn key(&self, path: &str) -> io::Result<String> {
        Ok(join(&self.root, &clean_relative(path)?))
    }

    fn relative<'a>(&self, key: &'a str) -> &'a str {
        child_of(key, &self.root).unwrap_or(key)
    }
}

impl MountedRoot for MemoryRoot {
    fn list(&self, prefix: &str, recursive: bool) -> io::Result<Vec<TreeEntry>> {
        let base = self.key(prefix)?;
        let store = lock(&self.store)?;
        if store.files.contains_key(&base) {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("'{prefix}' is not a directory"),
            ));
        }
        if !base.is_empty() && !store.dirs.contains(&base) {
            return Err(not_found(prefix));
        }

        let wanted = |key: &str| {
            child_of(key, &base).is_some_and(|rest| recursive || !rest.contains('/'))
        };
        let mut entries: Vec<TreeEntry> = store
            .dirs
            .iter()
            .filter(|k| wanted(k.as_str()))
            .map(|k| TreeEntry::directory(self.relative(k)))
            .chain(
                store
                    .files
                    .keys()
                    .filter(|k| wanted(k.as_str()))
                    .map(|k| TreeEntry::file(self.relative(k))),
            )
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        let key = self.key(path)?;
        let store = lock(&self.store)?;
        match store.files.get(&key) {
            Some(bytes) => Ok(bytes.clone()),
            None if store.dirs.contains(&key) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("'{path}' is a directory"),
            )),
            None => Err(not_found(path)),
        }
    }

    fn write(&self, path: &str, contents: &[u8]) -> io::Result<()> {
        let key = self.key(path)?;
        let mut store = lock(&self.store)?;
        if key.is_empty() || store.dirs.contains(&key) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("'{path}' is a directory"),
            ));
        }
        if let Some((parent, _)) = key.rsplit_once('/') {
            store.ensure_dirs(parent)?;
        }
        store.files.insert(key, contents.to_vec());
        Ok(())
    }

    fn delete(&self, path: &str) -> io::Result<()> {
        let key = self.key(path)?;
        let mut store = lock(&self.store)?;
        if store.dirs.contains(&key) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("'{path}' is a directory"),
            ));
        }
        store.files.remove(&key).map(|_| ()).ok_or_else(|| not_found(path))
    }

    fn delete_subtree(&self, path: &str) -> io::Result<()> {
        if clean_relative(path)?.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "refusing to delete the mounted root itself",
            ));
        }
        let key = self.key(path)?;
        let mut store = lock(&self.store)?;
        if !store.dirs.contains(&key) {
            return Err(not_found(path));
        }
        store
            .dirs
            .retain(|k| k != &key && child_of(k, &key).is_none());
        store.files.retain(|k, _| child_of(k, &key).is_none());
        Ok(())
    }
}

fn lock(store: &Mutex<Store>) -> io::Result<MutexGuard<'_, Store>> {
    store
        .lock()
        .map_err(|_| io::Error::other("memory store lock poisoned"))
}

fn not_found(path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("'{path}' not found"))
}

fn join(base: &str, rel: &str) -> String {
    match (base.is_empty(), rel.is_empty()) {
        (true, _) => rel.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{rel}"),
    }
}

/// `key` minus `base/`, when `key` lies strictly below `base`.
fn child_of<'a>(key: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return (!key.is_empty()).then_some(key);
    }
    key.strip_prefix(base)?.strip_prefix('/')
}

/// Absolute store key for a mount or seed path; `..` is applied lexically.
fn absolute_key(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}
