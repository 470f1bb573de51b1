//! Directory tree operations.
//!
//! Removal mounts the parent and deletes through it; copy mounts both sides and replays
//! every file at the same relative path. Nothing is rolled back: a failure part way
//! leaves whatever the completed steps produced.

use tracing::{debug, info, warn};

use crate::errors::{ReliabilityError, Result};
use crate::paths::sanitize;
use crate::storage::{MountedRoot, StorageAdapter};

use super::helpers::{adapter_failure, unreadable};
use super::mount::{ensure_outside_origin, mount, mount_existing, split_leaf};

/// Delete the directory at `path`, or only what it contains when `only_contents`.
pub fn remove_directory<A: StorageAdapter>(
    adapter: &A,
    path: &str,
    only_contents: bool,
) -> Result<()> {
    let (parent, leaf) = split_leaf(path)?;
    let root = mount_existing(adapter, &parent)?;

    let entries = root
        .list(&leaf, false)
        .map_err(adapter_failure("list directory", path))?;
    for entry in &entries {
        if entry.is_dir() {
            root.delete_subtree(&entry.path)
                .map_err(adapter_failure("delete directory", &entry.path))?;
        } else {
            root.delete(&entry.path)
                .map_err(adapter_failure("delete file", &entry.path))?;
        }
        debug!(entry = %entry.path, kind = ?entry.kind, "removed");
    }

    if !only_contents {
        root.delete_subtree(&leaf)
            .map_err(adapter_failure("delete directory", path))?;
    }

    info!(path, only_contents, entries = entries.len(), "Removed directory");
    Ok(())
}

/// Copy every file below `origin` to the same relative path below `destination`.
/// Directories are not copied on their own; writes create them. Returns the number of
/// files copied.
pub fn copy_directory<A: StorageAdapter>(
    adapter: &A,
    origin: &str,
    destination: &str,
) -> Result<usize> {
    let origin = non_empty(origin)?;
    let destination = non_empty(destination)?;
    let source = mount_existing(adapter, &origin)?;
    let target = mount(adapter, &destination)?;

    let listing = source
        .list("", true)
        .map_err(adapter_failure("list directory", &origin))?;

    let mut copied = 0usize;
    for entry in listing.iter().filter(|e| !e.is_dir()) {
        let contents = source.read(&entry.path).map_err(unreadable(&entry.path))?;
        target
            .write(&entry.path, &contents)
            .map_err(adapter_failure("write file", &entry.path))?;
        debug!(file = %entry.path, bytes = contents.len(), "copied");
        copied += 1;
    }

    info!(src = %origin, dest = %destination, files = copied, "Copied directory");
    Ok(copied)
}

/// Copy, then remove the origin. Not atomic: an interruption after the copy leaves both
/// trees complete; one during the copy leaves the origin untouched. A destination equal
/// to or inside the origin is refused.
pub fn move_directory<A: StorageAdapter>(
    adapter: &A,
    origin: &str,
    destination: &str,
) -> Result<usize> {
    ensure_outside_origin(&non_empty(origin)?, &non_empty(destination)?)?;
    let copied = copy_directory(adapter, origin, destination)?;
    remove_directory(adapter, origin, false)?;
    info!(src = %origin, dest = %destination, files = copied, "Moved directory");
    Ok(copied)
}

fn non_empty(path: &str) -> Result<String> {
    let clean = sanitize(path);
    if clean.is_empty() {
        warn!(path, "refusing empty tree root");
        return Err(ReliabilityError::invalid_path(path, "path is empty"));
    }
    Ok(clean)
}
