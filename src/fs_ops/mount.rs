use std::path::PathBuf;
use tracing::{debug, warn};

use crate::errors::{ReliabilityError, Result};
use crate::paths::{absolute_path, sanitize};
use crate::storage::StorageAdapter;

use super::helpers::mount_failure;

/// Bind `directory` to a fresh handle from `adapter`. Handles are never cached.
pub fn mount<A: StorageAdapter>(adapter: &A, directory: &str) -> Result<A::Root> {
    let root = adapter.mount(directory).map_err(mount_failure(directory))?;
    debug!(root = directory, "mounted");
    Ok(root)
}

/// Bind an already existing `directory`. Nothing is created; a missing directory is a
/// `Mount` error. Used for every side that is only read or deleted from.
pub fn mount_existing<A: StorageAdapter>(adapter: &A, directory: &str) -> Result<A::Root> {
    let root = adapter
        .mount_existing(directory)
        .map_err(mount_failure(directory))?;
    debug!(root = directory, "mounted existing");
    Ok(root)
}

/// Refuse a move whose destination is the origin itself or lies below it: the copy would
/// land inside what the removal deletes.
pub(crate) fn ensure_outside_origin(origin: &str, destination: &str) -> Result<()> {
    let resolve = |p: &str| PathBuf::from(absolute_path(p).unwrap_or_else(|| sanitize(p)));
    let from = resolve(origin);
    let to = resolve(destination);
    if to.starts_with(&from) {
        warn!(src = origin, dest = destination, "refusing overlapping move");
        return Err(ReliabilityError::invalid_path(
            destination,
            format!("it is '{origin}' or lies inside it"),
        ));
    }
    Ok(())
}

/// Split `path` into `(parent, leaf)` and refuse leaves that would address the parent
/// itself or escape it.
pub(crate) fn split_leaf(path: &str) -> Result<(String, String)> {
    if path.is_empty() {
        warn!("refusing empty path");
        return Err(ReliabilityError::invalid_path(path, "path is empty"));
    }
    let parent = crate::paths::dirname(path);
    let leaf = crate::paths::basename(path);
    if matches!(leaf.as_str(), "" | "." | "..") {
        warn!(path, leaf = %leaf, "refusing path without an entry name");
        return Err(ReliabilityError::invalid_path(
            path,
            "does not name an entry inside its parent directory",
        ));
    }
    Ok((parent, leaf))
}
