//! File-vs-directory classification.
//!
//! Existence comes from the real filesystem; the kind is decided from the name. An
//! all-digit "extension" (`v1.0.10`) is not a real extension, so such names count as
//! directories and never as files. `is_directory` and `is_file` are therefore not exact
//! complements.

use std::path::Path;
use tracing::debug;

use crate::errors::{ReliabilityError, Result};
use crate::paths::{decompose, sanitize};

/// True if the sanitized path exists (file, directory or anything else).
pub fn exists(path: &str) -> bool {
    let clean = sanitize(path);
    !clean.is_empty() && Path::new(&clean).exists()
}

/// Exists and has no extension, or only a numeric one.
pub fn is_directory(path: &str) -> bool {
    let parts = decompose(&sanitize(path));
    let real_extension = parts.extension.is_some() && !parts.has_numeric_extension();
    exists(path) && !real_extension
}

/// Exists and has an extension, numeric or not.
pub fn is_file(path: &str) -> bool {
    let parts = decompose(&sanitize(path));
    exists(path) && parts.extension.is_some()
}

/// `Ok(true)` when `path` is a directory, `InvalidPath` otherwise.
pub fn is_directory_or_fail(path: &str) -> Result<bool> {
    if path.is_empty() {
        return Err(ReliabilityError::invalid_path(path, "path is empty"));
    }
    if !is_directory(path) {
        debug!(path, "not classified as a directory");
        return Err(ReliabilityError::invalid_path(
            path,
            "does not exist or is not a directory",
        ));
    }
    Ok(true)
}
