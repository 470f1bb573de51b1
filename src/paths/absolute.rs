//! Absolute path resolution for targets that may not exist yet.
//!
//! The longest existing prefix is canonicalized (symlinks and `..` resolved by the OS);
//! the missing tail is appended untouched. Useful for computing where a future write
//! will land.

use std::env;
use std::path::{MAIN_SEPARATOR_STR, PathBuf, is_separator};
use tracing::trace;

/// Resolve `path` to an absolute form.
///
/// Returns `None` only when nothing resolves and the current directory is unavailable.
pub fn absolute_path(path: &str) -> Option<String> {
    let normalized: String = path
        .chars()
        .map(|c| if is_separator(c) { '/' } else { c })
        .collect();
    let rooted = normalized.starts_with('/');

    let mut search: Vec<&str> = normalized.split('/').filter(|s| *s != ".").collect();
    // Collected last-first; reversed when re-appended.
    let mut pending: Vec<&str> = Vec::new();
    let mut resolved: Option<PathBuf> = None;

    while !search.is_empty() {
        let joined = search.join("/");
        let candidate = match (joined.is_empty(), rooted) {
            (true, true) => MAIN_SEPARATOR_STR.to_string(),
            (true, false) => ".".to_string(),
            (false, _) => joined,
        };
        match dunce::canonicalize(&candidate) {
            Ok(real) => {
                resolved = Some(real);
                break;
            }
            Err(e) => {
                trace!(candidate = %candidate, error = %e, "prefix does not resolve");
                if let Some(last) = search.pop() {
                    pending.push(last);
                }
            }
        }
    }

    let mut absolute = match resolved {
        Some(real) => real,
        None => env::current_dir().ok()?,
    };
    for segment in pending.iter().rev().filter(|s| !s.is_empty()) {
        absolute.push(segment);
    }
    Some(absolute.to_string_lossy().into_owned())
}
