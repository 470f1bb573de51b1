//! Path decomposition: `{dirname, basename, filename, extension}`.
//!
//! Purely string based; nothing here touches the filesystem.
//!
//! Rules:
//! - Trailing separators are ignored (`"/a/b/"` has basename `"b"`).
//! - No separator at all gives a dirname of `"."`; a leaf directly under the root gives
//!   the root separator.
//! - The extension is whatever follows the last `.` of the basename, unless that dot is
//!   the first or the last character (`".bashrc"`, `"name."` have no extension).

use std::num::NonZeroUsize;
use std::path::is_separator;

use super::sanitize::sanitize;

/// Pieces of a path. Immutable value; build it with [`decompose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathComponents {
    pub dirname: String,
    pub basename: String,
    pub filename: String,
    pub extension: Option<String>,
}

impl PathComponents {
    /// Rejoin dirname and basename.
    ///
    /// `"."` contributes nothing and a root dirname is not doubled, so for inputs without
    /// trailing or repeated separators this gives back the decomposed text.
    pub fn to_path_string(&self) -> String {
        if self.dirname == "." {
            return self.basename.clone();
        }
        if self.dirname.chars().all(is_separator) {
            return format!("{}{}", self.dirname, self.basename);
        }
        format!("{}/{}", self.dirname, self.basename)
    }

    /// True when an extension exists and is made of ASCII digits only (`"v1.0.10"`).
    pub fn has_numeric_extension(&self) -> bool {
        self.extension
            .as_deref()
            .is_some_and(|ext| !ext.is_empty() && ext.bytes().all(|b| b.is_ascii_digit()))
    }
}

/// Split `path` into its components. The input is taken as-is; see [`basename`] and
/// friends for the sanitizing entry points.
pub fn decompose(path: &str) -> PathComponents {
    let trimmed = path.trim_end_matches(is_separator);

    let (dirname, basename) = if trimmed.is_empty() {
        // "" or a run of separators (the root).
        let dirname = if path.is_empty() { "." } else { &path[..1] };
        (dirname.to_string(), String::new())
    } else {
        match trimmed.rfind(is_separator) {
            None => (".".to_string(), trimmed.to_string()),
            Some(idx) => {
                let head = trimmed[..idx].trim_end_matches(is_separator);
                let dirname = if head.is_empty() {
                    &trimmed[..1]
                } else {
                    head
                };
                (dirname.to_string(), trimmed[idx + 1..].to_string())
            }
        }
    };

    let (filename, extension) = split_extension(&basename);
    PathComponents {
        dirname,
        basename,
        filename,
        extension,
    }
}

fn split_extension(basename: &str) -> (String, Option<String>) {
    match basename.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < basename.len() => (
            basename[..idx].to_string(),
            Some(basename[idx + 1..].to_string()),
        ),
        _ => (basename.to_string(), None),
    }
}

/// Name plus extension: `/dir/notes.md` -> `notes.md`.
pub fn basename(path: &str) -> String {
    decompose(&sanitize(path)).basename
}

/// Name without extension: `/dir/notes.md` -> `notes`.
pub fn filename(path: &str) -> String {
    decompose(&sanitize(path)).filename
}

/// Parent directory: `/dir/notes.md` -> `/dir`.
pub fn dirname(path: &str) -> String {
    dirname_levels(path, NonZeroUsize::MIN)
}

/// Walk up `levels` parents. Each step re-sanitizes the previous result; nothing needs to
/// exist on disk.
pub fn dirname_levels(path: &str, levels: NonZeroUsize) -> String {
    let mut dir = path.to_string();
    for _ in 0..levels.get() {
        dir = decompose(&sanitize(&dir)).dirname;
    }
    dir
}
