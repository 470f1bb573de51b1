//! I/O error adapters.
//!
//! Turn adapter `io::Error`s into typed [`ReliabilityError`]s while enriching the message
//! with a platform-aware hint. Operation and path live on the typed error, not in the
//! message. The `ErrorKind` is preserved on the wrapped source.
//!
//! Usage:
//!   root.delete(leaf).map_err(adapter_failure("delete file", leaf))?;
//!   let bytes = root.read(leaf).map_err(unreadable(origin))?;

use std::io;

use crate::errors::ReliabilityError;

/// The error's own message plus a platform-aware hint.
fn build_message(e: &io::Error) -> String {
    let mut msg = e.to_string();

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str("; permission denied, check ownership and permissions");
                }
                libc::ENOENT => msg.push_str("; path not found, verify it exists"),
                libc::EEXIST => msg.push_str("; already exists"),
                libc::ENOTDIR => msg.push_str("; a path component is not a directory"),
                libc::EISDIR => msg.push_str("; target is a directory"),
                libc::ENOTEMPTY => msg.push_str("; directory not empty"),
                libc::ENOSPC => msg.push_str("; insufficient space on device"),
                libc::EROFS => msg.push_str("; read-only filesystem"),
                libc::ELOOP => msg.push_str("; too many symbolic link levels"),
                libc::ENAMETOOLONG => msg.push_str("; filename or path too long"),
                libc::EMFILE | libc::ENFILE => msg.push_str("; too many open files"),
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str("; access denied, check permissions"), // ERROR_ACCESS_DENIED
                2 | 3 => msg.push_str("; path not found, verify it exists"), // FILE/PATH NOT FOUND
                32 => msg.push_str("; sharing violation, file is in use"), // ERROR_SHARING_VIOLATION
                112 => msg.push_str("; insufficient disk space"),         // ERROR_DISK_FULL
                206 => msg.push_str("; filename or path too long"),       // ERROR_FILENAME_EXCED_RANGE
                _ => {}
            }
        }
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => msg.push_str("; permission denied"),
            io::ErrorKind::NotFound => msg.push_str("; path not found, verify it exists"),
            io::ErrorKind::InvalidInput => msg.push_str("; invalid path for this root"),
            _ => {}
        }
    }

    msg
}

/// Keep the kind, replace the message with the enriched one.
fn enrich(e: io::Error) -> io::Error {
    io::Error::new(e.kind(), build_message(&e))
}

/// `map_err` adapter for list/write/delete failures.
pub(crate) fn adapter_failure<'a>(
    op: &'static str,
    path: &'a str,
) -> impl FnOnce(io::Error) -> ReliabilityError + 'a {
    move |e| ReliabilityError::Adapter {
        op,
        path: path.to_string(),
        source: enrich(e),
    }
}

/// `map_err` adapter for a failed read of a copy/move origin.
pub(crate) fn unreadable(path: &str) -> impl FnOnce(io::Error) -> ReliabilityError + '_ {
    move |e| ReliabilityError::UnreadableSource {
        path: path.to_string(),
        source: enrich(e),
    }
}

/// `map_err` adapter for a root the backend refused to mount.
pub(crate) fn mount_failure(root: &str) -> impl FnOnce(io::Error) -> ReliabilityError + '_ {
    move |e| ReliabilityError::Mount {
        root: root.to_string(),
        source: enrich(e),
    }
}
