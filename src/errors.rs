//! Typed error definitions for reliability.
//! Every operation fails with one of these kinds; nothing is retried or swallowed.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReliabilityError {
    #[error("The path '{path}' is not valid: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("The file called '{path}' cannot be read: {source}")]
    UnreadableSource {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot mount '{root}': {source}")]
    Mount {
        root: String,
        #[source]
        source: io::Error,
    },

    #[error("{op} '{path}' failed: {source}")]
    Adapter {
        op: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ReliabilityError {
    pub(crate) fn invalid_path(path: &str, reason: impl Into<String>) -> Self {
        ReliabilityError::InvalidPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable numeric code for structured logs and exit reporting.
    pub fn code(&self) -> u16 {
        match self {
            ReliabilityError::InvalidPath { .. } => 10,
            ReliabilityError::UnreadableSource { .. } => 20,
            ReliabilityError::Mount { .. } => 30,
            ReliabilityError::Adapter { .. } => 40,
        }
    }

    /// Short machine-friendly name of the kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ReliabilityError::InvalidPath { .. } => "invalid_path",
            ReliabilityError::UnreadableSource { .. } => "unreadable_source",
            ReliabilityError::Mount { .. } => "mount_error",
            ReliabilityError::Adapter { .. } => "adapter_failure",
        }
    }
}

pub type Result<T> = std::result::Result<T, ReliabilityError>;
