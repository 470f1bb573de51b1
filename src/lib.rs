//! Core library for `reliability`.
//!
//! Path helpers that never touch the disk (`paths`), existence checks (`classify`) and
//! whole-file / whole-tree operations (`fs_ops`) routed through a pluggable storage
//! adapter (`storage`). The [`Reliability`] value bundles them behind one adapter.
//!
//! The binary adds an XML config (`config`), tracing setup and console output on top.

pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod paths;
pub mod service;
pub mod storage;

pub use config::{
    CONFIG_ENV, Config, LogLevel, default_config_path, default_log_path, load_config,
    load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::{ReliabilityError, Result};
pub use paths::{
    PathComponents, absolute_path, basename, decompose, dirname, dirname_levels, filename,
    sanitize,
};
pub use service::Reliability;
pub use storage::{
    EntryKind, LocalAdapter, LocalRoot, MemoryAdapter, MemoryRoot, MountedRoot, StorageAdapter,
    TreeEntry,
};
