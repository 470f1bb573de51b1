//! Filesystem operations over a storage adapter: mount glue, directory trees, files.
//!
//! Every function takes the adapter explicitly and mounts fresh roots per call.

mod dir_ops;
mod file_ops;
mod helpers;
mod mount;

pub use dir_ops::{copy_directory, move_directory, remove_directory};
pub use file_ops::{copy_file, move_file, read_file_lines, remove_file};
pub use mount::{mount, mount_existing};
