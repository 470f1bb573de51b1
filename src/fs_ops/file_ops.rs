//! Single-file operations, each through a root mounted on the file's parent.

use tracing::{debug, info};

use crate::errors::Result;
use crate::storage::{MountedRoot, StorageAdapter};

use super::helpers::{adapter_failure, unreadable};
use super::mount::{ensure_outside_origin, mount, mount_existing, split_leaf};

pub fn remove_file<A: StorageAdapter>(adapter: &A, path: &str) -> Result<()> {
    let (parent, leaf) = split_leaf(path)?;
    let root = mount_existing(adapter, &parent)?;
    root.delete(&leaf).map_err(adapter_failure("delete file", path))?;
    info!(path, "Removed file");
    Ok(())
}

/// Copy `origin` to `destination`, creating the destination's directories. Returns the
/// number of bytes written. The whole file is held in memory.
pub fn copy_file<A: StorageAdapter>(adapter: &A, origin: &str, destination: &str) -> Result<usize> {
    let (origin_dir, origin_name) = split_leaf(origin)?;
    let (dest_dir, dest_name) = split_leaf(destination)?;

    let source = mount_existing(adapter, &origin_dir)?;
    let target = mount(adapter, &dest_dir)?;

    let contents = source.read(&origin_name).map_err(unreadable(&origin_name))?;
    target
        .write(&dest_name, &contents)
        .map_err(adapter_failure("write file", destination))?;

    info!(src = origin, dest = destination, bytes = contents.len(), "Copied file");
    Ok(contents.len())
}

/// Copy, then remove the origin. Not atomic. Moving a file onto itself is refused.
pub fn move_file<A: StorageAdapter>(adapter: &A, origin: &str, destination: &str) -> Result<usize> {
    split_leaf(origin)?;
    split_leaf(destination)?;
    ensure_outside_origin(origin, destination)?;
    let bytes = copy_file(adapter, origin, destination)?;
    remove_file(adapter, origin)?;
    info!(src = origin, dest = destination, "Moved file");
    Ok(bytes)
}

/// All lines of a text file split on `'\n'`. A file whose lines are all empty (including
/// an empty file) yields no lines. Invalid UTF-8 is replaced, not rejected.
pub fn read_file_lines<A: StorageAdapter>(adapter: &A, path: &str) -> Result<Vec<String>> {
    let (parent, leaf) = split_leaf(path)?;
    let root = mount_existing(adapter, &parent)?;
    let contents = root.read(&leaf).map_err(unreadable(&leaf))?;

    let text = String::from_utf8_lossy(&contents);
    let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    if lines.iter().all(|l| l.is_empty()) {
        debug!(path, "no content lines");
        return Ok(Vec::new());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReliabilityError;
    use crate::storage::MemoryAdapter;

    #[test]
    fn copy_then_move() {
        let adapter = MemoryAdapter::new();
        adapter.insert_file("/origin/one.txt", "teste").unwrap();

        let n = copy_file(&adapter, "/origin/one.txt", "/destination/copy.txt").unwrap();
        assert_eq!(n, 5);
        assert!(adapter.exists("/origin/one.txt"));
        assert_eq!(adapter.file("/destination/copy.txt").unwrap(), b"teste");

        move_file(&adapter, "/origin/one.txt", "/destination/deep/moved.txt").unwrap();
        assert!(!adapter.exists("/origin/one.txt"));
        assert_eq!(adapter.file("/destination/deep/moved.txt").unwrap(), b"teste");
    }

    #[test]
    fn copy_missing_origin_is_unreadable() {
        let adapter = MemoryAdapter::new();
        adapter.insert_dir("/origin").unwrap();
        let err = copy_file(&adapter, "/origin/none.txt", "/d/x.txt").unwrap_err();
        assert!(matches!(err, ReliabilityError::UnreadableSource { .. }));
        assert!(!adapter.exists("/d/x.txt"));
    }

    #[test]
    fn missing_origin_directory_is_not_created() {
        let adapter = MemoryAdapter::new();
        let err = copy_file(&adapter, "/nodir/none.txt", "/d/x.txt").unwrap_err();
        assert!(matches!(err, ReliabilityError::Mount { .. }), "{err:?}");
        assert!(!adapter.exists("/nodir"));
        assert!(read_file_lines(&adapter, "/nodir/none.txt").is_err());
        assert!(!adapter.exists("/nodir"));
    }

    #[test]
    fn move_onto_itself_is_refused() {
        let adapter = MemoryAdapter::new();
        adapter.insert_file("/o/keep.txt", "precious").unwrap();
        let err = move_file(&adapter, "/o/keep.txt", "/o/./keep.txt").unwrap_err();
        assert!(matches!(err, ReliabilityError::InvalidPath { .. }), "{err:?}");
        assert_eq!(adapter.file("/o/keep.txt").unwrap(), b"precious");
    }

    #[test]
    fn move_keeps_origin_when_write_fails() {
        let adapter = MemoryAdapter::new();
        adapter.insert_file("/o/a.txt", "a").unwrap();
        adapter.insert_dir("/d/a.txt").unwrap();
        let err = move_file(&adapter, "/o/a.txt", "/d/a.txt").unwrap_err();
        assert!(matches!(err, ReliabilityError::Adapter { op: "write file", .. }));
        assert!(adapter.exists("/o/a.txt"));
    }

    #[test]
    fn remove_missing_file_fails() {
        let adapter = MemoryAdapter::new();
        adapter.insert_dir("/somewhere").unwrap();
        let err = remove_file(&adapter, "/somewhere/x.txt").unwrap_err();
        assert!(matches!(err, ReliabilityError::Adapter { .. }));
        let err = remove_file(&adapter, "/nowhere/x.txt").unwrap_err();
        assert!(matches!(err, ReliabilityError::Mount { .. }));
        assert!(!adapter.exists("/nowhere"));
    }

    #[test]
    fn lines_of_regular_and_empty_files() {
        let adapter = MemoryAdapter::new();
        adapter.insert_file("/t/code.txt", "first\n\nthird\n").unwrap();
        adapter.insert_file("/t/empty.txt", "").unwrap();
        adapter.insert_file("/t/blank.txt", "\n\n").unwrap();

        assert_eq!(
            read_file_lines(&adapter, "/t/code.txt").unwrap(),
            vec!["first", "", "third", ""]
        );
        assert!(read_file_lines(&adapter, "/t/empty.txt").unwrap().is_empty());
        assert!(read_file_lines(&adapter, "/t/blank.txt").unwrap().is_empty());
    }
}
