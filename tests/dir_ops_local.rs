use std::fs;
use std::io::Write;
use std::path::Path;

use reliability::{Reliability, ReliabilityError};
use tempfile::tempdir;

/// Create a file with the given content, creating parents.
fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    let mut f = fs::File::create(path).expect("create file");
    write!(f, "{contents}").expect("write content");
    f.sync_all().expect("sync file");
}

/// origin/{one.txt, two.txt, subdir/one.txt, subdir/deeper/three.txt}
fn seed(base: &Path) -> String {
    let origin = base.join("origin");
    write_file(&origin.join("one.txt"), "one");
    write_file(&origin.join("two.txt"), "two");
    write_file(&origin.join("subdir").join("one.txt"), "sub one");
    write_file(&origin.join("subdir").join("deeper").join("three.txt"), "three");
    origin.to_string_lossy().into_owned()
}

fn s(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

#[test]
fn copy_directory_reproduces_every_file() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let origin = seed(td.path());
    let destination = td.path().join("destination");

    let fs_ = Reliability::new();
    let copied = fs_.copy_directory(&origin, &s(&destination))?;
    assert_eq!(copied, 4);

    for rel in ["one.txt", "two.txt", "subdir/one.txt", "subdir/deeper/three.txt"] {
        let a = fs::read(Path::new(&origin).join(rel))?;
        let b = fs::read(destination.join(rel))?;
        assert_eq!(a, b, "{rel} differs");
    }
    assert!(Path::new(&origin).join("one.txt").exists(), "origin must be untouched");
    Ok(())
}

#[test]
fn move_directory_removes_origin() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let origin = seed(td.path());
    let destination = td.path().join("moved");

    Reliability::new().move_directory(&origin, &s(&destination))?;

    assert!(!Path::new(&origin).exists());
    assert_eq!(fs::read_to_string(destination.join("subdir/deeper/three.txt"))?, "three");
    Ok(())
}

#[test]
fn remove_directory_whole_and_contents_only() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let origin = seed(td.path());
    fs::create_dir_all(Path::new(&origin).join("empty"))?;

    let fs_ = Reliability::new();
    fs_.remove_directory(&origin, true)?;
    assert!(Path::new(&origin).is_dir());
    assert_eq!(fs::read_dir(&origin)?.count(), 0);

    fs_.remove_directory(&origin, false)?;
    assert!(!Path::new(&origin).exists());
    assert!(td.path().exists(), "parent must survive");
    Ok(())
}

#[test]
fn removing_a_missing_directory_is_an_adapter_failure() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nothing-here");
    let err = Reliability::new()
        .remove_directory(&s(&missing), false)
        .unwrap_err();
    assert!(matches!(err, ReliabilityError::Adapter { .. }), "{err:?}");
    assert_eq!(err.code(), 40);
}

#[test]
fn mounting_a_file_is_a_mount_error() {
    let td = tempdir().unwrap();
    let file = td.path().join("plain.txt");
    write_file(&file, "x");
    let err = Reliability::new()
        .copy_directory(&s(&file), &s(&td.path().join("out")))
        .unwrap_err();
    assert!(matches!(err, ReliabilityError::Mount { .. }), "{err:?}");
}

#[test]
fn empty_paths_are_invalid() {
    let fs_ = Reliability::new();
    assert!(matches!(
        fs_.copy_directory("", "/tmp").unwrap_err(),
        ReliabilityError::InvalidPath { .. }
    ));
    assert!(matches!(
        fs_.remove_directory("", false).unwrap_err(),
        ReliabilityError::InvalidPath { .. }
    ));
}

#[test]
fn moving_a_directory_into_itself_keeps_the_data() {
    let td = tempdir().unwrap();
    let origin = seed(td.path());
    let inside = Path::new(&origin).join("sub");

    let fs_ = Reliability::new();
    for dest in [origin.clone(), s(&inside)] {
        let err = fs_.move_directory(&origin, &dest).unwrap_err();
        assert!(matches!(err, ReliabilityError::InvalidPath { .. }), "{err:?}");
    }
    assert_eq!(
        fs::read_to_string(Path::new(&origin).join("subdir/deeper/three.txt")).unwrap(),
        "three"
    );
    assert!(!inside.exists());
}

#[test]
fn missing_origin_directory_fails_and_is_not_created() {
    let td = tempdir().unwrap();
    let ghost = td.path().join("ghost");
    let out = td.path().join("out");

    let fs_ = Reliability::new();
    let err = fs_.copy_directory(&s(&ghost), &s(&out)).unwrap_err();
    assert!(matches!(err, ReliabilityError::Mount { .. }), "{err:?}");
    let err = fs_.move_directory(&s(&ghost), &s(&out)).unwrap_err();
    assert!(matches!(err, ReliabilityError::Mount { .. }), "{err:?}");
    assert!(!ghost.exists());
}
