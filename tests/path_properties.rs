use std::fs;
use std::num::NonZeroUsize;

use reliability::{Reliability, absolute_path, basename, decompose, dirname, filename, sanitize};
use tempfile::tempdir;

fn levels(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn decomposition_round_trips() {
    for p in [
        "/var/tmp/base/teste.txt",
        "/var/tmp/base/teste...txt",
        "relative/dir/file.tar.gz",
        "file.txt",
        "/top",
        "../up/one",
    ] {
        assert_eq!(decompose(p).to_path_string(), sanitize(p), "{p}");
    }
}

#[test]
fn dotted_names() {
    assert_eq!(basename("/var/tmp/base/teste...txt"), "teste...txt");
    assert_eq!(filename("/var/tmp/base/teste...txt"), "teste..");
    assert_eq!(dirname("/var/tmp/base/teste.txt"), "/var/tmp/base");
}

#[test]
fn dirname_walks_up_levels() {
    let fs_ = Reliability::new();
    assert_eq!(
        fs_.dirname_levels("/home/ricardo/teste/dir/levels", levels(3)),
        "/home/ricardo"
    );
    assert_eq!(
        fs_.dirname_levels("/home/ricardo/teste/dir/levels", levels(5)),
        "/"
    );
}

#[test]
fn invisible_characters_do_not_change_components() {
    let noisy = "/var/tmp/\u{200B}base/te\u{0007}ste.txt";
    assert_eq!(basename(noisy), "teste.txt");
    assert_eq!(dirname(noisy), "/var/tmp/base");
}

#[test]
fn classification_implies_existence() {
    let td = tempdir().unwrap();
    let dir = td.path().join("plain");
    let versioned = td.path().join("v1.0.10");
    let file = td.path().join("notes.txt");
    fs::create_dir_all(&dir).unwrap();
    fs::create_dir_all(&versioned).unwrap();
    fs::write(&file, "x").unwrap();

    let fs_ = Reliability::new();
    for p in [&dir, &versioned, &file, &td.path().join("absent.txt")] {
        let p = p.to_string_lossy();
        if fs_.is_file(&p) || fs_.is_directory(&p) {
            assert!(fs_.exists(&p), "{p}");
        }
    }

    let dir = dir.to_string_lossy();
    assert_eq!(fs_.is_directory(&dir), fs_.exists(&dir));
    assert!(!fs_.is_file(&dir));
    assert!(fs_.is_directory(&versioned.to_string_lossy()));
    assert!(fs_.is_file(&file.to_string_lossy()));
    assert!(!fs_.is_directory(&file.to_string_lossy()));
    assert!(fs_.is_directory_or_fail(&file.to_string_lossy()).is_err());
    assert!(fs_.is_directory_or_fail(&dir).unwrap());
}

#[test]
fn absolute_path_of_missing_leaf_uses_canonical_parent() {
    let td = tempdir().unwrap();
    let parent = dunce::canonicalize(td.path()).unwrap();
    let wanted = td.path().join("not-yet").join("file.txt");

    let abs = absolute_path(&wanted.to_string_lossy()).unwrap();

    let expected = parent.join("not-yet").join("file.txt");
    assert_eq!(abs, expected.to_string_lossy());
}
