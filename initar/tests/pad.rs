use std::fs;

use initar::{pad_to, Error};

#[test]
fn grow_appends_zeros() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.bin");
    fs::write(&path, b"0123456789").unwrap();

    pad_to(&path, 20).unwrap();

    let contents = fs::read(&path).unwrap();
    assert_eq!(contents.len(), 20);
    assert_eq!(&contents[..10], b"0123456789");
    assert!(contents[10..].iter().all(|b| *b == 0));
}

#[test]
fn shrink_keeps_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.bin");
    fs::write(&path, b"0123456789abcdefghij").unwrap();

    pad_to(&path, 5).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"01234");
}

#[test]
fn exact_size_is_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.bin");
    fs::write(&path, b"0123456789").unwrap();

    pad_to(&path, 10).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"0123456789");
}

#[test]
fn zero_target_empties_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("image.bin");
    fs::write(&path, b"0123456789").unwrap();

    pad_to(&path, 0).unwrap();

    assert_eq!(fs::read(&path).unwrap().len(), 0);
}

#[test]
fn missing_file_errors() {
    let dir = tempfile::tempdir().unwrap();

    let err = pad_to(dir.path().join("missing.bin"), 10).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(format!("{}", err).contains("missing.bin"));
}
