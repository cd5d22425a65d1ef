// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use tempfile::tempdir;

#[test]
fn test_dir_storage_reads_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("file"), b"contents").unwrap();

    let storage = DirStorage::new(dir.path());
    assert_eq!(storage.read("file").unwrap(), b"contents");
    assert_eq!(storage.dir(), dir.path());
}

#[test]
fn test_dir_storage_missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let err = DirStorage::new(dir.path()).read("absent").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn test_dir_storage_write_creates_directory() {
    let dir = tempdir().unwrap();
    let storage = DirStorage::new(dir.path().join("nested").join("testdata"));
    let writer = storage.as_writable().unwrap();

    writer.write("file", b"first").unwrap();
    assert_eq!(fs::read(storage.path("file")).unwrap(), b"first");
}

#[test]
fn test_dir_storage_write_replaces_and_leaves_no_temp_files() {
    let dir = tempdir().unwrap();
    let storage = DirStorage::new(dir.path());
    storage.write("file", b"a much longer first version").unwrap();
    storage.write("file", b"second").unwrap();

    assert_eq!(storage.read("file").unwrap(), b"second");
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_dir_storage_write_sets_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let storage = DirStorage::new(dir.path());
    storage.write("file", b"data").unwrap();

    let mode = fs::metadata(storage.path("file")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn test_map_storage_is_read_only() {
    let storage = MapStorage::new().with_file("a", "one");
    storage.insert("b", b"two".to_vec());

    assert_eq!(storage.len(), 2);
    assert!(!storage.is_empty());
    assert_eq!(storage.read("a").unwrap(), b"one");
    assert_eq!(storage.get("b").unwrap(), b"two");
    assert!(storage.as_writable().is_none());
    assert_eq!(
        storage.read("c").unwrap_err().kind(),
        io::ErrorKind::NotFound
    );
    assert_eq!(format!("{storage:?}"), r#"MapStorage { files: ["a", "b"] }"#);
}

#[test]
fn test_shared_storage_forwards() {
    let storage: Arc<dyn Storage> = Arc::new(DirStorage::new("unused"));
    assert!(storage.as_writable().is_some());
    let storage = Arc::new(MapStorage::new().with_file("a", "x"));
    assert_eq!(Storage::read(&storage, "a").unwrap(), b"x");
    assert!(Storage::as_writable(&storage).is_none());
}
