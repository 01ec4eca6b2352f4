// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn capture_created_inside_directory() {
    let dir = TempDir::new().unwrap();
    let capture = CaptureFile::create_in(dir.path()).unwrap();

    assert!(capture.path().exists());
    assert_eq!(capture.path().parent().unwrap(), dir.path());
    let name = capture.path().file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with(CAPTURE_PREFIX));
    assert!(name.ends_with(CAPTURE_SUFFIX));
}

#[test]
fn capture_files_are_unique() {
    let dir = TempDir::new().unwrap();
    let a = CaptureFile::create_in(dir.path()).unwrap();
    let b = CaptureFile::create_in(dir.path()).unwrap();

    assert_ne!(a.path(), b.path());
}

#[test]
fn capture_reads_back_writer_output() {
    let dir = TempDir::new().unwrap();
    let capture = CaptureFile::create_in(dir.path()).unwrap();

    let mut writer = capture.writer().unwrap();
    writer.write_all(b"2\n").unwrap();
    writer.flush().unwrap();
    drop(writer);

    assert_eq!(capture.contents().unwrap(), b"2\n");
}

#[test]
fn capture_starts_empty() {
    let dir = TempDir::new().unwrap();
    let capture = CaptureFile::create_in(dir.path()).unwrap();

    assert!(capture.contents().unwrap().is_empty());
}

#[test]
fn capture_removed_explicitly() {
    let dir = TempDir::new().unwrap();
    let capture = CaptureFile::create_in(dir.path()).unwrap();
    let path = capture.path().to_path_buf();

    capture.remove();
    assert!(!path.exists());
}

#[test]
fn capture_removed_on_drop() {
    let dir = TempDir::new().unwrap();
    let path = {
        let capture = CaptureFile::create_in(dir.path()).unwrap();
        capture.path().to_path_buf()
    };

    assert!(!path.exists());
}

#[test]
fn capture_remove_tolerates_missing_file() {
    let dir = TempDir::new().unwrap();
    let capture = CaptureFile::create_in(dir.path()).unwrap();
    std::fs::remove_file(capture.path()).unwrap();

    // Must not panic
    capture.remove();
}
