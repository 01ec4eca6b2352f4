// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), "").unwrap();
}

fn names(fixtures: &[Fixture]) -> Vec<&str> {
    fixtures.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn discover_sorts_by_name() {
    let dir = TempDir::new().unwrap();
    for name in ["zeta.sql", "alpha.sql", "mid.sql", "alpha.exp"] {
        touch(dir.path(), name);
    }

    let fixtures = FixtureLayout::default().discover(dir.path()).unwrap();
    assert_eq!(names(&fixtures), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn discover_pairs_input_with_expected_path() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "add.sql");

    let fixtures = FixtureLayout::default().discover(dir.path()).unwrap();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].input, dir.path().join("add.sql"));
    assert_eq!(fixtures[0].expected, dir.path().join("add.exp"));
}

#[test]
fn discover_keeps_fixture_without_expected_file() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "orphan.sql");

    let fixtures = FixtureLayout::default().discover(dir.path()).unwrap();
    assert_eq!(names(&fixtures), vec!["orphan"]);
    assert!(!fixtures[0].expected.exists());
}

#[test]
fn discover_ignores_directories_and_other_extensions() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("nested.sql")).unwrap();
    touch(dir.path(), "notes.txt");
    touch(dir.path(), "query.sql.bak");
    touch(dir.path(), ".sql");
    touch(dir.path(), "real.sql");

    let fixtures = FixtureLayout::default().discover(dir.path()).unwrap();
    assert_eq!(names(&fixtures), vec!["real"]);
}

#[test]
fn discover_is_idempotent() {
    let dir = TempDir::new().unwrap();
    for name in ["b.sql", "a.sql", "c.sql"] {
        touch(dir.path(), name);
    }

    let layout = FixtureLayout::default();
    let first = layout.discover(dir.path()).unwrap();
    let second = layout.discover(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn discover_with_custom_layout() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "one.in");
    touch(dir.path(), "two.sql");

    let layout = FixtureLayout::new(".in", "out");
    let fixtures = layout.discover(dir.path()).unwrap();
    assert_eq!(names(&fixtures), vec!["one"]);
    assert_eq!(fixtures[0].expected, dir.path().join("one.out"));
}

#[test]
fn discover_missing_directory_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let err = FixtureLayout::default().discover(&missing).unwrap_err();
    assert!(matches!(err, DiscoveryError::ReadDir { .. }));
    assert!(err.to_string().contains("nope"));
}

#[rstest]
#[case(&[], &["add", "bad", "select_all"])]
#[case(&["add"], &["add"])]
#[case(&["a"], &["add", "bad", "select_all"])]
#[case(&["sel", "bad"], &["bad", "select_all"])]
#[case(&["missing"], &[])]
fn select_filters_by_substring(#[case] filters: &[&str], #[case] expected: &[&str]) {
    let dir = Path::new("/fixtures");
    let fixtures = ["add", "bad", "select_all"]
        .iter()
        .map(|n| Fixture::new(dir, n, "sql", "exp"))
        .collect();
    let filters: Vec<String> = filters.iter().map(|s| s.to_string()).collect();

    let selected = select(fixtures, &filters);
    assert_eq!(names(&selected), expected);
}
