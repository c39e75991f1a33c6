use std::path::PathBuf;

use devsetup::batch::{self, BatchError};
use tempfile::TempDir;

fn list_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.txt");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_empty_file_is_noop_success() {
    let (_dir, path) = list_file("");
    let mut calls = 0;
    let result = batch::run(&path, |_| {
        calls += 1;
        true
    })
    .unwrap();

    assert_eq!(calls, 0);
    assert_eq!(result.attempted, 0);
    assert_eq!(result.succeeded, 0);
    assert!(result.failed.is_empty());
}

#[test]
fn test_comments_and_blanks_are_skipped() {
    let (_dir, path) = list_file("# tools\n\n   \n# more\n");
    let mut calls = 0;
    let result = batch::run(&path, |_| {
        calls += 1;
        true
    })
    .unwrap();

    assert_eq!(calls, 0);
    assert_eq!(result.attempted, 0);
}

#[test]
fn test_items_installed_in_file_order() {
    let (_dir, path) = list_file("git\nripgrep\njq\n");
    let mut seen = Vec::new();
    let result = batch::run(&path, |item| {
        seen.push(item.to_string());
        true
    })
    .unwrap();

    assert_eq!(seen, ["git", "ripgrep", "jq"]);
    assert_eq!(result.attempted, 3);
    assert_eq!(result.succeeded, 3);
    assert!(result.is_clean());
}

#[test]
fn test_failure_does_not_short_circuit() {
    let (_dir, path) = list_file("one\ntwo\nthree\n");
    let mut seen = Vec::new();
    let result = batch::run(&path, |item| {
        seen.push(item.to_string());
        item != "two"
    })
    .unwrap();

    assert_eq!(seen, ["one", "two", "three"]);
    assert_eq!(result.attempted, 3);
    assert_eq!(result.succeeded, 2);
    assert_eq!(result.failed, ["two"]);
}

#[test]
fn test_attempted_equals_succeeded_plus_failed() {
    let (_dir, path) = list_file("a\nb\nc\nd\n");
    let mut flip = false;
    let result = batch::run(&path, |_| {
        flip = !flip;
        flip
    })
    .unwrap();

    assert_eq!(result.attempted, result.succeeded + result.failed.len());
}

#[test]
fn test_missing_file_is_fatal_with_zero_calls() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-list.txt");
    let mut calls = 0;
    let err = batch::run(&path, |_| {
        calls += 1;
        true
    })
    .unwrap_err();

    assert_eq!(calls, 0);
    assert!(matches!(err, BatchError::MissingFile(_)));
}

#[test]
fn test_mixed_content_yields_trimmed_items() {
    let (_dir, path) = list_file("  \n# comment\nfoo\n\nbar\n");
    let mut seen = Vec::new();
    let result = batch::run(&path, |item| {
        seen.push(item.to_string());
        true
    })
    .unwrap();

    assert_eq!(seen, ["foo", "bar"]);
    assert_eq!(result.attempted, 2);
}

#[test]
fn test_leading_whitespace_is_trimmed() {
    let (_dir, path) = list_file("   wget   \n");
    let mut seen = Vec::new();
    batch::run(&path, |item| {
        seen.push(item.to_string());
        true
    })
    .unwrap();

    assert_eq!(seen, ["wget"]);
}

#[test]
fn test_duplicates_installed_once_per_occurrence() {
    let (_dir, path) = list_file("git\ngit\n");
    let mut calls = 0;
    let result = batch::run(&path, |_| {
        calls += 1;
        true
    })
    .unwrap();

    assert_eq!(calls, 2);
    assert_eq!(result.attempted, 2);
}

#[test]
fn test_all_failures_are_enumerated() {
    let (_dir, path) = list_file("x\ny\nz\n");
    let result = batch::run(&path, |_| false).unwrap();

    assert_eq!(result.succeeded, 0);
    assert_eq!(result.failed, ["x", "y", "z"]);
    assert!(!result.is_clean());
}
