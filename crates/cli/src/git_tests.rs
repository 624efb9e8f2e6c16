// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn init_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    run_git(temp.path(), &["init", "-q"]).unwrap();
    temp
}

fn commit_file(dir: &Path, name: &str) {
    fs::write(dir.join(name), "content\n").unwrap();
    run_git(dir, &["add", name]).unwrap();
    run_git(dir, &["commit", "-q", "--no-gpg-sign", "-m", "add file"]).unwrap();
}

#[test]
fn test_plain_directory_is_not_a_repository() {
    let temp = TempDir::new().unwrap();
    assert!(!is_repository(temp.path()));
    assert!(matches!(
        ensure_repository(temp.path()),
        Err(Error::NotARepository)
    ));
}

#[test]
fn test_initialised_directory_is_a_repository() {
    let temp = init_repo();
    assert!(is_repository(temp.path()));
    ensure_repository(temp.path()).unwrap();
}

#[test]
fn test_remote_origin_missing() {
    let temp = init_repo();
    assert!(matches!(remote_origin(temp.path()), Err(Error::NoRemote)));
}

#[test]
fn test_remote_origin_configured() {
    let temp = init_repo();
    run_git(
        temp.path(),
        &["remote", "add", "origin", "https://github.com/acme/widgets.git"],
    )
    .unwrap();
    assert_eq!(
        remote_origin(temp.path()).unwrap(),
        "https://github.com/acme/widgets.git"
    );
}

#[test]
fn test_failed_command_reports_stderr() {
    let temp = init_repo();
    let err = run_git(temp.path(), &["rev-parse", "no-such-ref"]).unwrap_err();
    assert!(
        matches!(&err, Error::Git { command, stderr } if command == "rev-parse" && !stderr.is_empty()),
        "unexpected error: {err}"
    );
}

#[test]
fn test_tags_empty_repository() {
    let temp = init_repo();
    assert!(tags(temp.path()).unwrap().is_empty());
}

#[test]
fn test_create_tag_is_annotated() {
    let temp = init_repo();
    commit_file(temp.path(), "a.txt");

    create_tag(temp.path(), &SemanticVersion::new(1, 4, 0)).unwrap();

    assert_eq!(tags(temp.path()).unwrap(), vec!["v1.4.0".to_string()]);
    let kind = run_git(temp.path(), &["cat-file", "-t", "v1.4.0"]).unwrap();
    assert_eq!(kind.trim(), "tag");
    let message = run_git(
        temp.path(),
        &["tag", "-l", "--format=%(contents:subject)", "v1.4.0"],
    )
    .unwrap();
    assert_eq!(message.trim(), "Release Version: 1.4.0");
}

#[test]
fn test_create_tag_is_signed_by_configured_user() {
    let temp = init_repo();
    run_git(temp.path(), &["config", "user.name", "Alice Dev"]).unwrap();
    run_git(temp.path(), &["config", "user.email", "alice@example.com"]).unwrap();
    commit_file(temp.path(), "a.txt");

    create_tag(temp.path(), &SemanticVersion::new(1, 0, 0)).unwrap();

    let tagger = run_git(
        temp.path(),
        &["for-each-ref", "--format=%(taggername) %(taggeremail)", "refs/tags/v1.0.0"],
    )
    .unwrap();
    assert_eq!(tagger.trim(), "Alice Dev <alice@example.com>");
    let author = run_git(temp.path(), &["log", "-1", "--format=%an"]).unwrap();
    assert_eq!(author.trim(), "Alice Dev");
}

#[test]
fn test_configured_identity_needs_no_fallback() {
    let temp = init_repo();
    run_git(temp.path(), &["config", "user.name", "Alice Dev"]).unwrap();
    run_git(temp.path(), &["config", "user.email", "alice@example.com"]).unwrap();
    assert!(identity_fallback(temp.path()).is_empty());
}

#[test]
fn test_release_message_strips_prefix() {
    assert_eq!(
        release_message(&SemanticVersion::new(0, 1, 0)),
        "Release Version: 0.1.0"
    );
}

#[test]
fn test_status_porcelain_reports_changes() {
    let temp = init_repo();
    commit_file(temp.path(), "a.txt");
    assert_eq!(status_porcelain(temp.path()).unwrap(), "");

    fs::write(temp.path().join("b.txt"), "new\n").unwrap();
    let status = status_porcelain(temp.path()).unwrap();
    assert!(status.contains("b.txt"));
}

#[test]
fn test_ahead_count_without_upstream() {
    let temp = init_repo();
    commit_file(temp.path(), "a.txt");
    assert_eq!(ahead_count(temp.path()), None);
}

#[test]
fn test_commit_dates_one_per_commit() {
    let temp = init_repo();
    commit_file(temp.path(), "a.txt");
    commit_file(temp.path(), "b.txt");

    let dates = commit_dates(temp.path()).unwrap();
    assert_eq!(dates.len(), 2);
    assert!(dates.iter().all(|d| d.len() == 10 && d.as_bytes()[4] == b'-'));
}

#[test]
fn test_find_repositories_nested() {
    let temp = TempDir::new().unwrap();
    let one = temp.path().join("one");
    let two = temp.path().join("group").join("two");
    fs::create_dir_all(&one).unwrap();
    fs::create_dir_all(&two).unwrap();
    fs::create_dir_all(temp.path().join("plain")).unwrap();
    run_git(&one, &["init", "-q"]).unwrap();
    run_git(&two, &["init", "-q"]).unwrap();

    let repos = find_repositories(temp.path());
    assert_eq!(repos, vec![two, one]);
}
