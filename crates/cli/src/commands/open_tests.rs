// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    repo = { OpenTarget::Repo, "https://github.com/octo/app" },
    issues = { OpenTarget::Issues, "https://github.com/octo/app/issues" },
    pulls = { OpenTarget::Pulls, "https://github.com/octo/app/pulls" },
)]
fn test_github_pages(target: OpenTarget, expected: &str) {
    let remote = RemoteRepo::parse("git@github.com:octo/app.git").unwrap();
    assert_eq!(page_url(&remote, target).unwrap(), expected);
}

#[test]
fn test_gitlab_repo_page_keeps_subgroups() {
    let remote = RemoteRepo::parse("https://gitlab.com/group/sub/app.git").unwrap();
    assert_eq!(
        page_url(&remote, OpenTarget::Repo).unwrap(),
        "https://gitlab.com/group/sub/app"
    );
}

#[parameterized(
    issues = { OpenTarget::Issues },
    pulls = { OpenTarget::Pulls },
)]
fn test_gitlab_issue_pages_are_github_only(target: OpenTarget) {
    let remote = RemoteRepo::parse("git@gitlab.com:group/app.git").unwrap();
    assert!(matches!(
        page_url(&remote, target),
        Err(Error::GitHubOnly { .. })
    ));
}
