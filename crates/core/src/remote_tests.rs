// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    https = { "https://github.com/acme/widgets.git", "github.com", "acme", "widgets" },
    https_no_suffix = { "https://github.com/acme/widgets", "github.com", "acme", "widgets" },
    https_trailing_newline = { "https://github.com/acme/widgets.git\n", "github.com", "acme", "widgets" },
    https_with_user = { "https://bot@github.com/acme/widgets.git", "github.com", "acme", "widgets" },
    scp = { "git@github.com:acme/widgets.git", "github.com", "acme", "widgets" },
    ssh = { "ssh://git@github.com/acme/widgets.git", "github.com", "acme", "widgets" },
)]
fn parse_github_remotes(url: &str, host: &str, owner: &str, repo: &str) {
    let remote = RemoteRepo::parse(url).unwrap();
    assert_eq!(remote.kind, HostKind::GitHub);
    assert_eq!(remote.host, host);
    assert_eq!(remote.owner, owner);
    assert_eq!(remote.repo, repo);
}

#[test]
fn parse_gitlab_subgroup_with_port() {
    let remote = RemoteRepo::parse("ssh://git@gitlab.example.com:2222/group/sub/tool.git").unwrap();
    assert_eq!(remote.kind, HostKind::GitLab);
    assert_eq!(remote.host, "gitlab.example.com");
    assert_eq!(remote.owner, "group/sub");
    assert_eq!(remote.repo, "tool");
    assert_eq!(remote.full_name(), "group/sub/tool");
}

#[test]
fn web_url_drops_git_suffix() {
    let remote = RemoteRepo::parse("git@github.com:acme/widgets.git").unwrap();
    assert_eq!(remote.web_url(), "https://github.com/acme/widgets");
}

#[test]
fn unsupported_host_is_reported() {
    let err = RemoteRepo::parse("https://bitbucket.org/acme/widgets.git").unwrap_err();
    assert!(matches!(err, Error::UnsupportedHost(_)));
}

#[parameterized(
    empty = { "" },
    no_path = { "https://github.com/" },
    single_segment = { "https://github.com/widgets" },
    local_path = { "/srv/git/widgets.git" },
)]
fn invalid_remotes(url: &str) {
    assert!(RemoteRepo::parse(url).is_err());
}

#[test]
fn token_vars_per_host() {
    assert_eq!(HostKind::GitHub.token_var(), "GH_PERSONAL_TOKEN");
    assert_eq!(HostKind::GitLab.token_var(), "GL_PERSONAL_TOKEN");
}
