// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote origin URL parsing.
//!
//! Turns `remote.origin.url` into the host, owner and repository that the
//! tracker clients need. Supported forms:
//! - `https://github.com/owner/repo(.git)`
//! - `git@github.com:owner/repo(.git)`
//! - `ssh://git@gitlab.example.com:2222/group/sub/repo(.git)`

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Error, Result};

// Compile-time constant patterns, verified by tests.
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^(?:https?|ssh|git)://(?:[^@/]+@)?([^/:]+)(?::\d+)?/(.+)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static SCP_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^(?:[^@/]+@)?([^:/]+):(.+)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Which tracker implementation serves a remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    GitHub,
    GitLab,
}

impl HostKind {
    /// Detect the host kind from a host name.
    pub fn detect(host: &str) -> Option<Self> {
        let host = host.to_lowercase();
        if host.contains("github") {
            Some(HostKind::GitHub)
        } else if host.contains("gitlab") {
            Some(HostKind::GitLab)
        } else {
            None
        }
    }

    /// Name of the environment variable holding this host's token.
    pub fn token_var(&self) -> &'static str {
        match self {
            HostKind::GitHub => "GH_PERSONAL_TOKEN",
            HostKind::GitLab => "GL_PERSONAL_TOKEN",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostKind::GitHub => "github",
            HostKind::GitLab => "gitlab",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A repository on a supported tracker host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteRepo {
    pub kind: HostKind,
    pub host: String,
    /// User, organisation, or GitLab namespace (may contain `/`).
    pub owner: String,
    pub repo: String,
}

impl RemoteRepo {
    /// Parse a remote URL as printed by `git config --get remote.origin.url`.
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        let (host, path) = split_host_and_path(url)
            .ok_or_else(|| Error::InvalidRemoteUrl(url.to_string()))?;

        let kind = HostKind::detect(&host).ok_or_else(|| Error::UnsupportedHost(url.to_string()))?;

        let path = path.trim_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let (owner, repo) = path
            .rsplit_once('/')
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty())
            .ok_or_else(|| Error::InvalidRemoteUrl(url.to_string()))?;

        Ok(RemoteRepo {
            kind,
            host,
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// `owner/repo`, the project path on the host.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Browser URL of the repository.
    pub fn web_url(&self) -> String {
        format!("https://{}/{}", self.host, self.full_name())
    }
}

fn split_host_and_path(url: &str) -> Option<(String, String)> {
    let caps = if url.contains("://") {
        URL_RE.captures(url)?
    } else {
        SCP_RE.captures(url)?
    };
    let host = caps.get(1)?.as_str().to_lowercase();
    let path = caps.get(2)?.as_str().to_string();
    Some((host, path))
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
