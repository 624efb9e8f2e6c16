// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rf_core::{HostKind, RemoteRepo};

use crate::cli::OpenTarget;
use crate::error::{Error, Result};

pub fn run(target: OpenTarget) -> Result<()> {
    let dir = std::env::current_dir()?;
    let remote = super::open_remote(&dir)?;
    let url = page_url(&remote, target)?;
    println!("{}", url);
    open::that(&url)?;
    Ok(())
}

/// Browser URL for a page of the remote repository.
pub(crate) fn page_url(remote: &RemoteRepo, target: OpenTarget) -> Result<String> {
    let base = remote.web_url();
    match (target, remote.kind) {
        (OpenTarget::Repo, _) => Ok(base),
        (OpenTarget::Issues, HostKind::GitHub) => Ok(format!("{}/issues", base)),
        (OpenTarget::Pulls, HostKind::GitHub) => Ok(format!("{}/pulls", base)),
        (OpenTarget::Issues, HostKind::GitLab) => Err(Error::GitHubOnly {
            operation: "open issues",
        }),
        (OpenTarget::Pulls, HostKind::GitLab) => Err(Error::GitHubOnly {
            operation: "open pulls",
        }),
    }
}

#[cfg(test)]
#[path = "open_tests.rs"]
mod tests;
