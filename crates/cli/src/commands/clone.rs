// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shallow-clone every public repository of a GitHub user.

use std::fs;
use std::path::{Path, PathBuf};

use crate::colors;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::git;
use crate::prompt;
use crate::tracker::{self, GitHubTracker, PublicRepo};

/// Above this many repositories the user is asked before cloning.
pub(crate) const CONFIRM_THRESHOLD: u64 = 50;

/// Default destination, relative to the working directory.
pub(crate) const DEFAULT_DEST: &str = "tmp";

#[derive(Debug, Default)]
pub(crate) struct CloneSummary {
    pub cloned: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
}

pub fn run(user: String, dest: Option<PathBuf>, yes: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_or_default(&cwd)?;
    let client = tracker::http_client(config.tracker.timeout_secs)?;
    let api = config.tracker.github_api.as_str();

    let count = GitHubTracker::public_repo_count(&client, api, &user)?;
    if count > CONFIRM_THRESHOLD
        && !yes
        && !prompt::confirm(&format!("{} has {} public repositories. Clone them all?", user, count))?
    {
        return Err(Error::Cancelled);
    }

    let repos = crate::time_phase!("github::repos", {
        GitHubTracker::public_repos(&client, api, &user)?
    });
    let dest = dest.unwrap_or_else(|| PathBuf::from(DEFAULT_DEST));
    let summary = clone_all(&repos, &user, &dest, git::clone_shallow)?;

    println!(
        "{} {} cloned, {} already present",
        colors::ok("done:"),
        summary.cloned.len(),
        summary.skipped.len()
    );
    if summary.failed.is_empty() {
        return Ok(());
    }
    for (name, message) in &summary.failed {
        eprintln!("{} {}: {}", colors::warn("failed:"), name, message);
    }
    Err(Error::PartialFailure {
        succeeded: summary.cloned.len(),
        failed: summary.failed.len(),
    })
}

/// Clone each repository into `dest/<name>`.
///
/// The user's profile repository (named after the user) is left out, and
/// existing targets are not touched.
pub(crate) fn clone_all<F>(
    repos: &[PublicRepo],
    user: &str,
    dest: &Path,
    clone: F,
) -> Result<CloneSummary>
where
    F: Fn(&str, &Path) -> Result<()>,
{
    fs::create_dir_all(dest)?;
    let mut summary = CloneSummary::default();

    for repo in repos {
        if repo.name.eq_ignore_ascii_case(user) {
            tracing::debug!("skipping profile repository {}", repo.name);
            continue;
        }
        let target = dest.join(&repo.name);
        if target.exists() {
            summary.skipped.push(repo.name.clone());
            continue;
        }

        println!(
            "{} {}",
            colors::literal(&repo.name),
            colors::context(repo.description.as_deref().unwrap_or(&repo.html_url))
        );
        match clone(&repo.clone_url, &target) {
            Ok(()) => summary.cloned.push(repo.name.clone()),
            Err(e) => {
                tracing::warn!("cannot clone {}: {}", repo.name, e);
                summary.failed.push((repo.name.clone(), e.to_string()));
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
#[path = "clone_tests.rs"]
mod tests;
