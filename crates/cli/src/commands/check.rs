// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report sibling repositories with work not yet committed or pushed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::colors;
use crate::error::Result;
use crate::git;

/// State of one repository directly below the checked directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepoStatus {
    pub path: PathBuf,
    /// Lines of `git status --porcelain`.
    pub changed_files: usize,
    /// Commits ahead of upstream, `None` without an upstream.
    pub ahead: Option<u64>,
}

impl RepoStatus {
    pub fn is_clean(&self) -> bool {
        self.changed_files == 0 && self.ahead.unwrap_or(0) == 0
    }
}

pub fn run() -> Result<()> {
    let dir = std::env::current_dir()?;
    let statuses = check_impl(&dir)?;
    let dirty: Vec<&RepoStatus> = statuses.iter().filter(|s| !s.is_clean()).collect();

    if dirty.is_empty() {
        println!(
            "{} {} repositories clean",
            colors::ok("ok"),
            statuses.len()
        );
        return Ok(());
    }
    for status in dirty {
        println!("{}", format_status(status));
    }
    Ok(())
}

pub(crate) fn check_impl(dir: &Path) -> Result<Vec<RepoStatus>> {
    let mut repos: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() && path.join(".git").exists() {
            repos.push(path);
        }
    }
    repos.sort();

    let mut statuses = Vec::with_capacity(repos.len());
    for path in repos {
        let changed_files = match git::status_porcelain(&path) {
            Ok(out) => out.lines().filter(|l| !l.is_empty()).count(),
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let ahead = git::ahead_count(&path);
        statuses.push(RepoStatus {
            path,
            changed_files,
            ahead,
        });
    }
    Ok(statuses)
}

/// `name: 2 uncommitted changes, 1 commit to push`
pub(crate) fn format_status(status: &RepoStatus) -> String {
    let name = status
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut parts = Vec::new();
    if status.changed_files > 0 {
        parts.push(format!(
            "{} uncommitted {}",
            status.changed_files,
            plural(status.changed_files as u64, "change")
        ));
    }
    if let Some(ahead) = status.ahead.filter(|n| *n > 0) {
        parts.push(format!("{} {} to push", ahead, plural(ahead, "commit")));
    }
    format!("{}: {}", colors::warn(&name), parts.join(", "))
}

fn plural(count: u64, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
