// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git plumbing.
//!
//! Everything goes through the `git` binary, run in an explicit directory.
//! Commands that record an identity (`commit`, `tag`) use the user's git
//! config; repoflow defaults fill in only the fields git has no value for.

use std::path::{Path, PathBuf};
use std::process::Command;

use rf_core::SemanticVersion;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Subcommands that write an author, committer or tagger.
const IDENTITY_COMMANDS: [&str; 2] = ["commit", "tag"];

/// Config key, the variables that override it, and the repoflow default.
const IDENTITY_FALLBACKS: [(&str, [&str; 2], &str); 2] = [
    ("user.name", ["GIT_AUTHOR_NAME", "GIT_COMMITTER_NAME"], "repoflow"),
    ("user.email", ["GIT_AUTHOR_EMAIL", "GIT_COMMITTER_EMAIL"], "repoflow@localhost"),
];

fn is_set(var: &str) -> bool {
    std::env::var(var).is_ok_and(|v| !v.is_empty())
}

fn config_value(dir: &Path, key: &str) -> Option<String> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(["config", "--get", key])
        .output()
        .ok()?;
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (output.status.success() && !value.is_empty()).then_some(value)
}

/// Environment defaults for identity fields neither git config nor the
/// environment provide.
pub(crate) fn identity_fallback(dir: &Path) -> Vec<(&'static str, &'static str)> {
    let mut env = Vec::new();
    for (key, vars, default) in IDENTITY_FALLBACKS {
        if vars.iter().all(|v| is_set(v)) || config_value(dir, key).is_some() {
            continue;
        }
        env.extend(vars.into_iter().filter(|v| !is_set(v)).map(|v| (v, default)));
    }
    env
}

/// Runs a git command in `dir`, returning its stdout.
pub fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    tracing::debug!("git {} (in {})", args.join(" "), dir.display());
    let mut cmd = Command::new("git");
    cmd.current_dir(dir).args(args);
    if args.first().is_some_and(|a| IDENTITY_COMMANDS.contains(a)) {
        for (var, default) in identity_fallback(dir) {
            tracing::debug!("{} unset, using {}", var, default);
            cmd.env(var, default);
        }
    }

    let output = cmd.output()?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        Err(Error::Git {
            command: args.first().copied().unwrap_or_default().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// True if `dir` is inside a git work tree.
pub fn is_repository(dir: &Path) -> bool {
    run_git(dir, &["rev-parse", "--is-inside-work-tree"])
        .map(|out| out.trim() == "true")
        .unwrap_or(false)
}

pub fn ensure_repository(dir: &Path) -> Result<()> {
    if is_repository(dir) {
        Ok(())
    } else {
        Err(Error::NotARepository)
    }
}

/// URL of `remote.origin`.
pub fn remote_origin(dir: &Path) -> Result<String> {
    let url = run_git(dir, &["config", "--get", "remote.origin.url"])
        .map_err(|_| Error::NoRemote)?;
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::NoRemote);
    }
    Ok(url.to_string())
}

/// All tag names, one per line of `git tag` output.
pub fn tags(dir: &Path) -> Result<Vec<String>> {
    let out = run_git(dir, &["tag"])?;
    Ok(out
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

/// Message stored on an annotated release tag.
pub fn release_message(version: &SemanticVersion) -> String {
    format!("Release Version: {}", version.bare())
}

/// Creates an annotated tag for `version` at HEAD.
pub fn create_tag(dir: &Path, version: &SemanticVersion) -> Result<()> {
    let name = version.to_string();
    let message = release_message(version);
    run_git(dir, &["tag", &name, "-m", &message])?;
    Ok(())
}

pub fn push_tags(dir: &Path) -> Result<()> {
    run_git(dir, &["push", "--tags"])?;
    Ok(())
}

/// `git status --porcelain` output, empty when the tree is clean.
pub fn status_porcelain(dir: &Path) -> Result<String> {
    Ok(run_git(dir, &["status", "--porcelain"])?.trim_end().to_string())
}

/// Commits on HEAD not yet on the upstream branch.
///
/// `None` when there is no upstream to compare against.
pub fn ahead_count(dir: &Path) -> Option<u64> {
    run_git(dir, &["rev-list", "--count", "@{u}..HEAD"])
        .ok()
        .and_then(|out| out.trim().parse().ok())
}

/// Author dates (`YYYY-MM-DD`) of every commit reachable from HEAD.
pub fn commit_dates(dir: &Path) -> Result<Vec<String>> {
    let out = run_git(dir, &["log", "--pretty=format:%ad", "--date=short"])?;
    Ok(out
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}

/// Shallow-clones `url` into `dest`, relative to the working directory.
pub fn clone_shallow(url: &str, dest: &Path) -> Result<()> {
    let target = dest.to_string_lossy();
    run_git(Path::new("."), &["clone", "--depth", "1", url, &target])?;
    Ok(())
}

/// Finds every git repository at or below `root`.
///
/// A directory counts when it holds a `.git` entry. The walk does not
/// descend into `.git` itself.
pub fn find_repositories(root: &Path) -> Vec<PathBuf> {
    let mut repos = Vec::new();
    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();
    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_name() == ".git" {
            if let Some(parent) = entry.path().parent() {
                repos.push(parent.to_path_buf());
            }
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
        }
    }
    repos
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
