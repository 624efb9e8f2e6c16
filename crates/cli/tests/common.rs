// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The repoflow binary with a scrubbed environment: no colors, no tokens.
pub fn rf() -> Command {
    let mut cmd = cargo_bin_cmd!("repoflow");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("GH_PERSONAL_TOKEN")
        .env_remove("GL_PERSONAL_TOKEN")
        .env_remove("REPOFLOW_LOG");
    cmd
}

/// Run git in `dir` with a fixed identity, panicking on failure.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .current_dir(dir)
        .args(args)
        .env("GIT_AUTHOR_NAME", "test")
        .env("GIT_AUTHOR_EMAIL", "test@localhost")
        .env("GIT_COMMITTER_NAME", "test")
        .env("GIT_COMMITTER_EMAIL", "test@localhost")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// A temp directory holding a git repository with one empty commit.
pub fn init_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    git(temp.path(), &["init", "-q"]);
    git(
        temp.path(),
        &["commit", "-q", "--no-gpg-sign", "--allow-empty", "-m", "init"],
    );
    temp
}

/// Like [`init_repo`], with `origin` pointing at `url`.
pub fn init_repo_with_remote(url: &str) -> TempDir {
    let temp = init_repo();
    git(temp.path(), &["remote", "add", "origin", url]);
    temp
}
