// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the rflow library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a git repository\n  hint: run repoflow from inside a git checkout")]
    NotARepository,

    #[error("no remote origin configured\n  hint: add one with 'git remote add origin <url>'")]
    NoRemote,

    #[error("no {0} in the environment\n  hint: export a personal access token as {0}")]
    TokenMissing(&'static str),

    #[error("{0} is empty\n  hint: export a non-empty personal access token as {0}")]
    TokenEmpty(&'static str),

    #[error("{operation} failed: {status} {reason}")]
    Remote {
        operation: &'static str,
        status: u16,
        reason: String,
    },

    #[error("{operation} is only implemented for github remotes")]
    GitHubOnly { operation: &'static str },

    #[error("cannot read {}: {source}", path.display())]
    ScanAborted {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("interactive mode requires a terminal (TTY)\n  hint: {hint}")]
    TtyRequired { hint: &'static str },

    #[error("{0}")]
    Domain(#[from] rf_core::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("some operations failed: {succeeded} succeeded, {failed} failed")]
    PartialFailure { succeeded: usize, failed: usize },
}

/// A specialized Result type for rflow operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
