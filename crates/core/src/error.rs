// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rf-core operations.

use thiserror::Error;

/// All possible errors that can occur in rf-core operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid tag '{tag}': {reason}\n  hint: tags must look like v<major>.<minor>.<patch>")]
    InvalidTag { tag: String, reason: String },

    #[error("invalid bump: '{0}'\n  hint: valid bumps are: major, minor, patch")]
    InvalidBump(String),

    #[error("cannot apply a {bump} bump to {version}: the {bump} component is at its maximum")]
    VersionOverflow { version: String, bump: &'static str },

    #[error("invalid issue state: '{0}'\n  hint: valid states are: open, closed")]
    InvalidState(String),

    #[error("cannot parse remote url '{0}'")]
    InvalidRemoteUrl(String),

    #[error("the remote '{0}' is not github or gitlab\n  hint: issue tracking is only implemented for github and gitlab remotes")]
    UnsupportedHost(String),
}

/// A specialized Result type for rf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
