// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule. Token variable names
//! come from [`rf_core::HostKind::token_var`].

use rf_core::HostKind;

use crate::error::{Error, Result};

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `REPOFLOW_TIMINGS` is set (any value).
pub fn timings() -> bool {
    std::env::var(vars::REPOFLOW_TIMINGS).is_ok()
}

/// Returns the `REPOFLOW_LOG` filter directive if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::REPOFLOW_LOG).ok()
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the tracker token for `kind` from the environment.
///
/// An unset variable and an empty one are reported differently.
pub fn tracker_token(kind: HostKind) -> Result<String> {
    let var = kind.token_var();
    check_token(var, std::env::var(var).ok())
}

/// Validate a looked-up token value.
pub fn check_token(var: &'static str, value: Option<String>) -> Result<String> {
    match value {
        None => Err(Error::TokenMissing(var)),
        Some(v) if v.trim().is_empty() => Err(Error::TokenEmpty(var)),
        Some(v) => Ok(v.trim().to_string()),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
