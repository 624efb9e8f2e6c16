// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr so command output on stdout stays clean.
//! The filter comes from `REPOFLOW_LOG` using `EnvFilter` directive syntax
//! (e.g. `debug`, `rflow=debug,rf_core=warn`).

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter applied when `REPOFLOW_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from an optional directive string.
pub fn filter_from(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Safe to call more than once.
pub fn setup_logging() {
    let filter = filter_from(env::log_filter().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
