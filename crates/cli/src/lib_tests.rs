// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Routing tests for `run()`.
//!
//! Commands that need a repository, credentials or the network are covered
//! by the integration tests in `tests/`. Here only the self-contained ones
//! are driven through the dispatcher.

use super::*;
use clap_complete::Shell;

#[test]
fn completion_runs_without_context() {
    assert!(run(Some(Command::Completion { shell: Shell::Bash })).is_ok());
}

#[test]
fn exported_types_construct() {
    let cmd = Command::Issues {
        state: StateFilter::default(),
        output: OutputFormat::default(),
    };
    assert!(matches!(
        cmd,
        Command::Issues {
            state: StateFilter::Open,
            output: OutputFormat::Text
        }
    ));
}
