// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rflow - the library behind the `repoflow` CLI.
//!
//! `repoflow` keeps source TODOs and a hosted issue tracker in step and
//! handles release tags for the repository it runs in.
//!
//! # Main Components
//!
//! - [`scanner`] - numbers new `TODO: ` lines and files an issue for each
//! - [`tracker`] - the [`tracker::Tracker`] seam with GitHub and GitLab clients
//! - [`git`] - git plumbing (tags, remotes, status, clones)
//! - [`calendar`] - commit heatmap rendering
//! - [`config`] - optional `.repoflow.toml` settings
//! - [`Error`] - error type for every command
//!
//! Domain rules (tag parsing, marker classification, reconciliation) live in
//! the `rf-core` crate.

mod cli;
mod commands;
mod prompt;

pub mod calendar;
pub mod colors;
pub mod config;
pub mod env;
pub mod error;
pub mod git;
pub mod help;
pub mod logging;
pub mod scanner;
pub mod timings;
pub mod tracker;

pub use cli::{Cli, Command, IssueCommand, OpenTarget, OutputFormat, StateFilter, TagCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::scan::ScanFlags;

/// Run a parsed command. No command means a default scan.
pub fn run(command: Option<Command>) -> Result<()> {
    let Some(command) = command else {
        return commands::scan::run(ScanFlags::default());
    };
    match command {
        Command::Scan {
            abort_on_error,
            close_stale,
        } => commands::scan::run(ScanFlags {
            abort_on_error,
            close_stale,
        }),
        Command::Issues { state, output } => commands::issues::run(state, output),
        Command::Issue(cmd) => match cmd {
            IssueCommand::New { title, body } => commands::issue::new(title, body),
            IssueCommand::Close { number } => commands::issue::close(number),
        },
        Command::Tag { command } => match command {
            None => commands::tag::show(),
            Some(TagCommand::Bump { bump, push, yes }) => commands::tag::bump(bump, push, yes),
        },
        Command::Check => commands::check::run(),
        Command::Open { target } => commands::open::run(target),
        Command::Clone { user, dest, yes } => commands::clone::run(user, dest, yes),
        Command::Calendar { style } => commands::calendar::run(style),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "repoflow", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
