// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::calendar::HeatStyle;
use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use rf_core::Bump;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a bump kind (major, minor, patch).
fn parse_bump(s: &str) -> Result<Bump, String> {
    s.parse::<Bump>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which issues `issues` lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StateFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl StateFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
            StateFilter::All => "all",
        }
    }
}

/// Page of the remote repository opened by `open`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OpenTarget {
    #[default]
    Repo,
    Issues,
    #[value(alias = "prs")]
    Pulls,
}

#[derive(Parser)]
#[command(name = "repoflow")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn source TODOs into tracker issues and manage release tags")]
#[command(
    long_about = "Turn source TODOs into tracker issues and manage release tags.\n\n\
    Run with no command to scan the current directory, number each new TODO \
    and file it on the GitHub or GitLab project of the remote origin."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Number new TODOs and file an issue for each (default command)
    #[command(after_help = colors::examples("\
Examples:
  repoflow                            Scan the current directory
  repoflow scan --abort-on-error      Stop at the first unreadable file
  repoflow scan --close-stale         Also close issues whose TODO is gone"))]
    Scan {
        /// Stop at the first file that cannot be read
        #[arg(long)]
        abort_on_error: bool,

        /// Close open TODO issues whose marker no longer appears in source
        #[arg(long)]
        close_stale: bool,
    },

    /// List tracker issues
    #[command(after_help = colors::examples("\
Examples:
  repoflow issues                     List open issues
  repoflow issues --state all         List open and closed issues
  repoflow issues -o json             Output as JSON"))]
    Issues {
        /// Issue state to list (open, closed, all)
        #[arg(long, short, value_enum, default_value = "open")]
        state: StateFilter,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Create or close a single issue
    #[command(subcommand)]
    Issue(IssueCommand),

    /// Show the latest version tag, or create the next one
    #[command(after_help = colors::examples("\
Examples:
  repoflow tag                        Print the latest version tag
  repoflow tag bump                   Pick the bump interactively
  repoflow tag bump minor --push      Tag the next minor version and push
  repoflow tag bump -y                Patch bump and push, no questions"))]
    Tag {
        #[command(subcommand)]
        command: Option<TagCommand>,
    },

    /// Report sibling repositories with uncommitted or unpushed work
    Check,

    /// Open the remote repository in a browser
    #[command(after_help = colors::examples("\
Examples:
  repoflow open                       Open the repository page
  repoflow open issues                Open the issue list (GitHub only)
  repoflow open pulls                 Open pull requests (GitHub only)"))]
    Open {
        /// Page to open (repo, issues, pulls)
        #[arg(value_enum, default_value = "repo")]
        target: OpenTarget,
    },

    /// Shallow-clone every public repository of a GitHub user
    #[command(after_help = colors::examples("\
Examples:
  repoflow clone octocat              Clone into ./tmp
  repoflow clone octocat --dest src   Clone into ./src
  repoflow clone octocat -y           Skip the confirmation for large accounts"))]
    Clone {
        /// GitHub user name
        #[arg(value_parser = non_empty_string)]
        user: String,

        /// Destination directory (default: tmp)
        #[arg(long, short)]
        dest: Option<PathBuf>,

        /// Do not ask before cloning many repositories
        #[arg(long, short)]
        yes: bool,
    },

    /// Commit heatmap for every repository below the current directory
    Calendar {
        /// Rendering style (ansi, plain, markdown, html)
        #[arg(long, value_enum)]
        style: Option<HeatStyle>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// `issue` subcommands.
#[derive(Subcommand)]
pub enum IssueCommand {
    /// File a new issue
    #[command(after_help = colors::examples("\
Examples:
  repoflow issue new --title \"Fix login\"
  repoflow issue new -t \"Crash on start\" -b \"Steps to reproduce...\""))]
    New {
        /// Issue title
        #[arg(long, short, value_parser = non_empty_string)]
        title: String,

        /// Issue body
        #[arg(long, short)]
        body: Option<String>,
    },

    /// Close an issue as completed
    #[command(arg_required_else_help = true)]
    Close {
        /// Issue number
        number: u64,
    },
}

/// `tag` subcommands.
#[derive(Subcommand)]
pub enum TagCommand {
    /// Create the next annotated version tag
    Bump {
        /// Component to bump (major, minor, patch); asked for when omitted
        #[arg(value_parser = parse_bump)]
        bump: Option<Bump>,

        /// Push tags to origin without asking
        #[arg(long)]
        push: bool,

        /// Accept defaults: patch bump when omitted, then push
        #[arg(long, short)]
        yes: bool,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
