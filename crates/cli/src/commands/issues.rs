// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rf_core::{IssueRecord, IssueState};

use crate::cli::{OutputFormat, StateFilter};
use crate::colors;
use crate::error::Result;
use crate::tracker::Tracker;

pub fn run(state: StateFilter, output: OutputFormat) -> Result<()> {
    let dir = std::env::current_dir()?;
    let ctx = super::open_tracker(&dir)?;
    tracing::debug!("listing issues of {}", ctx.remote.full_name());
    run_impl(ctx.tracker.as_ref(), state, output)
}

pub(crate) fn run_impl(tracker: &dyn Tracker, state: StateFilter, output: OutputFormat) -> Result<()> {
    let issues = crate::time_phase!("tracker::list", { tracker.list_issues()? });
    let issues = filter_issues(issues, state);

    match output {
        OutputFormat::Text => {
            if issues.is_empty() {
                match state {
                    StateFilter::All => println!("No issues"),
                    _ => println!("No {} issues", state.as_str()),
                }
            }
            for issue in &issues {
                println!("{}", format_issue_line(issue));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&issues)?);
        }
    }
    Ok(())
}

/// Keep the issues matching `state`, lowest number first.
pub(crate) fn filter_issues(issues: Vec<IssueRecord>, state: StateFilter) -> Vec<IssueRecord> {
    let mut kept: Vec<IssueRecord> = issues
        .into_iter()
        .filter(|issue| match state {
            StateFilter::Open => issue.state == IssueState::Open,
            StateFilter::Closed => issue.state == IssueState::Closed,
            StateFilter::All => true,
        })
        .collect();
    kept.sort_by_key(|issue| issue.number);
    kept
}

/// `#12 [open] Fix login`
pub(crate) fn format_issue_line(issue: &IssueRecord) -> String {
    format!(
        "{} [{}] {}",
        colors::literal(&format!("#{}", issue.number)),
        colors::state(issue.state),
        issue.title
    )
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
