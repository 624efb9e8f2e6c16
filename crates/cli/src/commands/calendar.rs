// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::calendar::{self, CommitCounts, HeatStyle};
use crate::colors;
use crate::error::Result;
use crate::git;

pub fn run(style: Option<HeatStyle>) -> Result<()> {
    let dir = std::env::current_dir()?;
    let style = style.unwrap_or(if colors::should_colorize() {
        HeatStyle::Ansi
    } else {
        HeatStyle::Plain
    });
    let today = Local::now().date_naive();
    print!("{}", run_impl(&dir, today, style));
    Ok(())
}

/// Totals line plus heatmap for every repository below `dir`.
pub(crate) fn run_impl(dir: &Path, today: NaiveDate, style: HeatStyle) -> String {
    let counts = crate::time_phase!("calendar::collect", { collect(dir) });
    let mut out = format!(
        "Total Count: {}\n",
        calendar::total_in_window(&counts, today)
    );
    if style == HeatStyle::Markdown {
        out.push('\n');
    }
    out.push_str(&calendar::render(&counts, today, style));
    out
}

fn collect(dir: &Path) -> CommitCounts {
    let mut counts = CommitCounts::new();
    for repo in git::find_repositories(dir) {
        match git::commit_dates(&repo) {
            Ok(dates) => calendar::merge(&mut counts, calendar::tally(dates.iter().map(String::as_str))),
            // Fresh repositories have no HEAD yet.
            Err(e) => tracing::debug!("no commits in {}: {}", repo.display(), e),
        }
    }
    counts
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
