// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit-activity heatmap.
//!
//! One row per calendar month covering the last 365 days. Each day is one
//! cell, rows are padded to 31 cells and followed by the month name.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use clap::ValueEnum;
use crossterm::style::{Color, Stylize};

/// Width of a row in cells (the longest month).
const ROW_WIDTH: usize = 31;

/// Days covered by the heatmap, counting back from today.
const WINDOW_DAYS: u64 = 365;

/// Commits per day.
pub type CommitCounts = HashMap<NaiveDate, u32>;

/// Output flavour of the heatmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HeatStyle {
    /// Colored cells for a terminal
    #[default]
    Ansi,
    /// Distinct characters, no escapes
    #[value(alias = "non-ansi")]
    Plain,
    /// Markdown emphasis, one paragraph per month
    #[value(alias = "md")]
    Markdown,
    /// Inline HTML markup
    Html,
}

/// Count `YYYY-MM-DD` dates. Unparseable entries are ignored.
pub fn tally<'a, I>(dates: I) -> CommitCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = CommitCounts::new();
    for date in dates {
        match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
            Ok(day) => *counts.entry(day).or_insert(0) += 1,
            Err(_) => tracing::debug!("ignoring commit date '{}'", date),
        }
    }
    counts
}

/// Merge `other` into `into`.
pub fn merge(into: &mut CommitCounts, other: CommitCounts) {
    for (day, count) in other {
        *into.entry(day).or_insert(0) += count;
    }
}

/// Total commits inside the heatmap window ending at `today`.
pub fn total_in_window(counts: &CommitCounts, today: NaiveDate) -> u32 {
    let start = window_start(today);
    counts
        .iter()
        .filter(|(day, _)| **day >= start && **day <= today)
        .map(|(_, count)| count)
        .sum()
}

fn window_start(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(WINDOW_DAYS)).unwrap_or(today)
}

/// Render the heatmap ending at `today`.
pub fn render(counts: &CommitCounts, today: NaiveDate, style: HeatStyle) -> String {
    let start = window_start(today);
    let mut out = String::new();

    let mut month = start.with_day(1).unwrap_or(start);
    while month <= today {
        let Some(next) = month.checked_add_months(Months::new(1)) else {
            break;
        };
        let from = month.max(start);
        let to = next.pred_opt().unwrap_or(month).min(today);

        let mut cells = 0;
        for day in from.iter_days().take_while(|d| *d <= to) {
            out.push_str(&cell(counts.get(&day).copied().unwrap_or(0), style));
            cells += 1;
        }
        out.push_str(&" ".repeat(ROW_WIDTH.saturating_sub(cells)));
        out.push(' ');
        out.push_str(&month.format("%B").to_string());
        if style == HeatStyle::Markdown {
            out.push_str("  \n");
        }
        out.push('\n');

        month = next;
    }
    out
}

/// Intensity band for a day's commit count.
fn band(count: u32) -> usize {
    match count {
        0 => 0,
        1 => 1,
        2..=4 => 2,
        5..=9 => 3,
        _ => 4,
    }
}

/// One visible character for a day.
pub fn cell(count: u32, style: HeatStyle) -> String {
    let band = band(count);
    match style {
        HeatStyle::Plain => ["_", "+", "*", "&", "x"][band].to_string(),
        HeatStyle::Markdown => ["_", "+", "**+**", "*&*", "**X**"][band].to_string(),
        HeatStyle::Html => [
            "<span style=\"color: black\">_</span>",
            "<span style=\"color: red\">+</span>",
            "<b>*</b>",
            "<i>&amp;</i>",
            "<b><i>x</i></b>",
        ][band]
            .to_string(),
        HeatStyle::Ansi => match band {
            0 => "_".with(Color::Black).to_string(),
            1 => "+".with(Color::Red).to_string(),
            2 => "+".with(Color::DarkGreen).bold().to_string(),
            3 => "+".with(Color::Yellow).to_string(),
            _ => "+".on(Color::Magenta).to_string(),
        },
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
