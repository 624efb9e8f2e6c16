// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};
use rf_core::IssueState;

use crate::env;

/// ANSI 256-color codes used for help and command output.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Open issues, created tags: soft green
    pub const OK: u8 = 114;
    /// Warnings and failures: amber
    pub const WARN: u8 = 179;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(text: &str, code: u8) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    text.to_string().with(Color::AnsiValue(code)).to_string()
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(text, codes::HEADER)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(text, codes::LITERAL)
}

/// Apply context color (defaults, hints, secondary info) to text.
pub fn context(text: &str) -> String {
    paint(text, codes::CONTEXT)
}

pub fn ok(text: &str) -> String {
    paint(text, codes::OK)
}

pub fn warn(text: &str) -> String {
    paint(text, codes::WARN)
}

/// Render an issue state label.
pub fn state(state: IssueState) -> String {
    match state {
        IssueState::Open => ok(state.as_str()),
        IssueState::Closed => context(state.as_str()),
    }
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. In other lines the command (everything
/// before the first run of two spaces) is colored as a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 128);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        result.push_str(indent);

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(&header(trimmed));
        } else if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(&literal(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
        } else {
            result.push_str(trimmed);
        }
    }
    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let mut space_start = None;
    for (i, c) in line.char_indices() {
        match (c, space_start) {
            (' ', None) => space_start = Some(i),
            (' ', Some(_)) => {}
            (_, Some(start)) if i - start >= 2 && start > 0 => return Some(start),
            _ => space_start = None,
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
