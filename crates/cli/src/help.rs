// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_issues}
  {scan}        Number new TODOs and file an issue for each (default)
  {issues}      List tracker issues
  {issue}       Create or close a single issue

{header_repo}
  {tag}         Show the latest version tag, or create the next one
  {check}       Report sibling repositories with unpushed work
  {open}        Open the remote repository in a browser
  {clone}       Shallow-clone every public repository of a GitHub user
  {calendar}    Commit heatmap for repositories below this directory

{header_setup}
  {completion}  Generate shell completions",
        header_issues = colors::header("TODOs & Issues:"),
        header_repo = colors::header("Repositories:"),
        header_setup = colors::header("Setup:"),
        scan = colors::literal("scan"),
        issues = colors::literal("issues"),
        issue = colors::literal("issue"),
        tag = colors::literal("tag"),
        check = colors::literal("check"),
        open = colors::literal("open"),
        clone = colors::literal("clone"),
        calendar = colors::literal("calendar"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  export GH_PERSONAL_TOKEN=...   Token for github.com remotes
  repoflow                       File issues for new TODOs here
  repoflow issues                List open issues
  repoflow tag bump patch        Tag the next patch release",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
