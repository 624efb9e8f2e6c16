// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive prompts: the bump picker and yes/no confirmation.
//!
//! Both require a terminal. Without one they fail with
//! [`Error::TtyRequired`] so scripted runs never block on stdin.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::{
    cursor, event,
    style::{Print, Stylize},
    terminal, ExecutableCommand, QueueableCommand,
};
use rf_core::{Bump, SemanticVersion};

use crate::error::{Error, Result};

/// Bump picker items, in display order.
const BUMP_ITEMS: [Bump; 3] = [Bump::Patch, Bump::Minor, Bump::Major];

/// Line breaks the picker emits: header, one per item, blank line. The hint
/// ends without one, so the cursor stays on the hint row.
const PICKER_BREAKS: u16 = 2 + BUMP_ITEMS.len() as u16;

/// True when both stdin and stdout are attached to a terminal.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

pub(crate) fn require_tty(hint: &'static str) -> Result<()> {
    if is_interactive() {
        Ok(())
    } else {
        Err(Error::TtyRequired { hint })
    }
}

/// Ask which component of `current` to bump.
pub fn pick_bump(current: &SemanticVersion) -> Result<Bump> {
    require_tty("pass the bump explicitly, e.g. 'repoflow tag bump patch'")?;
    let mut stdout = io::stdout();
    let mut selected: usize = 0;

    terminal::enable_raw_mode()?;
    let _ = stdout.execute(cursor::Hide);

    if let Err(e) = draw_picker(&mut stdout, current, selected) {
        restore_terminal(&mut stdout);
        return Err(Error::Io(e));
    }

    let result = loop {
        let evt = match event::read() {
            Ok(e) => e,
            Err(e) => {
                restore_terminal(&mut stdout);
                return Err(Error::Io(e));
            }
        };

        if let event::Event::Key(key) = evt {
            match key.code {
                event::KeyCode::Up | event::KeyCode::Char('k') => {
                    selected = (selected + BUMP_ITEMS.len() - 1) % BUMP_ITEMS.len();
                }
                event::KeyCode::Down | event::KeyCode::Char('j') => {
                    selected = (selected + 1) % BUMP_ITEMS.len();
                }
                event::KeyCode::Enter => break Some(selected),
                event::KeyCode::Char('q') | event::KeyCode::Esc => break None,
                event::KeyCode::Char('c')
                    if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                {
                    break None;
                }
                _ => continue,
            }

            let _ = erase_picker(&mut stdout);
            let _ = draw_picker(&mut stdout, current, selected);
        }
    };

    let _ = erase_picker(&mut stdout);
    restore_terminal(&mut stdout);

    result
        .and_then(|idx| BUMP_ITEMS.get(idx).copied())
        .ok_or(Error::Cancelled)
}

fn restore_terminal(stdout: &mut io::Stdout) {
    let _ = stdout.execute(cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn draw_picker<W: Write>(out: &mut W, current: &SemanticVersion, selected: usize) -> io::Result<()> {
    out.queue(Print(format!("Bump {}:\r\n", current)))?;
    for (i, line) in picker_lines(current).iter().enumerate() {
        if i == selected {
            out.queue(Print(format!("  ● {}\r\n", line).bold()))?;
        } else {
            out.queue(Print(format!("  ○ {}\r\n", line)))?;
        }
    }
    out.queue(Print("\r\n"))?;
    out.queue(Print("↑/↓: Navigate  Enter: Select  q: Cancel".dark_grey()))?;
    out.flush()
}

/// Move back to the picker's first row and clear everything below it.
fn erase_picker<W: Write>(out: &mut W) -> io::Result<()> {
    out.queue(cursor::MoveUp(PICKER_BREAKS))?;
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
    out.flush()
}

/// One picker line per bump kind: `patch -> v1.2.4`.
fn picker_lines(current: &SemanticVersion) -> Vec<String> {
    BUMP_ITEMS
        .iter()
        .map(|bump| match current.bump(*bump) {
            Ok(next) => format!("{:<5} -> {}", bump.as_str(), next),
            Err(_) => format!("{:<5} -> (at maximum)", bump.as_str()),
        })
        .collect()
}

/// Ask a yes/no question. Anything but `y`/`yes` declines.
pub fn confirm(question: &str) -> Result<bool> {
    require_tty("pass --yes to skip confirmation")?;
    let mut stdout = io::stdout();
    write!(stdout, "{} [y/N] ", question)?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
