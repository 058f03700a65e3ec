// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command interpreter: maps raw command text to a desktop action.
//!
//! Interpretation is pure. Phrases are matched case-insensitively, but
//! arguments (file names, typed text, key names) keep their original case.
//! Rules are tried in a fixed order and the first match wins.

use crate::action::{Action, App, Shortcut};
use crate::error::CommandError;
use std::path::{Path, PathBuf};

const BROWSER_PHRASES: &[&str] = &["open browser", "open chrome", "launch browser"];
const FILE_MANAGER_PHRASES: &[&str] = &["open file manager", "open files"];
const EDITOR_PHRASES: &[&str] = &["open notepad", "open editor"];
const ENTER_PHRASES: &[&str] = &["press enter", "enter"];
const COPY_PHRASES: &[&str] = &["copy", "ctrl c"];
const PASTE_PHRASES: &[&str] = &["paste", "ctrl v"];
const SAVE_PHRASES: &[&str] = &["save", "ctrl s"];

const CREATE_FILE: &str = "create file";
const OPEN_FILE: &str = "open file ";
const TYPE: &str = "type ";
const HOTKEY: &str = "hotkey";

pub const EMPTY_COMMAND: &str = "Command text is required.";
pub const MISSING_FILE_NAME: &str = "Missing file name. Try: create file notes.txt";
pub const MISSING_KEYS: &str = "No keys provided. Example: hotkey ctrl+shift+n";

/// Resolves command text against a fixed phrase table.
#[derive(Debug, Clone)]
pub struct Interpreter {
    home: PathBuf,
}

impl Interpreter {
    /// `home` anchors `create file` targets and `~` expansion.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn interpret(&self, raw: &str) -> Result<Action, CommandError> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(CommandError::validation(EMPTY_COMMAND));
        }
        let folded = input.to_lowercase();
        let cmd = folded.as_str();

        if BROWSER_PHRASES.contains(&cmd) {
            return Ok(Action::Launch(App::Browser));
        }
        if FILE_MANAGER_PHRASES.contains(&cmd) {
            return Ok(Action::Launch(App::FileManager));
        }
        if EDITOR_PHRASES.contains(&cmd) {
            return Ok(Action::Launch(App::Editor));
        }

        if let Some(name) = keyword_arg(input, CREATE_FILE) {
            return self.create_file(name);
        }
        if let Some(path) = strip_prefix_ci(input, OPEN_FILE) {
            return Ok(Action::OpenFile {
                path: expand_home(path.trim(), &self.home),
            });
        }
        if let Some(text) = strip_prefix_ci(input, TYPE) {
            return Ok(Action::TypeText {
                text: text.to_string(),
            });
        }

        if ENTER_PHRASES.contains(&cmd) {
            return Ok(Action::PressEnter);
        }
        if COPY_PHRASES.contains(&cmd) {
            return Ok(Action::Shortcut(Shortcut::Copy));
        }
        if PASTE_PHRASES.contains(&cmd) {
            return Ok(Action::Shortcut(Shortcut::Paste));
        }
        if SAVE_PHRASES.contains(&cmd) {
            return Ok(Action::Shortcut(Shortcut::Save));
        }

        if let Some(chord) = keyword_arg(input, HOTKEY) {
            return parse_chord(chord).map(|keys| Action::Hotkey { keys });
        }

        Err(CommandError::Unrecognized)
    }

    fn create_file(&self, name: &str) -> Result<Action, CommandError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::validation(MISSING_FILE_NAME));
        }
        let safe = sanitize_file_name(name);
        if safe == "." || safe == ".." {
            return Err(CommandError::Validation(format!("Invalid file name: {name}")));
        }
        Ok(Action::CreateFile {
            path: self.home.join(safe),
        })
    }
}

/// Replace every character outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Expand a leading `~` to `home`.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Split `a+b+c` into trimmed, non-empty keys, preserving order.
fn parse_chord(chord: &str) -> Result<Vec<String>, CommandError> {
    let keys: Vec<String> = chord
        .split('+')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    if keys.is_empty() {
        return Err(CommandError::validation(MISSING_KEYS));
    }
    Ok(keys)
}

fn strip_prefix_ci<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        input.get(prefix.len()..)
    } else {
        None
    }
}

/// Matches `keyword` alone (empty argument) or `keyword <arg>`.
fn keyword_arg<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = strip_prefix_ci(input, keyword)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix(' ')
    }
}

#[cfg(test)]
#[path = "interpret_tests.rs"]
mod tests;
