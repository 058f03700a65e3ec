// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop actions a recognized command resolves to

use std::path::PathBuf;

/// Applications that can be launched by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum App {
    Browser,
    FileManager,
    Editor,
}

impl App {
    /// Confirmation recorded after a successful launch.
    pub fn confirmation(self) -> &'static str {
        match self {
            App::Browser => "Opened browser.",
            App::FileManager => "Opened file manager.",
            App::Editor => "Opened text editor.",
        }
    }
}

/// Fixed editing shortcuts with their own phrasings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    Copy,
    Paste,
    Save,
}

impl Shortcut {
    /// The chord pressed for this shortcut.
    pub fn keys(self) -> [&'static str; 2] {
        match self {
            Shortcut::Copy => ["ctrl", "c"],
            Shortcut::Paste => ["ctrl", "v"],
            Shortcut::Save => ["ctrl", "s"],
        }
    }

    pub fn confirmation(self) -> &'static str {
        match self {
            Shortcut::Copy => "Pressed Ctrl+C.",
            Shortcut::Paste => "Pressed Ctrl+V.",
            Shortcut::Save => "Pressed Ctrl+S.",
        }
    }
}

/// A validated desktop action ready to hand to an executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Launch(App),
    /// Create the file if absent, then open it
    CreateFile {
        path: PathBuf,
    },
    /// Open an existing file; existence is checked at dispatch time
    OpenFile {
        path: PathBuf,
    },
    TypeText {
        text: String,
    },
    PressEnter,
    Shortcut(Shortcut),
    /// Ordered chord, e.g. `["ctrl", "shift", "n"]`
    Hotkey {
        keys: Vec<String>,
    },
}

impl Action {
    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Launch(_) => "launch",
            Action::CreateFile { .. } => "create_file",
            Action::OpenFile { .. } => "open_file",
            Action::TypeText { .. } => "type_text",
            Action::PressEnter => "press_enter",
            Action::Shortcut(_) => "shortcut",
            Action::Hotkey { .. } => "hotkey",
        }
    }
}
