// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed argv table for launchable applications

use crate::action::App;
use std::path::Path;

pub const DEFAULT_BROWSER_URL: &str = "https://www.google.com";
pub const DEFAULT_EDITOR: &str = "gedit";

/// Command lines used to launch each [`App`].
///
/// Only these argv vectors are ever executed for launch actions; command
/// text never reaches a process argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launchers {
    browser: Vec<String>,
    file_manager: Vec<String>,
    editor: Vec<String>,
}

impl Launchers {
    /// Default table: `xdg-open <url>`, `xdg-open <home>`, and the editor.
    pub fn new(home: &Path, browser_url: &str, editor: &str) -> Self {
        Self {
            browser: vec!["xdg-open".to_string(), browser_url.to_string()],
            file_manager: vec!["xdg-open".to_string(), home.display().to_string()],
            editor: vec![editor.to_string()],
        }
    }

    pub fn for_home(home: &Path) -> Self {
        Self::new(home, DEFAULT_BROWSER_URL, DEFAULT_EDITOR)
    }

    pub fn argv(&self, app: App) -> &[String] {
        match app {
            App::Browser => &self.browser,
            App::FileManager => &self.file_manager,
            App::Editor => &self.editor,
        }
    }
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
