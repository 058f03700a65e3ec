// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turns command text into exactly one outcome: a confirmation or an error.

use dr_adapters::ActionExecutor;
use dr_core::{Action, CommandError, Interpreter, Launchers};

/// Interprets command text and drives the executor for the resulting action.
pub struct Dispatcher<E> {
    interpreter: Interpreter,
    launchers: Launchers,
    executor: E,
}

impl<E: ActionExecutor> Dispatcher<E> {
    pub fn new(interpreter: Interpreter, launchers: Launchers, executor: E) -> Self {
        Self {
            interpreter,
            launchers,
            executor,
        }
    }

    /// Interpret and execute; returns the human-readable confirmation.
    pub async fn run(&self, text: &str) -> Result<String, CommandError> {
        let action = self.interpreter.interpret(text)?;
        tracing::debug!(action = action.name(), "interpreted command");
        self.execute(action).await
    }

    pub async fn execute(&self, action: Action) -> Result<String, CommandError> {
        match action {
            Action::Launch(app) => {
                self.executor
                    .launch_application(self.launchers.argv(app))
                    .await?;
                Ok(app.confirmation().to_string())
            }
            Action::CreateFile { path } => {
                self.executor.touch_and_open(&path).await?;
                Ok(format!("Created file: {}", path.display()))
            }
            Action::OpenFile { path } => {
                // Checked here rather than at interpretation; the file may
                // still vanish before the opener reads it
                if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
                    return Err(CommandError::NotFound(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                self.executor.open_path(&path).await?;
                Ok(format!("Opened file: {}", path.display()))
            }
            Action::TypeText { text } => {
                self.executor.inject_text(&text).await?;
                Ok(format!("Typed text ({} chars).", text.chars().count()))
            }
            Action::PressEnter => {
                self.executor.press_key("enter").await?;
                Ok("Pressed Enter.".to_string())
            }
            Action::Shortcut(shortcut) => {
                let keys = shortcut.keys().map(str::to_string);
                self.executor.press_chord(&keys).await?;
                Ok(shortcut.confirmation().to_string())
            }
            Action::Hotkey { keys } => {
                self.executor.press_chord(&keys).await?;
                Ok(format!("Pressed hotkey: {}", keys.join(" + ")))
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
