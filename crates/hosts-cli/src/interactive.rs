//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal confirmation.

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::Confirm;

use crate::error::Result;

/// Decides whether a rejected hostgroup body goes back to the editor.
pub trait ReopenPrompt {
    fn reopen(&self, name: &str, error: &hosts_core::Error) -> Result<bool>;
}

/// Asks on the terminal; never reopens when stdin is not a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl ReopenPrompt for TerminalPrompt {
    fn reopen(&self, name: &str, error: &hosts_core::Error) -> Result<bool> {
        if !std::io::stdin().is_terminal() {
            return Ok(false);
        }

        eprintln!("{} {}", "error:".red().bold(), error);
        let again = Confirm::new()
            .with_prompt(format!("Reopen '{}' in the editor?", name))
            .default(true)
            .interact()?;
        Ok(again)
    }
}

/// Answers the same way every time.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt(pub bool);

#[cfg(test)]
impl ReopenPrompt for FixedPrompt {
    fn reopen(&self, _name: &str, _error: &hosts_core::Error) -> Result<bool> {
        Ok(self.0)
    }
}
