//! Text editing capability.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io::Write;
use std::process::Command;

use crate::error::{Error, Result};

/// Something that lets the user edit a piece of text.
pub trait Editor {
    /// Return the edited version of `text`. An empty result means the user
    /// emptied the buffer.
    fn edit(&self, text: &str) -> Result<String>;
}

/// Opens the user's editor on a temporary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalEditor {
    program: String,
    args: Vec<String>,
}

impl ExternalEditor {
    /// Build from a shell-style command line such as `code --wait`.
    pub fn from_command(command: &str) -> Result<Self> {
        let mut words = shlex::split(command)
            .ok_or_else(|| Error::Editor {
                program: command.to_string(),
                message: "cannot parse editor command".to_string(),
            })?
            .into_iter();
        let program = words.next().ok_or(Error::EditorNotConfigured)?;

        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// Use `$VISUAL`, falling back to `$EDITOR`.
    pub fn from_env() -> Result<Self> {
        let command = ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or(Error::EditorNotConfigured)?;
        Self::from_command(&command)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Editor for ExternalEditor {
    fn edit(&self, text: &str) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix("hosts-manager")
            .suffix(".hosts")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        let path = file.into_temp_path();

        tracing::debug!(program = %self.program, path = %path.display(), "Launching editor");
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path.as_os_str())
            .status()
            .map_err(|e| Error::Editor {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::Editor {
                program: self.program.clone(),
                message: format!("exited with {}", status),
            });
        }

        Ok(fs::read_to_string(&path)?)
    }
}

/// Editor that replays canned replies, for tests.
///
/// Each call to [`Editor::edit`] returns the next queued reply; once the queue
/// is empty the input comes back unchanged. Inputs are recorded.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    replies: RefCell<VecDeque<String>>,
    seen: RefCell<Vec<String>>,
}

impl ScriptedEditor {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: RefCell::new(replies.into_iter().map(Into::into).collect()),
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Texts the editor was opened with, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl Editor for ScriptedEditor {
    fn edit(&self, text: &str) -> Result<String> {
        self.seen.borrow_mut().push(text.to_string());
        Ok(self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| text.to_string()))
    }
}
