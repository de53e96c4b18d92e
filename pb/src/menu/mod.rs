//! Interactive menu for the phonebook
//!
//! Collects fields from the operator, forwards them verbatim to a
//! [`Directory`](crate::Directory) and renders the results.

mod command;
mod session;

pub use command::MenuCommand;
pub use session::MenuSession;

use std::io::{self, BufRead, IsTerminal};

use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::config::Config;

/// Source of operator input, one line at a time
pub trait LineSource {
    /// Read a line after showing `prompt`, without its line terminator.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line editor for terminals
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl+C and Ctrl+D both leave the menu
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
        }
    }
}

/// Plain buffered reader for piped or scripted input; prompts are not echoed
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

/// Run the menu on the process terminal
///
/// This is the main entry point for `pb menu`. `capacity` comes from the
/// command line; when absent the operator is asked.
pub fn run_interactive(config: &Config, capacity: Option<i64>) -> Result<()> {
    if io::stdin().is_terminal() {
        let session = MenuSession::start(EditorSource::new()?, io::stdout(), config, capacity)?;
        session.run()?;
    } else {
        let session = MenuSession::start(ReaderSource::new(io::stdin().lock()), io::stdout(), config, capacity)?;
        session.run()?;
    }
    Ok(())
}
