use std::io::{BufRead, Write};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::Result;

/// Source of raw user input lines. `Ok(None)` means the input is exhausted.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive line editor with in-session history.
pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Plain line reader for scripted sessions. Prompts are echoed to `echo` when provided.
pub struct ScriptSource<R: BufRead> {
    reader: R,
    echo: Option<Box<dyn Write>>,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, echo: None }
    }

    pub fn with_echo(mut self, echo: Box<dyn Write>) -> Self {
        self.echo = Some(echo);
        self
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if let Some(echo) = self.echo.as_mut() {
            writeln!(echo, "{prompt}")?;
        }
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let line = buffer.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(line))
    }
}
