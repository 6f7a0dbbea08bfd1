use anyhow::Result;
use rustyline::{DefaultEditor, error::ReadlineError};
use std::io::{self, BufRead, BufReader, IsTerminal, Stdin, Stdout, Write};
use tracing::debug;

/// Source of user input lines.
pub trait LineReader {
    /// Shows `prompt` and reads one line. `None` means no more input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Input from the process: a line editor on a terminal, plain buffered reads
/// when stdin is piped or redirected.
pub enum ConsoleInput {
    Editor(DefaultEditor),
    Piped(PlainInput<BufReader<Stdin>, Stdout>),
}

impl ConsoleInput {
    pub fn new() -> Result<Self> {
        if io::stdin().is_terminal() {
            Ok(Self::Editor(DefaultEditor::new()?))
        } else {
            debug!("stdin is not a terminal, reading lines directly");
            Ok(Self::Piped(PlainInput::new(
                BufReader::new(io::stdin()),
                io::stdout(),
            )))
        }
    }
}

impl LineReader for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self {
            Self::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.as_str())?;
                    }
                    Ok(Some(line))
                }
                // Ctrl-C at the prompt ends the chat like an empty line
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    debug!("Input closed");
                    Ok(None)
                }
                Err(err) => Err(err.into()),
            },
            Self::Piped(plain) => plain.read_line(prompt),
        }
    }
}

/// Writes the prompt to `writer` and reads a line from `reader`, without the
/// line terminator.
pub struct PlainInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PlainInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> LineReader for PlainInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
