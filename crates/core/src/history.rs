//! Conversation history and its plain-text dump.
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{info, instrument};

use crate::completion::Turn;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to write chat history to '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered turns of a conversation, oldest first. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Drops turns added after the history had `len` entries.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.turns.truncate(len);
    }

    /// Writes one line per turn, in order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for turn in self.iter() {
            writeln!(writer, "{turn}")?;
        }
        writer.flush()
    }

    /// Overwrites `path` with the history, creating parent directories as needed.
    #[instrument(skip(self), fields(turns = self.len()))]
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let io_err = |source| HistoryError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let file = File::create(path).map_err(io_err)?;
        self.write_to(&mut BufWriter::new(file)).map_err(io_err)?;
        info!("Chat history saved");
        Ok(())
    }
}
