// Drives a chat session from user input
use crate::chat::LineReader;
use crate::ux::{
    USER_PROMPT, write_farewell, write_history_saved, write_reply, write_service_error,
};
use anyhow::{Context, Result};
use friend_core::history::History;
use friend_core::session::Session;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

/// Exchanges messages until the user enters a blank line or input ends.
///
/// A failed completion is reported on `out` and the loop keeps going; the
/// session has already discarded the unanswered user turn.
pub async fn converse<R, W>(session: &mut Session, input: &mut R, out: &mut W) -> Result<()>
where
    R: LineReader,
    W: Write,
{
    while let Some(line) = input.read_line(USER_PROMPT)? {
        if line.trim().is_empty() {
            break;
        }

        match session.send(&line).await {
            Ok(reply) => write_reply(out, reply.text())?,
            Err(e) => write_service_error(out, &e)?,
        }
    }
    Ok(())
}

/// Runs the whole chat: the conversation, the farewell and the history dump
/// to `history_path`.
#[instrument(skip(session, input, out))]
pub async fn start_chat<R, W>(
    mut session: Session,
    input: &mut R,
    out: &mut W,
    history_path: &Path,
) -> Result<History>
where
    R: LineReader,
    W: Write,
{
    converse(&mut session, input, out).await?;
    write_farewell(out)?;

    let history = session.into_history();
    info!(turns = history.len(), "Chat ended");
    history
        .save(history_path)
        .context("Failed to save chat history")?;
    write_history_saved(out, history_path)?;
    Ok(history)
}
