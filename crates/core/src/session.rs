//! A session is one conversation between the user and the completion service.
//! The service keeps no state between calls, so the whole history is replayed
//! on every request.
use crate::completion::{ChatCompletion, ChatReply, CompletionError, ExecutionSettings, Turn};
use crate::history::History;
use tracing::{debug, instrument, warn};

pub struct Session {
    model: Box<dyn ChatCompletion>,
    settings: ExecutionSettings,
    history: History,
}

impl Session {
    pub fn new(model: Box<dyn ChatCompletion>, settings: ExecutionSettings) -> Self {
        Self {
            model,
            settings,
            history: History::new(),
        }
    }

    /// Sends `input` as the next user turn and records the reply.
    ///
    /// On failure the user turn is rolled back and the history is left as it
    /// was before the call.
    #[instrument(skip(self, input), fields(turns = self.history.len()))]
    pub async fn send(&mut self, input: &str) -> Result<ChatReply, CompletionError> {
        let rollback_len = self.history.len();
        self.history.push(Turn::user(input));

        match self
            .model
            .complete(self.history.turns(), &self.settings)
            .await
        {
            Ok(reply) => {
                debug!(role = %reply.role, chars = reply.text().len(), "Received reply");
                self.history.push(reply.clone().into_turn());
                Ok(reply)
            }
            Err(e) => {
                warn!(error = %e, "Completion failed, discarding user turn");
                self.history.truncate(rollback_len);
                Err(e)
            }
        }
    }

    pub fn settings(&self) -> &ExecutionSettings {
        &self.settings
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }
}
