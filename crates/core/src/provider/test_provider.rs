//! A scripted chat completion service for unit tests.
use crate::completion::{
    ChatCompletion, ChatReply, CompletionError, ExecutionSettings, Role, Turn,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Arguments of one `complete` call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub history: Vec<Turn>,
    pub settings: ExecutionSettings,
}

/// Replays a fixed list of outcomes and records every call it receives.
///
/// Once the script runs out the last outcome is repeated. An `Err(message)`
/// entry yields `CompletionError::Service(message)`.
#[derive(Debug)]
pub struct ScriptedModel {
    script: Mutex<VecDeque<Result<ChatReply, String>>>,
    last: Mutex<Option<Result<ChatReply, String>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedModel {
    pub fn new(script: Vec<Result<ChatReply, String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answers with `text`.
    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(ChatReply {
            role: Role::Assistant,
            content: Some(text.to_string()),
        })])
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<RecordedCall>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedModel {
    async fn complete(
        &self,
        history: &[Turn],
        settings: &ExecutionSettings,
    ) -> Result<ChatReply, CompletionError> {
        self.calls.lock().unwrap().push(RecordedCall {
            history: history.to_vec(),
            settings: settings.clone(),
        });

        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = Some(next);
        }

        match last.clone() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(CompletionError::Service(message)),
            None => Err(CompletionError::NoChoices),
        }
    }
}
