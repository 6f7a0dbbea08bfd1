//! Test helpers for the friend crate: scripted input and a canned completion
//! service.

use crate::chat::LineReader;
use anyhow::Result;
use async_trait::async_trait;
use friend_core::completion::{
    ChatCompletion, ChatReply, CompletionError, ExecutionSettings, Role, Turn,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Feeds a fixed list of lines, then reports end of input.
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, one per read.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Answers from a script of texts or error messages, repeating the last entry,
/// and records the history of every call.
pub struct EchoModel {
    script: Mutex<VecDeque<Result<String, String>>>,
    last: Mutex<Result<String, String>>,
    calls: Arc<Mutex<Vec<Vec<Turn>>>>,
}

impl EchoModel {
    pub fn new(script: Vec<Result<String, String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(Err("empty script".to_string())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<Vec<Turn>>>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ChatCompletion for EchoModel {
    async fn complete(
        &self,
        history: &[Turn],
        _settings: &ExecutionSettings,
    ) -> Result<ChatReply, CompletionError> {
        self.calls.lock().unwrap().push(history.to_vec());

        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = next;
        }

        match &*last {
            Ok(text) => Ok(ChatReply {
                role: Role::Assistant,
                content: Some(text.clone()),
            }),
            Err(message) => Err(CompletionError::Service(message.clone())),
        }
    }
}
