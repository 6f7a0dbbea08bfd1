use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ModelConfig;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Chat completion request failed: {0}")]
    Request(#[from] async_openai::error::OpenAIError),
    #[error("Chat completion returned no choices")]
    NoChoices,
    #[error("Chat completion service error: {0}")]
    Service(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match &self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

/// Renders the text alone, on a single line. Backslashes and line breaks are
/// escaped.
impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.text.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

/// Whether the remote service may invoke functions on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionChoice {
    #[default]
    Auto,
    Required,
    None,
}

impl FunctionChoice {
    /// Wire value for the `tool_choice` request field.
    pub fn as_str(&self) -> &'static str {
        match &self {
            FunctionChoice::Auto => "auto",
            FunctionChoice::Required => "required",
            FunctionChoice::None => "none",
        }
    }
}

/// Per-call settings handed to the completion service untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSettings {
    pub model_id: String,
    pub function_choice: FunctionChoice,
}

impl From<&ModelConfig> for ExecutionSettings {
    fn from(config: &ModelConfig) -> Self {
        Self {
            model_id: config.name.clone(),
            function_choice: FunctionChoice::default(),
        }
    }
}

/// The next message produced by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub role: Role,
    pub content: Option<String>,
}

impl ChatReply {
    /// Textual content, empty when the service sent none.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    pub fn into_turn(self) -> Turn {
        Turn {
            role: self.role,
            text: self.content.unwrap_or_default(),
        }
    }
}

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Produce the next reply for the whole conversation in `history`.
    async fn complete(
        &self,
        history: &[Turn],
        settings: &ExecutionSettings,
    ) -> Result<ChatReply, CompletionError>;
}
