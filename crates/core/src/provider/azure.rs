use crate::completion::{ChatCompletion, ChatReply, CompletionError, ExecutionSettings, Turn};
use crate::model::ModelConfig;
use async_openai::Client as OpenAIClient;
use async_openai::config::AzureConfig;
use async_trait::async_trait;
use tracing::{debug, instrument};

use super::openai_types::{ChatCompletionRequest, ChatCompletionResponse, RequestMessage};

/// Chat completion against an Azure OpenAI deployment.
pub struct AzureChatModel {
    client: OpenAIClient<AzureConfig>,
}

impl AzureChatModel {
    pub fn new(model_config: &ModelConfig) -> Self {
        let config = AzureConfig::new()
            .with_api_base(model_config.endpoint.as_str())
            .with_api_version(model_config.api_version.as_str())
            .with_deployment_id(model_config.name.as_str())
            .with_api_key(model_config.api_key.expose());

        Self {
            client: OpenAIClient::with_config(config),
        }
    }

    fn to_request<'a>(
        history: &'a [Turn],
        settings: &'a ExecutionSettings,
    ) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: settings.model_id.as_str(),
            messages: history
                .iter()
                .map(|turn| RequestMessage {
                    role: turn.role,
                    content: turn.text.as_str(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl ChatCompletion for AzureChatModel {
    // No functions are advertised, so `function_choice` has nothing to select
    // from and is not put on the wire (`tool_choice` without `tools` is
    // rejected by the API).
    #[instrument(skip_all, fields(model = %settings.model_id, turns = history.len(), function_choice = settings.function_choice.as_str()))]
    async fn complete(
        &self,
        history: &[Turn],
        settings: &ExecutionSettings,
    ) -> Result<ChatReply, CompletionError> {
        let request = Self::to_request(history, settings);

        let response: ChatCompletionResponse = self.client.chat().create_byot(request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Completion usage"
            );
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(CompletionError::NoChoices)?;
        debug!(finish_reason = ?choice.finish_reason, "Completion finished");

        Ok(ChatReply {
            role: choice.message.role,
            content: choice.message.content,
        })
    }
}
